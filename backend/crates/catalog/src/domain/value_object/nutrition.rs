//! Nutrition Facts Value Object

use serde::{Deserialize, Serialize};

/// Nutrition facts attached to an item
///
/// All quantities are plain numbers in the unit the storefront displays
/// (kcal for calories, grams for the rest).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub sugar: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_serde_shape() {
        let facts = NutritionFacts {
            calories: 5.0,
            protein: 0.0,
            fat: 0.0,
            carbs: 1.2,
            fiber: 0.0,
            sugar: 0.5,
        };

        let json = serde_json::to_value(&facts).unwrap();
        assert_eq!(json["calories"], 5.0);
        assert_eq!(json["carbs"], 1.2);

        let back: NutritionFacts = serde_json::from_value(json).unwrap();
        assert_eq!(back, facts);
    }
}
