//! Item Entity
//!
//! Sellable product with embedded nutrition facts and pre-hosted image
//! URLs. The category reference is checked at creation; afterwards the
//! only referential enforcement is cascade-on-delete.

use auth::models::user_id::UserId;
use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, ItemId};

use crate::domain::value_object::{nutrition::NutritionFacts, price::Price};

/// Item entity
#[derive(Debug, Clone)]
pub struct Item {
    /// Internal UUID identifier
    pub item_id: ItemId,
    /// Display name
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Non-negative price
    pub price: Price,
    /// Owning category
    pub category_id: CategoryId,
    /// Image URLs, already hosted externally (0..N)
    pub images: Vec<String>,
    /// Admin who created the item
    pub created_by: UserId,
    /// Embedded nutrition facts
    pub nutrition: NutritionFacts,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item
    pub fn new(
        name: String,
        description: Option<String>,
        price: Price,
        category_id: CategoryId,
        images: Vec<String>,
        nutrition: NutritionFacts,
        created_by: UserId,
    ) -> Self {
        Self {
            item_id: ItemId::new(),
            name,
            description,
            price,
            category_id,
            images,
            created_by,
            nutrition,
            created_at: Utc::now(),
        }
    }

    /// Replace the nutrition facts
    ///
    /// Idempotent: applying the same facts twice yields the same record.
    pub fn set_nutrition(&mut self, nutrition: NutritionFacts) {
        self.nutrition = nutrition;
    }
}
