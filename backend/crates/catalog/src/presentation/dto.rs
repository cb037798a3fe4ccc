//! API DTOs (Data Transfer Objects)
//!
//! Two item shapes exist on purpose: the public response carries no
//! creator data at all, so the shopper listing cannot leak it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{category::Category, item::Item};
use crate::domain::read_model::ItemView;
use crate::domain::value_object::nutrition::NutritionFacts;

// ============================================================================
// Category requests/responses
// ============================================================================

/// Add category request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Update category request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Category response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.category_id.to_string(),
            name: category.name.as_str().to_string(),
        }
    }
}

/// Category list response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryResponse>,
}

/// Single category response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetailResponse {
    pub category: CategoryResponse,
}

/// Create/update category response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMessageResponse {
    pub message: String,
    pub category: CategoryResponse,
}

// ============================================================================
// Item requests
// ============================================================================

/// Add item request
///
/// Mandatory fields (name, price, categoryId, nutrition) are optional on
/// the wire so their absence maps to the documented 400, not a
/// deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub nutrition: Option<NutritionFacts>,
}

/// Update item request (all fields optional, merged)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub nutrition: Option<NutritionFacts>,
}

// ============================================================================
// Item responses
// ============================================================================

/// Bare item response (create/update/delete results)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: String,
    pub images: Vec<String>,
    pub nutrition: NutritionFacts,
    pub created_by: String,
    pub created_at: String,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.item_id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.amount(),
            category_id: item.category_id.to_string(),
            images: item.images.clone(),
            nutrition: item.nutrition,
            created_by: item.created_by.to_string(),
            created_at: item.created_at.to_rfc3339(),
        }
    }
}

/// Resolved category reference in listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: String,
    pub name: Option<String>,
}

/// Public item: no creator reference, ever
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicItemResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: CategoryRef,
    pub images: Vec<String>,
    pub nutrition: NutritionFacts,
}

impl From<&ItemView> for PublicItemResponse {
    fn from(view: &ItemView) -> Self {
        Self {
            id: view.item.item_id.to_string(),
            name: view.item.name.clone(),
            description: view.item.description.clone(),
            price: view.item.price.amount(),
            category: CategoryRef {
                id: view.item.category_id.to_string(),
                name: view.category_name.clone(),
            },
            images: view.item.images.clone(),
            nutrition: view.item.nutrition,
        }
    }
}

/// Creator identity in the admin listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorResponse {
    pub username: String,
    pub email: String,
}

/// Admin item: public shape plus creator and timestamp
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminItemResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: CategoryRef,
    pub images: Vec<String>,
    pub nutrition: NutritionFacts,
    pub created_by: Option<CreatorResponse>,
    pub created_at: String,
}

impl From<&ItemView> for AdminItemResponse {
    fn from(view: &ItemView) -> Self {
        Self {
            id: view.item.item_id.to_string(),
            name: view.item.name.clone(),
            description: view.item.description.clone(),
            price: view.item.price.amount(),
            category: CategoryRef {
                id: view.item.category_id.to_string(),
                name: view.category_name.clone(),
            },
            images: view.item.images.clone(),
            nutrition: view.item.nutrition,
            created_by: view.created_by.as_ref().map(|c| CreatorResponse {
                username: c.username.clone(),
                email: c.email.clone(),
            }),
            created_at: view.item.created_at.to_rfc3339(),
        }
    }
}

/// Public items listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicItemsResponse {
    pub items: Vec<PublicItemResponse>,
}

/// Admin items listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminItemsResponse {
    pub items: Vec<AdminItemResponse>,
}

/// Items of one category
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItemsResponse {
    pub items: Vec<ItemResponse>,
}

/// Item mutation response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMessageResponse {
    pub message: String,
    pub item: ItemResponse,
}

/// Plain message response (category delete)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Nutrition
// ============================================================================

/// Nutrition lookup response: item id, name, and the facts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionItemResponse {
    pub id: String,
    pub name: String,
    pub nutrition: NutritionFacts,
}

/// Nutrition response wrapper
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResponse {
    pub item: NutritionItemResponse,
}

impl From<&Item> for NutritionItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.item_id.to_string(),
            name: item.name.clone(),
            nutrition: item.nutrition,
        }
    }
}
