//! Update Item Use Case
//!
//! Merges provided fields into the stored record. Beyond existence and
//! price sign there is no validation here, matching the API contract.

use std::sync::Arc;

use kernel::id::{CategoryId, ItemId};
use rust_decimal::Decimal;

use crate::domain::entity::item::Item;
use crate::domain::repository::ItemRepository;
use crate::domain::value_object::{nutrition::NutritionFacts, price::Price};
use crate::error::{CatalogError, CatalogResult};

/// Partial item update; absent fields are left unchanged
#[derive(Default)]
pub struct ItemUpdateInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<String>,
    pub images: Option<Vec<String>>,
    pub nutrition: Option<NutritionFacts>,
}

/// Update item use case
pub struct UpdateItemUseCase<I>
where
    I: ItemRepository,
{
    item_repo: Arc<I>,
}

impl<I> UpdateItemUseCase<I>
where
    I: ItemRepository,
{
    pub fn new(item_repo: Arc<I>) -> Self {
        Self { item_repo }
    }

    pub async fn execute(&self, item_id: &ItemId, input: ItemUpdateInput) -> CatalogResult<Item> {
        let mut item = self
            .item_repo
            .find_by_id(item_id)
            .await?
            .ok_or(CatalogError::ItemNotFound)?;

        if let Some(name) = input.name {
            item.name = name;
        }
        if let Some(description) = input.description {
            item.description = Some(description);
        }
        if let Some(price) = input.price {
            item.price = Price::new(price)?;
        }
        if let Some(category_id) = input.category_id {
            item.category_id = CategoryId::parse(&category_id)
                .map_err(|_| CatalogError::Validation("Invalid category id".to_string()))?;
        }
        if let Some(images) = input.images {
            item.images = images;
        }
        if let Some(nutrition) = input.nutrition {
            item.set_nutrition(nutrition);
        }

        self.item_repo.update(&item).await?;

        tracing::info!(item_id = %item.item_id, "Item updated");

        Ok(item)
    }
}
