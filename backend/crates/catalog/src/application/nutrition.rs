//! Nutrition Use Case
//!
//! Set and fetch the nutrition facts of one item.

use std::sync::Arc;

use kernel::id::ItemId;

use crate::domain::entity::item::Item;
use crate::domain::repository::ItemRepository;
use crate::domain::value_object::nutrition::NutritionFacts;
use crate::error::{CatalogError, CatalogResult};

/// Nutrition use case
pub struct NutritionUseCase<I>
where
    I: ItemRepository,
{
    item_repo: Arc<I>,
}

impl<I> NutritionUseCase<I>
where
    I: ItemRepository,
{
    pub fn new(item_repo: Arc<I>) -> Self {
        Self { item_repo }
    }

    /// Replace the item's nutrition facts (idempotent)
    pub async fn set(&self, item_id: &ItemId, facts: NutritionFacts) -> CatalogResult<Item> {
        let mut item = self
            .item_repo
            .find_by_id(item_id)
            .await?
            .ok_or(CatalogError::ItemNotFound)?;

        item.set_nutrition(facts);
        self.item_repo.update(&item).await?;

        tracing::info!(item_id = %item.item_id, "Nutrition facts updated");

        Ok(item)
    }

    /// Fetch the item's nutrition facts
    pub async fn get(&self, item_id: &ItemId) -> CatalogResult<Item> {
        self.item_repo
            .find_by_id(item_id)
            .await?
            .ok_or(CatalogError::ItemNotFound)
    }
}
