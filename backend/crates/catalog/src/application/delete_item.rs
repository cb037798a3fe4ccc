//! Delete Item Use Case

use std::sync::Arc;

use kernel::id::ItemId;

use crate::domain::entity::item::Item;
use crate::domain::repository::ItemRepository;
use crate::error::{CatalogError, CatalogResult};

/// Delete item use case
pub struct DeleteItemUseCase<I>
where
    I: ItemRepository,
{
    item_repo: Arc<I>,
}

impl<I> DeleteItemUseCase<I>
where
    I: ItemRepository,
{
    pub fn new(item_repo: Arc<I>) -> Self {
        Self { item_repo }
    }

    /// Returns the deleted record; a missing id is NotFound, not an error 500
    pub async fn execute(&self, item_id: &ItemId) -> CatalogResult<Item> {
        let deleted = self
            .item_repo
            .delete(item_id)
            .await?
            .ok_or(CatalogError::ItemNotFound)?;

        tracing::info!(item_id = %item_id, "Item deleted");

        Ok(deleted)
    }
}
