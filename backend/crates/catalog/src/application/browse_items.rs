//! Browse Items Use Case
//!
//! One listing, two audiences: the repository resolves references once,
//! and the presentation layer strips the creator for the public view.

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::entity::item::Item;
use crate::domain::read_model::ItemView;
use crate::domain::repository::ItemRepository;
use crate::error::CatalogResult;

/// Browse items use case
pub struct BrowseItemsUseCase<I>
where
    I: ItemRepository,
{
    item_repo: Arc<I>,
}

impl<I> BrowseItemsUseCase<I>
where
    I: ItemRepository,
{
    pub fn new(item_repo: Arc<I>) -> Self {
        Self { item_repo }
    }

    /// All items with references resolved
    pub async fn list(&self) -> CatalogResult<Vec<ItemView>> {
        self.item_repo.list_views().await
    }

    /// Items of one category, unresolved
    pub async fn list_by_category(&self, category_id: &CategoryId) -> CatalogResult<Vec<Item>> {
        self.item_repo.list_by_category(category_id).await
    }
}
