//! Delete Category Use Case
//!
//! Cascade delete: the category and all its items go in one atomic
//! repository operation, so no orphaned items can be left behind.

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::repository::CategoryRepository;
use crate::error::CatalogResult;

/// Delete category use case
pub struct DeleteCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> DeleteCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    /// Returns the number of items removed alongside the category
    pub async fn execute(&self, category_id: &CategoryId) -> CatalogResult<u64> {
        let items_deleted = self.category_repo.delete_with_items(category_id).await?;

        tracing::info!(
            category_id = %category_id,
            items_deleted,
            "Category and its items deleted"
        );

        Ok(items_deleted)
    }
}
