//! Browse Categories Use Case
//!
//! Plain lookups over the category store.

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::entity::category::Category;
use crate::domain::repository::CategoryRepository;
use crate::error::{CatalogError, CatalogResult};

/// Browse categories use case
pub struct BrowseCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> BrowseCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    /// List all categories
    pub async fn list(&self) -> CatalogResult<Vec<Category>> {
        self.category_repo.list().await
    }

    /// Fetch one category by id
    pub async fn get(&self, category_id: &CategoryId) -> CatalogResult<Category> {
        self.category_repo
            .find_by_id(category_id)
            .await?
            .ok_or(CatalogError::CategoryNotFound)
    }
}
