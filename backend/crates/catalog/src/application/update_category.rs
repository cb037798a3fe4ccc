//! Update Category Use Case

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::entity::category::Category;
use crate::domain::repository::CategoryRepository;
use crate::domain::value_object::category_name::CategoryName;
use crate::error::{CatalogError, CatalogResult};

/// Update (rename) category use case
pub struct UpdateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> UpdateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(
        &self,
        category_id: &CategoryId,
        name: Option<String>,
    ) -> CatalogResult<Category> {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .ok_or(CatalogError::MissingCategoryName)?;
        let name = CategoryName::new(name)?;

        let mut category = self
            .category_repo
            .find_by_id(category_id)
            .await?
            .ok_or(CatalogError::CategoryNotFound)?;

        category.rename(name);
        self.category_repo.update(&category).await?;

        tracing::info!(
            category_id = %category.category_id,
            name = %category.name,
            "Category renamed"
        );

        Ok(category)
    }
}
