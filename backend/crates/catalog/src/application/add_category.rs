//! Add Category Use Case

use std::sync::Arc;

use crate::domain::entity::category::Category;
use crate::domain::repository::CategoryRepository;
use crate::domain::value_object::category_name::CategoryName;
use crate::error::{CatalogError, CatalogResult};

/// Add category use case
pub struct AddCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> AddCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, name: Option<String>) -> CatalogResult<Category> {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .ok_or(CatalogError::MissingCategoryName)?;
        let name = CategoryName::new(name)?;

        if self.category_repo.exists_by_name(&name).await? {
            return Err(CatalogError::CategoryExists);
        }

        let category = Category::new(name);
        self.category_repo.create(&category).await?;

        tracing::info!(
            category_id = %category.category_id,
            name = %category.name,
            "Category created"
        );

        Ok(category)
    }
}
