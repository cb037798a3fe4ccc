//! Add Item Use Case
//!
//! Images arrive as URLs already hosted externally; upload happens before
//! this call and is not part of the catalog.

use std::sync::Arc;

use auth::models::user_id::UserId;
use kernel::id::CategoryId;
use rust_decimal::Decimal;

use crate::domain::entity::item::Item;
use crate::domain::repository::{CategoryRepository, ItemRepository};
use crate::domain::value_object::{nutrition::NutritionFacts, price::Price};
use crate::error::{CatalogError, CatalogResult};

/// Add item input
pub struct AddItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<String>,
    pub images: Vec<String>,
    pub nutrition: Option<NutritionFacts>,
    /// The acting admin (from the request context)
    pub created_by: UserId,
}

/// Add item use case
pub struct AddItemUseCase<C, I>
where
    C: CategoryRepository,
    I: ItemRepository,
{
    category_repo: Arc<C>,
    item_repo: Arc<I>,
}

impl<C, I> AddItemUseCase<C, I>
where
    C: CategoryRepository,
    I: ItemRepository,
{
    pub fn new(category_repo: Arc<C>, item_repo: Arc<I>) -> Self {
        Self {
            category_repo,
            item_repo,
        }
    }

    pub async fn execute(&self, input: AddItemInput) -> CatalogResult<Item> {
        let name = input
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(CatalogError::MissingItemFields)?;
        let price = input.price.ok_or(CatalogError::MissingItemFields)?;
        let category_id = input.category_id.ok_or(CatalogError::MissingItemFields)?;
        let nutrition = input.nutrition.ok_or(CatalogError::MissingItemFields)?;

        let price = Price::new(price)?;
        let category_id = CategoryId::parse(&category_id)
            .map_err(|_| CatalogError::Validation("Invalid category id".to_string()))?;

        // The reference must point to a live category at creation time
        if self
            .category_repo
            .find_by_id(&category_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::CategoryNotFound);
        }

        let item = Item::new(
            name,
            input.description,
            price,
            category_id,
            input.images,
            nutrition,
            input.created_by,
        );
        self.item_repo.create(&item).await?;

        tracing::info!(
            item_id = %item.item_id,
            category_id = %item.category_id,
            created_by = %item.created_by,
            "Item created"
        );

        Ok(item)
    }
}
