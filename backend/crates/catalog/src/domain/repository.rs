//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CategoryId, ItemId};

use crate::domain::entity::{category::Category, item::Item};
use crate::domain::read_model::ItemView;
use crate::domain::value_object::category_name::CategoryName;
use crate::error::CatalogResult;

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// Create a new category
    async fn create(&self, category: &Category) -> CatalogResult<()>;

    /// Find category by ID
    async fn find_by_id(&self, category_id: &CategoryId) -> CatalogResult<Option<Category>>;

    /// Check if a category name is already in use
    async fn exists_by_name(&self, name: &CategoryName) -> CatalogResult<bool>;

    /// List all categories
    async fn list(&self) -> CatalogResult<Vec<Category>>;

    /// Update a category
    async fn update(&self, category: &Category) -> CatalogResult<()>;

    /// Delete the category and every item referencing it, atomically.
    ///
    /// Returns the number of items deleted; fails with `CategoryNotFound`
    /// if the category does not exist (no items are touched in that case).
    async fn delete_with_items(&self, category_id: &CategoryId) -> CatalogResult<u64>;
}

/// Item repository trait
#[trait_variant::make(ItemRepository: Send)]
pub trait LocalItemRepository {
    /// Create a new item
    async fn create(&self, item: &Item) -> CatalogResult<()>;

    /// Find item by ID
    async fn find_by_id(&self, item_id: &ItemId) -> CatalogResult<Option<Item>>;

    /// List all items with category name and creator resolved
    async fn list_views(&self) -> CatalogResult<Vec<ItemView>>;

    /// List items belonging to one category (no reference resolution)
    async fn list_by_category(&self, category_id: &CategoryId) -> CatalogResult<Vec<Item>>;

    /// Update an item
    async fn update(&self, item: &Item) -> CatalogResult<()>;

    /// Delete an item, returning the deleted record if it existed
    async fn delete(&self, item_id: &ItemId) -> CatalogResult<Option<Item>>;
}
