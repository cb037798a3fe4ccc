//! Application Layer
//!
//! Use cases and application services.

pub mod add_category;
pub mod add_item;
pub mod browse_categories;
pub mod browse_items;
pub mod delete_category;
pub mod delete_item;
pub mod nutrition;
pub mod update_category;
pub mod update_item;

// Re-exports
pub use add_category::AddCategoryUseCase;
pub use add_item::{AddItemInput, AddItemUseCase};
pub use browse_categories::BrowseCategoriesUseCase;
pub use browse_items::BrowseItemsUseCase;
pub use delete_category::DeleteCategoryUseCase;
pub use delete_item::DeleteItemUseCase;
pub use nutrition::NutritionUseCase;
pub use update_category::UpdateCategoryUseCase;
pub use update_item::{ItemUpdateInput, UpdateItemUseCase};
