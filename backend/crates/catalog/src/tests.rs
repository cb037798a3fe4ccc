//! Unit tests for the catalog crate
//!
//! Use cases run against in-memory repositories; no database required.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use auth::models::user_id::UserId;
use rust_decimal::Decimal;
use uuid::Uuid;

use kernel::id::{CategoryId, ItemId};

use crate::application::{
    AddCategoryUseCase, AddItemInput, AddItemUseCase, BrowseCategoriesUseCase, BrowseItemsUseCase,
    DeleteCategoryUseCase, DeleteItemUseCase, ItemUpdateInput, NutritionUseCase,
    UpdateCategoryUseCase, UpdateItemUseCase,
};
use crate::domain::entity::{category::Category, item::Item};
use crate::domain::read_model::{CreatorInfo, ItemView};
use crate::domain::repository::{CategoryRepository, ItemRepository};
use crate::domain::value_object::{category_name::CategoryName, nutrition::NutritionFacts};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{AdminItemResponse, PublicItemResponse};

// ============================================================================
// In-memory repositories
// ============================================================================

#[derive(Clone, Default)]
struct MemoryCatalogRepository {
    categories: Arc<Mutex<HashMap<Uuid, Category>>>,
    items: Arc<Mutex<HashMap<Uuid, Item>>>,
}

impl CategoryRepository for MemoryCatalogRepository {
    async fn create(&self, category: &Category) -> CatalogResult<()> {
        self.categories
            .lock()
            .unwrap()
            .insert(*category.category_id.as_uuid(), category.clone());
        Ok(())
    }

    async fn find_by_id(&self, category_id: &CategoryId) -> CatalogResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .get(category_id.as_uuid())
            .cloned())
    }

    async fn exists_by_name(&self, name: &CategoryName) -> CatalogResult<bool> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .values()
            .any(|c| c.name == *name))
    }

    async fn list(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.categories.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, category: &Category) -> CatalogResult<()> {
        self.categories
            .lock()
            .unwrap()
            .insert(*category.category_id.as_uuid(), category.clone());
        Ok(())
    }

    async fn delete_with_items(&self, category_id: &CategoryId) -> CatalogResult<u64> {
        let mut categories = self.categories.lock().unwrap();
        let mut items = self.items.lock().unwrap();

        if categories.remove(category_id.as_uuid()).is_none() {
            return Err(CatalogError::CategoryNotFound);
        }

        let before = items.len();
        items.retain(|_, item| item.category_id != *category_id);

        Ok((before - items.len()) as u64)
    }
}

impl ItemRepository for MemoryCatalogRepository {
    async fn create(&self, item: &Item) -> CatalogResult<()> {
        self.items
            .lock()
            .unwrap()
            .insert(*item.item_id.as_uuid(), item.clone());
        Ok(())
    }

    async fn find_by_id(&self, item_id: &ItemId) -> CatalogResult<Option<Item>> {
        Ok(self.items.lock().unwrap().get(item_id.as_uuid()).cloned())
    }

    async fn list_views(&self) -> CatalogResult<Vec<ItemView>> {
        let categories = self.categories.lock().unwrap();
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .map(|item| ItemView {
                item: item.clone(),
                category_name: categories
                    .get(item.category_id.as_uuid())
                    .map(|c| c.name.as_str().to_string()),
                created_by: None,
            })
            .collect())
    }

    async fn list_by_category(&self, category_id: &CategoryId) -> CatalogResult<Vec<Item>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| item.category_id == *category_id)
            .cloned()
            .collect())
    }

    async fn update(&self, item: &Item) -> CatalogResult<()> {
        self.items
            .lock()
            .unwrap()
            .insert(*item.item_id.as_uuid(), item.clone());
        Ok(())
    }

    async fn delete(&self, item_id: &ItemId) -> CatalogResult<Option<Item>> {
        Ok(self.items.lock().unwrap().remove(item_id.as_uuid()))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn setup() -> Arc<MemoryCatalogRepository> {
    Arc::new(MemoryCatalogRepository::default())
}

fn sample_nutrition() -> NutritionFacts {
    NutritionFacts {
        calories: 5.0,
        protein: 0.0,
        fat: 0.0,
        carbs: 1.0,
        fiber: 0.0,
        sugar: 0.5,
    }
}

fn add_item_input(name: &str, category_id: &CategoryId, admin: UserId) -> AddItemInput {
    AddItemInput {
        name: Some(name.to_string()),
        description: None,
        price: Some(Decimal::new(125, 1)), // 12.5
        category_id: Some(category_id.to_string()),
        images: vec![],
        nutrition: Some(sample_nutrition()),
        created_by: admin,
    }
}

async fn create_category(repo: &Arc<MemoryCatalogRepository>, name: &str) -> Category {
    AddCategoryUseCase::new(repo.clone())
        .execute(Some(name.to_string()))
        .await
        .unwrap()
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_add_category_duplicate_name_conflict() {
    let repo = setup();
    create_category(&repo, "Vitamins").await;

    let result = AddCategoryUseCase::new(repo.clone())
        .execute(Some("Vitamins".to_string()))
        .await;

    assert!(matches!(result, Err(CatalogError::CategoryExists)));
}

#[tokio::test]
async fn test_add_category_missing_name() {
    let repo = setup();

    let result = AddCategoryUseCase::new(repo.clone()).execute(None).await;
    assert!(matches!(result, Err(CatalogError::MissingCategoryName)));

    let result = AddCategoryUseCase::new(repo.clone())
        .execute(Some("   ".to_string()))
        .await;
    assert!(matches!(result, Err(CatalogError::MissingCategoryName)));
}

#[tokio::test]
async fn test_update_category_renames() {
    let repo = setup();
    let category = create_category(&repo, "Vitamins").await;

    let renamed = UpdateCategoryUseCase::new(repo.clone())
        .execute(&category.category_id, Some("Minerals".to_string()))
        .await
        .unwrap();

    assert_eq!(renamed.name.as_str(), "Minerals");
    assert_eq!(renamed.category_id, category.category_id);
}

#[tokio::test]
async fn test_update_category_missing_id_not_found() {
    let repo = setup();

    let result = UpdateCategoryUseCase::new(repo.clone())
        .execute(&CategoryId::new(), Some("Minerals".to_string()))
        .await;

    assert!(matches!(result, Err(CatalogError::CategoryNotFound)));
}

#[tokio::test]
async fn test_delete_category_cascades_to_items() {
    let repo = setup();
    let admin = UserId::new();

    let vitamins = create_category(&repo, "Vitamins").await;
    let minerals = create_category(&repo, "Minerals").await;

    let add = AddItemUseCase::new(repo.clone(), repo.clone());
    for name in ["C500", "C1000", "D3"] {
        add.execute(add_item_input(name, &vitamins.category_id, admin))
            .await
            .unwrap();
    }
    let kept = add
        .execute(add_item_input("Zinc", &minerals.category_id, admin))
        .await
        .unwrap();

    let items_deleted = DeleteCategoryUseCase::new(repo.clone())
        .execute(&vitamins.category_id)
        .await
        .unwrap();
    assert_eq!(items_deleted, 3);

    // Zero items reference the deleted category afterwards
    let remaining = BrowseItemsUseCase::new(repo.clone())
        .list_by_category(&vitamins.category_id)
        .await
        .unwrap();
    assert!(remaining.is_empty());

    // The unrelated category and its item survive
    let views = BrowseItemsUseCase::new(repo.clone()).list().await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].item.item_id, kept.item_id);

    // The category is gone from listings
    let categories = BrowseCategoriesUseCase::new(repo.clone())
        .list()
        .await
        .unwrap();
    assert!(
        categories
            .iter()
            .all(|c| c.category_id != vitamins.category_id)
    );
}

#[tokio::test]
async fn test_delete_missing_category_not_found() {
    let repo = setup();

    let result = DeleteCategoryUseCase::new(repo.clone())
        .execute(&CategoryId::new())
        .await;

    assert!(matches!(result, Err(CatalogError::CategoryNotFound)));
}

// ============================================================================
// Items
// ============================================================================

#[tokio::test]
async fn test_add_item_requires_mandatory_fields() {
    let repo = setup();
    let category = create_category(&repo, "Vitamins").await;
    let add = AddItemUseCase::new(repo.clone(), repo.clone());

    let mut input = add_item_input("C1000", &category.category_id, UserId::new());
    input.nutrition = None;
    assert!(matches!(
        add.execute(input).await,
        Err(CatalogError::MissingItemFields)
    ));

    let mut input = add_item_input("C1000", &category.category_id, UserId::new());
    input.price = None;
    assert!(matches!(
        add.execute(input).await,
        Err(CatalogError::MissingItemFields)
    ));
}

#[tokio::test]
async fn test_add_item_unknown_category_not_found() {
    let repo = setup();
    let add = AddItemUseCase::new(repo.clone(), repo.clone());

    let input = add_item_input("C1000", &CategoryId::new(), UserId::new());
    assert!(matches!(
        add.execute(input).await,
        Err(CatalogError::CategoryNotFound)
    ));
}

#[tokio::test]
async fn test_add_item_negative_price_rejected() {
    let repo = setup();
    let category = create_category(&repo, "Vitamins").await;
    let add = AddItemUseCase::new(repo.clone(), repo.clone());

    let mut input = add_item_input("C1000", &category.category_id, UserId::new());
    input.price = Some(Decimal::new(-1, 0));
    assert!(matches!(
        add.execute(input).await,
        Err(CatalogError::Validation(_))
    ));
}

#[tokio::test]
async fn test_update_item_merges_fields() {
    let repo = setup();
    let category = create_category(&repo, "Vitamins").await;
    let add = AddItemUseCase::new(repo.clone(), repo.clone());

    let item = add
        .execute(add_item_input("C1000", &category.category_id, UserId::new()))
        .await
        .unwrap();

    let updated = UpdateItemUseCase::new(repo.clone())
        .execute(
            &item.item_id,
            ItemUpdateInput {
                price: Some(Decimal::new(99, 1)), // 9.9
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Only the provided field changed
    assert_eq!(updated.price.amount(), Decimal::new(99, 1));
    assert_eq!(updated.name, "C1000");
    assert_eq!(updated.category_id, category.category_id);
}

#[tokio::test]
async fn test_delete_missing_item_not_found() {
    let repo = setup();

    let result = DeleteItemUseCase::new(repo.clone())
        .execute(&ItemId::new())
        .await;

    assert!(matches!(result, Err(CatalogError::ItemNotFound)));
}

#[tokio::test]
async fn test_delete_item_returns_record() {
    let repo = setup();
    let category = create_category(&repo, "Vitamins").await;
    let add = AddItemUseCase::new(repo.clone(), repo.clone());

    let item = add
        .execute(add_item_input("C1000", &category.category_id, UserId::new()))
        .await
        .unwrap();

    let deleted = DeleteItemUseCase::new(repo.clone())
        .execute(&item.item_id)
        .await
        .unwrap();
    assert_eq!(deleted.item_id, item.item_id);

    let views = BrowseItemsUseCase::new(repo.clone()).list().await.unwrap();
    assert!(views.is_empty());
}

// ============================================================================
// Nutrition
// ============================================================================

#[tokio::test]
async fn test_set_nutrition_idempotent() {
    let repo = setup();
    let category = create_category(&repo, "Vitamins").await;
    let add = AddItemUseCase::new(repo.clone(), repo.clone());

    let item = add
        .execute(add_item_input("C1000", &category.category_id, UserId::new()))
        .await
        .unwrap();

    let facts = NutritionFacts {
        calories: 5.0,
        protein: 0.2,
        fat: 0.0,
        carbs: 1.4,
        fiber: 0.1,
        sugar: 0.9,
    };

    let nutrition = NutritionUseCase::new(repo.clone());
    let first = nutrition.set(&item.item_id, facts).await.unwrap();
    let second = nutrition.set(&item.item_id, facts).await.unwrap();

    assert_eq!(first.nutrition, second.nutrition);
    assert_eq!(second.nutrition, facts);

    let stored = nutrition.get(&item.item_id).await.unwrap();
    assert_eq!(stored.nutrition, facts);
}

#[tokio::test]
async fn test_nutrition_missing_item_not_found() {
    let repo = setup();
    let nutrition = NutritionUseCase::new(repo.clone());

    assert!(matches!(
        nutrition.set(&ItemId::new(), sample_nutrition()).await,
        Err(CatalogError::ItemNotFound)
    ));
    assert!(matches!(
        nutrition.get(&ItemId::new()).await,
        Err(CatalogError::ItemNotFound)
    ));
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn test_admin_listing_resolves_category_name() {
    let repo = setup();
    let admin = UserId::new();

    let category = create_category(&repo, "Vitamins").await;
    AddItemUseCase::new(repo.clone(), repo.clone())
        .execute(add_item_input("C1000", &category.category_id, admin))
        .await
        .unwrap();

    let views = BrowseItemsUseCase::new(repo.clone()).list().await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].item.name, "C1000");
    assert_eq!(views[0].item.price.amount(), Decimal::new(125, 1));
    assert_eq!(views[0].category_name.as_deref(), Some("Vitamins"));
}

#[tokio::test]
async fn test_public_response_omits_creator() {
    let repo = setup();
    let admin = UserId::new();

    let category = create_category(&repo, "Vitamins").await;
    let item = AddItemUseCase::new(repo.clone(), repo.clone())
        .execute(add_item_input("C1000", &category.category_id, admin))
        .await
        .unwrap();

    // Even with a fully resolved creator, the public shape drops it
    let view = ItemView {
        item,
        category_name: Some("Vitamins".to_string()),
        created_by: Some(CreatorInfo {
            username: "admin".to_string(),
            email: "admin@x.com".to_string(),
        }),
    };

    let public = serde_json::to_value(PublicItemResponse::from(&view)).unwrap();
    let text = public.to_string();
    assert!(public.get("createdBy").is_none());
    assert!(!text.contains("admin@x.com"));
    assert!(!text.contains("password"));

    // The admin shape keeps the creator identity
    let admin_view = serde_json::to_value(AdminItemResponse::from(&view)).unwrap();
    assert_eq!(admin_view["createdBy"]["username"], "admin");
    assert_eq!(admin_view["createdBy"]["email"], "admin@x.com");
}
