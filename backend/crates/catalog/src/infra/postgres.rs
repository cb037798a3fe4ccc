//! PostgreSQL Repository Implementations
//!
//! One repository struct backs both catalog traits; the items listing
//! joins `categories` and `users` to resolve references in one query.

use auth::models::user_id::UserId;
use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, ItemId};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{category::Category, item::Item};
use crate::domain::read_model::{CreatorInfo, ItemView};
use crate::domain::repository::{CategoryRepository, ItemRepository};
use crate::domain::value_object::{
    category_name::CategoryName, nutrition::NutritionFacts, price::Price,
};
use crate::error::{CatalogError, CatalogResult};

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgCatalogRepository {
    async fn create(&self, category: &Category) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (
                category_id,
                name,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(category.category_id.as_uuid())
        .bind(category.name.as_str())
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, category_id: &CategoryId) -> CatalogResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, name, created_at, updated_at
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(category_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn exists_by_name(&self, name: &CategoryName) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)",
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn list(&self) -> CatalogResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, name, created_at, updated_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn update(&self, category: &Category) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE categories SET
                name = $2,
                updated_at = $3
            WHERE category_id = $1
            "#,
        )
        .bind(category.category_id.as_uuid())
        .bind(category.name.as_str())
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_with_items(&self, category_id: &CategoryId) -> CatalogResult<u64> {
        let mut tx = self.pool.begin().await?;

        let items_deleted = sqlx::query("DELETE FROM items WHERE category_id = $1")
            .bind(category_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let categories_deleted = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(category_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if categories_deleted == 0 {
            tx.rollback().await?;
            return Err(CatalogError::CategoryNotFound);
        }

        tx.commit().await?;

        Ok(items_deleted)
    }
}

// ============================================================================
// Item Repository Implementation
// ============================================================================

impl ItemRepository for PgCatalogRepository {
    async fn create(&self, item: &Item) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO items (
                item_id,
                name,
                description,
                price,
                category_id,
                images,
                created_by,
                calories,
                protein,
                fat,
                carbs,
                fiber,
                sugar,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(item.item_id.as_uuid())
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price.amount())
        .bind(item.category_id.as_uuid())
        .bind(&item.images)
        .bind(item.created_by.as_uuid())
        .bind(item.nutrition.calories)
        .bind(item.nutrition.protein)
        .bind(item.nutrition.fat)
        .bind(item.nutrition.carbs)
        .bind(item.nutrition.fiber)
        .bind(item.nutrition.sugar)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, item_id: &ItemId) -> CatalogResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT
                item_id, name, description, price, category_id, images,
                created_by, calories, protein, fat, carbs, fiber, sugar,
                created_at
            FROM items
            WHERE item_id = $1
            "#,
        )
        .bind(item_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ItemRow::into_item))
    }

    async fn list_views(&self) -> CatalogResult<Vec<ItemView>> {
        let rows = sqlx::query_as::<_, ItemViewRow>(
            r#"
            SELECT
                i.item_id, i.name, i.description, i.price, i.category_id,
                i.images, i.created_by, i.calories, i.protein, i.fat,
                i.carbs, i.fiber, i.sugar, i.created_at,
                c.name AS category_name,
                u.username AS creator_username,
                u.email AS creator_email
            FROM items i
            LEFT JOIN categories c ON c.category_id = i.category_id
            LEFT JOIN users u ON u.user_id = i.created_by
            ORDER BY i.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ItemViewRow::into_view).collect())
    }

    async fn list_by_category(&self, category_id: &CategoryId) -> CatalogResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT
                item_id, name, description, price, category_id, images,
                created_by, calories, protein, fat, carbs, fiber, sugar,
                created_at
            FROM items
            WHERE category_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(category_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ItemRow::into_item).collect())
    }

    async fn update(&self, item: &Item) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE items SET
                name = $2,
                description = $3,
                price = $4,
                category_id = $5,
                images = $6,
                calories = $7,
                protein = $8,
                fat = $9,
                carbs = $10,
                fiber = $11,
                sugar = $12
            WHERE item_id = $1
            "#,
        )
        .bind(item.item_id.as_uuid())
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price.amount())
        .bind(item.category_id.as_uuid())
        .bind(&item.images)
        .bind(item.nutrition.calories)
        .bind(item.nutrition.protein)
        .bind(item.nutrition.fat)
        .bind(item.nutrition.carbs)
        .bind(item.nutrition.fiber)
        .bind(item.nutrition.sugar)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, item_id: &ItemId) -> CatalogResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            DELETE FROM items
            WHERE item_id = $1
            RETURNING
                item_id, name, description, price, category_id, images,
                created_by, calories, protein, fat, carbs, fiber, sugar,
                created_at
            "#,
        )
        .bind(item_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ItemRow::into_item))
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            category_id: CategoryId::from_uuid(self.category_id),
            name: CategoryName::from_db(self.name),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    item_id: Uuid,
    name: String,
    description: Option<String>,
    price: Decimal,
    category_id: Uuid,
    images: Vec<String>,
    created_by: Uuid,
    calories: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
    fiber: f64,
    sugar: f64,
    created_at: DateTime<Utc>,
}

impl ItemRow {
    fn into_item(self) -> Item {
        Item {
            item_id: ItemId::from_uuid(self.item_id),
            name: self.name,
            description: self.description,
            price: Price::from_db(self.price),
            category_id: CategoryId::from_uuid(self.category_id),
            images: self.images,
            created_by: UserId::from_uuid(self.created_by),
            nutrition: NutritionFacts {
                calories: self.calories,
                protein: self.protein,
                fat: self.fat,
                carbs: self.carbs,
                fiber: self.fiber,
                sugar: self.sugar,
            },
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ItemViewRow {
    #[sqlx(flatten)]
    item: ItemRow,
    category_name: Option<String>,
    creator_username: Option<String>,
    creator_email: Option<String>,
}

impl ItemViewRow {
    fn into_view(self) -> ItemView {
        let created_by = match (self.creator_username, self.creator_email) {
            (Some(username), Some(email)) => Some(CreatorInfo { username, email }),
            _ => None,
        };

        ItemView {
            item: self.item.into_item(),
            category_name: self.category_name,
            created_by,
        }
    }
}
