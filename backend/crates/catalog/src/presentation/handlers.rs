//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use auth::middleware::AuthContext;
use kernel::id::{CategoryId, ItemId};

use crate::application::{
    AddCategoryUseCase, AddItemInput, AddItemUseCase, BrowseCategoriesUseCase, BrowseItemsUseCase,
    DeleteCategoryUseCase, DeleteItemUseCase, ItemUpdateInput, NutritionUseCase,
    UpdateCategoryUseCase, UpdateItemUseCase,
};
use crate::domain::repository::{CategoryRepository, ItemRepository};
use crate::domain::value_object::nutrition::NutritionFacts;
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    AddCategoryRequest, AddItemRequest, AdminItemResponse, AdminItemsResponse,
    CategoryDetailResponse, CategoryItemsResponse, CategoryListResponse, CategoryMessageResponse,
    CategoryResponse, ItemMessageResponse, ItemResponse, MessageResponse, NutritionItemResponse,
    NutritionResponse, PublicItemResponse, PublicItemsResponse, UpdateCategoryRequest,
    UpdateItemRequest,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Public listing
// ============================================================================

/// GET /api/user/items
///
/// Public view: category name resolved, creator omitted.
pub async fn public_items<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<PublicItemsResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseItemsUseCase::new(state.repo.clone());
    let views = use_case.list().await?;

    Ok(Json(PublicItemsResponse {
        items: views.iter().map(PublicItemResponse::from).collect(),
    }))
}

// ============================================================================
// Categories (admin)
// ============================================================================

/// POST /api/admin/category
pub async fn add_category<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<AddCategoryRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddCategoryUseCase::new(state.repo.clone());
    let category = use_case.execute(req.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryMessageResponse {
            message: "Category created".to_string(),
            category: CategoryResponse::from(&category),
        }),
    ))
}

/// PUT /api/admin/category/{id}
pub async fn update_category<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCategoryRequest>,
) -> CatalogResult<Json<CategoryMessageResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let category_id = parse_category_id(&id)?;

    let use_case = UpdateCategoryUseCase::new(state.repo.clone());
    let category = use_case.execute(&category_id, req.name).await?;

    Ok(Json(CategoryMessageResponse {
        message: "Category updated successfully".to_string(),
        category: CategoryResponse::from(&category),
    }))
}

/// DELETE /api/admin/category/{id}
pub async fn delete_category<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<MessageResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let category_id = parse_category_id(&id)?;

    let use_case = DeleteCategoryUseCase::new(state.repo.clone());
    use_case.execute(&category_id).await?;

    Ok(Json(MessageResponse {
        message: "Category and its items deleted successfully".to_string(),
    }))
}

/// GET /api/admin/categories
pub async fn list_categories<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<CategoryListResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseCategoriesUseCase::new(state.repo.clone());
    let categories = use_case.list().await?;

    Ok(Json(CategoryListResponse {
        categories: categories.iter().map(CategoryResponse::from).collect(),
    }))
}

/// GET /api/admin/category/{id}
pub async fn get_category<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<CategoryDetailResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let category_id = parse_category_id(&id)?;

    let use_case = BrowseCategoriesUseCase::new(state.repo.clone());
    let category = use_case.get(&category_id).await?;

    Ok(Json(CategoryDetailResponse {
        category: CategoryResponse::from(&category),
    }))
}

// ============================================================================
// Items (admin)
// ============================================================================

/// POST /api/admin/item
pub async fn add_item<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<AddItemRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddItemUseCase::new(state.repo.clone(), state.repo.clone());

    let input = AddItemInput {
        name: req.name,
        description: req.description,
        price: req.price,
        category_id: req.category_id,
        images: req.images.unwrap_or_default(),
        nutrition: req.nutrition,
        created_by: ctx.user_id,
    };

    let item = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ItemMessageResponse {
            message: "Item added successfully".to_string(),
            item: ItemResponse::from(&item),
        }),
    ))
}

/// PUT /api/admin/item/{itemId}
pub async fn update_item<R>(
    State(state): State<CatalogAppState<R>>,
    Path(item_id): Path<String>,
    Json(req): Json<UpdateItemRequest>,
) -> CatalogResult<Json<ItemMessageResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let item_id = parse_item_id(&item_id)?;

    let use_case = UpdateItemUseCase::new(state.repo.clone());

    let input = ItemUpdateInput {
        name: req.name,
        description: req.description,
        price: req.price,
        category_id: req.category_id,
        images: req.images,
        nutrition: req.nutrition,
    };

    let item = use_case.execute(&item_id, input).await?;

    Ok(Json(ItemMessageResponse {
        message: "Item updated".to_string(),
        item: ItemResponse::from(&item),
    }))
}

/// DELETE /api/admin/item/{itemId}
pub async fn delete_item<R>(
    State(state): State<CatalogAppState<R>>,
    Path(item_id): Path<String>,
) -> CatalogResult<Json<ItemMessageResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let item_id = parse_item_id(&item_id)?;

    let use_case = DeleteItemUseCase::new(state.repo.clone());
    let item = use_case.execute(&item_id).await?;

    Ok(Json(ItemMessageResponse {
        message: "Item deleted".to_string(),
        item: ItemResponse::from(&item),
    }))
}

/// GET /api/admin/items
///
/// Admin view: creator identity included.
pub async fn admin_items<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<AdminItemsResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseItemsUseCase::new(state.repo.clone());
    let views = use_case.list().await?;

    Ok(Json(AdminItemsResponse {
        items: views.iter().map(AdminItemResponse::from).collect(),
    }))
}

/// GET /api/admin/items/category/{categoryId}
pub async fn items_by_category<R>(
    State(state): State<CatalogAppState<R>>,
    Path(category_id): Path<String>,
) -> CatalogResult<Json<CategoryItemsResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let category_id = parse_category_id(&category_id)?;

    let use_case = BrowseItemsUseCase::new(state.repo.clone());
    let items = use_case.list_by_category(&category_id).await?;

    Ok(Json(CategoryItemsResponse {
        items: items.iter().map(ItemResponse::from).collect(),
    }))
}

// ============================================================================
// Nutrition (admin)
// ============================================================================

/// POST /api/admin/item/{itemId}/nutrition
pub async fn set_nutrition<R>(
    State(state): State<CatalogAppState<R>>,
    Path(item_id): Path<String>,
    Json(facts): Json<NutritionFacts>,
) -> CatalogResult<Json<ItemMessageResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let item_id = parse_item_id(&item_id)?;

    let use_case = NutritionUseCase::new(state.repo.clone());
    let item = use_case.set(&item_id, facts).await?;

    Ok(Json(ItemMessageResponse {
        message: "Nutrition info added".to_string(),
        item: ItemResponse::from(&item),
    }))
}

/// GET /api/admin/item/{itemId}/nutrition
pub async fn get_nutrition<R>(
    State(state): State<CatalogAppState<R>>,
    Path(item_id): Path<String>,
) -> CatalogResult<Json<NutritionResponse>>
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let item_id = parse_item_id(&item_id)?;

    let use_case = NutritionUseCase::new(state.repo.clone());
    let item = use_case.get(&item_id).await?;

    Ok(Json(NutritionResponse {
        item: NutritionItemResponse::from(&item),
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_category_id(s: &str) -> CatalogResult<CategoryId> {
    CategoryId::parse(s).map_err(|_| CatalogError::Validation("Invalid category id".to_string()))
}

fn parse_item_id(s: &str) -> CatalogResult<ItemId> {
    ItemId::parse(s).map_err(|_| CatalogError::Validation("Invalid item id".to_string()))
}
