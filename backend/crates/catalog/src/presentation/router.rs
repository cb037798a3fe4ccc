//! Catalog Routers
//!
//! The admin router carries no auth itself; the api binary wraps it with
//! the auth crate's `require_admin` middleware so every admin catalog
//! route sits behind the same store-checked gate.

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{CategoryRepository, ItemRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the public catalog router with PostgreSQL repository
pub fn public_catalog_router(repo: PgCatalogRepository) -> Router {
    public_catalog_router_generic(repo)
}

/// Create the admin catalog router with PostgreSQL repository
pub fn admin_catalog_router(repo: PgCatalogRepository) -> Router {
    admin_catalog_router_generic(repo)
}

/// Create a generic public catalog router for any repository implementation
pub fn public_catalog_router_generic<R>(repo: R) -> Router
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/items", get(handlers::public_items::<R>))
        .with_state(state)
}

/// Create a generic admin catalog router for any repository implementation
pub fn admin_catalog_router_generic<R>(repo: R) -> Router
where
    R: CategoryRepository + ItemRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/category", post(handlers::add_category::<R>))
        .route(
            "/category/{id}",
            get(handlers::get_category::<R>)
                .put(handlers::update_category::<R>)
                .delete(handlers::delete_category::<R>),
        )
        .route("/categories", get(handlers::list_categories::<R>))
        .route("/item", post(handlers::add_item::<R>))
        .route(
            "/item/{itemId}",
            put(handlers::update_item::<R>).delete(handlers::delete_item::<R>),
        )
        .route("/items", get(handlers::admin_items::<R>))
        .route(
            "/items/category/{categoryId}",
            get(handlers::items_by_category::<R>),
        )
        .route(
            "/item/{itemId}/nutrition",
            get(handlers::get_nutrition::<R>).post(handlers::set_nutrition::<R>),
        )
        .with_state(state)
}
