//! Auth Routers

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_admin, require_shopper_auth};

/// Create the shopper auth router with PostgreSQL repository
pub fn user_auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    user_auth_router_generic(repo, config)
}

/// Create the admin auth router with PostgreSQL repository
pub fn admin_auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    admin_auth_router_generic(repo, config)
}

/// Create a generic shopper auth router for any repository implementation
pub fn user_auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };
    let mw_state = AuthMiddlewareState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    let protected = Router::new()
        .route("/me", get(handlers::me::<R>))
        .route("/update", put(handlers::update_profile::<R>))
        .route_layer(middleware::from_fn_with_state(
            mw_state,
            require_shopper_auth::<R>,
        ));

    Router::new()
        .route("/register", post(handlers::register_shopper::<R>))
        .route("/login", post(handlers::login_shopper::<R>))
        .route("/logout", post(handlers::logout_shopper::<R>))
        .merge(protected)
        .with_state(state)
}

/// Create a generic admin auth router for any repository implementation
pub fn admin_auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };
    let mw_state = AuthMiddlewareState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    let protected = Router::new()
        .route("/profile", put(handlers::update_admin_profile::<R>))
        .route_layer(middleware::from_fn_with_state(mw_state, require_admin::<R>));

    Router::new()
        .route("/register", post(handlers::register_admin::<R>))
        .route("/login", post(handlers::login_admin::<R>))
        .route("/logout", post(handlers::logout_admin::<R>))
        .merge(protected)
        .with_state(state)
}
