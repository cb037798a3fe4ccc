//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.
//!
//! Token verification is stateless; the admin gate additionally re-reads
//! the stored role so a stale or tampered role claim can never grant
//! admin access on its own.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::cookie::{extract_bearer_token, extract_cookie};

use crate::application::authorize::AuthorizeUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;

pub use crate::application::authorize::AuthContext;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware requiring a valid shopper session token
///
/// Inserts [`AuthContext`] into request extensions on success.
pub async fn require_shopper_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_token(req.headers(), &state.config, UserRole::Shopper);

    let use_case = AuthorizeUseCase::new(state.repo.clone(), state.config.clone());
    let ctx = use_case
        .verify(token.as_deref())
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Middleware requiring a valid token *and* a stored Admin role
///
/// The token only authenticates the request; authorization comes from the
/// credential store (Forbidden on role mismatch, NotFound if the account
/// vanished).
pub async fn require_admin<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_token(req.headers(), &state.config, UserRole::Admin);

    let use_case = AuthorizeUseCase::new(state.repo.clone(), state.config.clone());
    let ctx = use_case
        .verify(token.as_deref())
        .map_err(|e| e.into_response())?;

    use_case
        .ensure_admin(&ctx)
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Read the role-specific cookie, falling back to a bearer header
fn extract_token(headers: &HeaderMap, config: &AuthConfig, role: UserRole) -> Option<String> {
    extract_cookie(headers, config.cookie_name(role)).or_else(|| extract_bearer_token(headers))
}
