//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::authorize::AuthContext;
use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, ProfileUpdateInput, ProfileUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, LoginRequest, MeResponse, MessageResponse, ProfileResponse, RegisterRequest,
    UpdateProfileRequest, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/user/register
pub async fn register_shopper<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    register(state, req, UserRole::Shopper).await
}

/// POST /api/admin/register
pub async fn register_admin<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    register(state, req, UserRole::Admin).await
}

async fn register<R>(
    state: AuthAppState<R>,
    req: RegisterRequest,
    role: UserRole,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input, role).await?;
    let cookie = state.config.cookie_config(role).build_set_cookie(&output.token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            message: format!("{} registered successfully", role_label(role)),
            user: UserResponse::from(&output.user),
            token: output.token,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/user/login
pub async fn login_shopper<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    login(state, req, UserRole::Shopper).await
}

/// POST /api/admin/login
pub async fn login_admin<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    login(state, req, UserRole::Admin).await
}

async fn login<R>(
    state: AuthAppState<R>,
    req: LoginRequest,
    role: UserRole,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input, role).await?;
    let cookie = state.config.cookie_config(role).build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            message: "Login successful".to_string(),
            user: UserResponse::from(&output.user),
            token: output.token,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/user/logout
///
/// Idempotent: nothing is stored server-side, so logout only clears the
/// role cookie and always succeeds.
pub async fn logout_shopper<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Ok(logout(&state.config, UserRole::Shopper))
}

/// POST /api/admin/logout
pub async fn logout_admin<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Ok(logout(&state.config, UserRole::Admin))
}

fn logout(config: &AuthConfig, role: UserRole) -> impl IntoResponse {
    let cookie = config.cookie_config(role).build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/user/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
) -> AuthResult<Json<MeResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.get(&ctx.user_id).await?;

    Ok(Json(MeResponse {
        user: UserResponse::from(&user),
    }))
}

/// PUT /api/user/update
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<ProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone(), state.config.clone());

    let input = ProfileUpdateInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    let user = use_case.update(&ctx.user_id, input).await?;

    Ok(Json(ProfileResponse {
        message: "User updated successfully".to_string(),
        user: UserResponse::from(&user),
    }))
}

/// PUT /api/admin/profile
pub async fn update_admin_profile<R>(
    state: State<AuthAppState<R>>,
    ctx: Extension<AuthContext>,
    req: Json<UpdateProfileRequest>,
) -> AuthResult<Json<ProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    // Same operation; the admin route differs only in its middleware gates
    update_profile(state, ctx, req).await
}

fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Shopper => "User",
        UserRole::Admin => "Admin",
    }
}
