//! Authorize Use Case
//!
//! Stateless token verification plus the store-backed admin gate.
//!
//! The token's role claim only selects which cookie to read; the stored
//! role is the single source of truth for admin authorization.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Authenticated principal attached to the request context
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: UserId,
    /// Role claim from the token; a cached hint, not an authorization source
    pub role: UserRole,
}

/// Authorize use case
pub struct AuthorizeUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> AuthorizeUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Verify signature + expiry and produce the request principal.
    /// No store access; a missing token is reported distinctly.
    pub fn verify(&self, token: Option<&str>) -> AuthResult<AuthContext> {
        let token = token.ok_or(AuthError::TokenMissing)?;
        let claims = verify_token(token, &self.config)?;

        Ok(AuthContext {
            user_id: claims.user_id(),
            role: claims.role,
        })
    }

    /// Re-fetch the user and require the *stored* role to be Admin.
    ///
    /// Returns the user so handlers can reuse the lookup.
    pub async fn ensure_admin(&self, ctx: &AuthContext) -> AuthResult<User> {
        let user = self
            .user_repo
            .find_by_id(&ctx.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_admin() {
            return Err(AuthError::AdminOnly);
        }

        Ok(user)
    }
}
