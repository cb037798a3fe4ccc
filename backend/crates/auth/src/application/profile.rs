//! Profile Use Cases
//!
//! Fetch and update the authenticated user's own record.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Partial profile update; absent fields are left unchanged
#[derive(Default)]
pub struct ProfileUpdateInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Profile use case (get + update)
pub struct ProfileUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Fetch the current user's record
    pub async fn get(&self, user_id: &UserId) -> AuthResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Apply a partial update; a password change is rehashed before persisting
    pub async fn update(&self, user_id: &UserId, input: ProfileUpdateInput) -> AuthResult<User> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(username) = input.username {
            user.set_username(UserName::new(username)?);
        }

        if let Some(email) = input.email {
            let email = Email::new(email)?;
            // Re-check uniqueness when the address actually changes
            if email != user.email && self.user_repo.exists_by_email(&email).await? {
                return Err(AuthError::EmailTaken);
            }
            user.set_email(email);
        }

        if let Some(password) = input.password {
            let raw = RawPassword::new(password)?;
            user.set_password_hash(UserPassword::from_raw(&raw, self.config.pepper())?);
        }

        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
