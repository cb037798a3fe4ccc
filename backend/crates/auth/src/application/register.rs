//! Register Use Case
//!
//! Creates a new shopper or admin account and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::issue_token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    /// The created user (password hash included; sanitized at the DTO layer)
    pub user: User,
    /// Signed session token
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput, role: UserRole) -> AuthResult<RegisterOutput> {
        let (username, email, password) = require_fields(input)?;

        let username = UserName::new(username)?;
        let email = Email::new(email)?;

        // Conflict before hashing: no record may be created for a taken email
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let raw_password = RawPassword::new(password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = User::new(username, email, password_hash, role);
        self.user_repo.create(&user).await?;

        let token = issue_token(&user.user_id, user.role, &self.config)?;

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}

fn require_fields(input: RegisterInput) -> AuthResult<(String, String, String)> {
    let username = non_empty(input.username)?;
    let email = non_empty(input.email)?;
    let password = non_empty(input.password)?;
    Ok((username, email, password))
}

fn non_empty(field: Option<String>) -> AuthResult<String> {
    match field {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(AuthError::MissingFields),
    }
}
