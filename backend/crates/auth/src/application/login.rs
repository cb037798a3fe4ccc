//! Login Use Case
//!
//! Authenticates a user by email + password and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::issue_token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login output
pub struct LoginOutput {
    pub user: User,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Authenticate against the credential store.
    ///
    /// Shopper login matches any account with the email; admin login only
    /// matches accounts whose stored role is Admin (anything else is
    /// reported as not found).
    pub async fn execute(&self, input: LoginInput, role: UserRole) -> AuthResult<LoginOutput> {
        let email = match input.email {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(AuthError::MissingFields),
        };
        let password = match input.password {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(AuthError::MissingFields),
        };

        let email = Email::new(email).map_err(|_| AuthError::UserNotFound)?;

        let user = match role {
            UserRole::Shopper => self.user_repo.find_by_email(&email).await?,
            UserRole::Admin => {
                self.user_repo
                    .find_by_email_and_role(&email, UserRole::Admin)
                    .await?
            }
        };

        let user = user.ok_or(AuthError::UserNotFound)?;

        let raw_password =
            RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = issue_token(&user.user_id, user.role, &self.config)?;

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User logged in"
        );

        Ok(LoginOutput { user, token })
    }
}
