//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field is missing or empty
    #[error("All fields are required")]
    MissingFields,

    /// Email already registered
    #[error("User already exists")]
    EmailTaken,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Invalid credentials (wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No token in cookie or bearer header
    #[error("Unauthorized: No token provided")]
    TokenMissing,

    /// Token signature invalid, malformed, or expired
    #[error("Unauthorized: Invalid token")]
    TokenInvalid,

    /// Stored role is not Admin
    #[error("Access denied: Admins only")]
    AdminOnly,

    /// Password policy violation
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Field validation failure (email format, username length, ...)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingFields
            | AuthError::InvalidCredentials
            | AuthError::PasswordValidation(_)
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::TokenMissing | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::AdminOnly => StatusCode::FORBIDDEN,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::InvalidCredentials
            | AuthError::PasswordValidation(_)
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::TokenMissing | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::AdminOnly => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AdminOnly => {
                tracing::warn!("Admin route hit with non-admin account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::PasswordValidation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
