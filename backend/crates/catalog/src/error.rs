//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Category name missing or empty
    #[error("Category name is required")]
    MissingCategoryName,

    /// A mandatory item field is missing
    #[error("Name, price, and category required")]
    MissingItemFields,

    /// Category name already in use
    #[error("Category already exists")]
    CategoryExists,

    /// Category not found
    #[error("Category not found")]
    CategoryNotFound,

    /// Item not found
    #[error("Item not found")]
    ItemNotFound,

    /// Field validation failure (negative price, malformed id, ...)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::MissingCategoryName
            | CatalogError::MissingItemFields
            | CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::CategoryExists => StatusCode::CONFLICT,
            CatalogError::CategoryNotFound | CatalogError::ItemNotFound => StatusCode::NOT_FOUND,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::MissingCategoryName
            | CatalogError::MissingItemFields
            | CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::CategoryExists => ErrorKind::Conflict,
            CatalogError::CategoryNotFound | CatalogError::ItemNotFound => ErrorKind::NotFound,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => CatalogError::Validation(err.message().to_string()),
            _ => CatalogError::Internal(err.to_string()),
        }
    }
}
