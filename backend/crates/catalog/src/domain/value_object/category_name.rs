//! Category Name Value Object
//!
//! Unique name of a catalog grouping. Uniqueness itself is enforced by
//! the store; this type only guards shape.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum category name length in characters
const CATEGORY_NAME_MAX_LENGTH: usize = 64;

/// Category name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a new category name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Category name cannot be empty"));
        }

        if name.chars().count() > CATEGORY_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Category name must be at most {} characters",
                CATEGORY_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_valid() {
        assert!(CategoryName::new("Vitamins").is_ok());
        assert_eq!(CategoryName::new("  Vitamins ").unwrap().as_str(), "Vitamins");
    }

    #[test]
    fn test_category_name_empty() {
        assert!(CategoryName::new("").is_err());
        assert!(CategoryName::new("   ").is_err());
    }

    #[test]
    fn test_category_name_too_long() {
        let long = "a".repeat(CATEGORY_NAME_MAX_LENGTH + 1);
        assert!(CategoryName::new(long).is_err());
    }
}
