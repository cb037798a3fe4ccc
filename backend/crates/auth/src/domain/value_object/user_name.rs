//! User Name Value Object
//!
//! Display name chosen at registration. Unicode is NFKC-normalized so
//! visually identical names compare equal.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Maximum user name length in characters
const USER_NAME_MAX_LENGTH: usize = 32;

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name: String = name.into().nfkc().collect();
        let name = name.trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }

        let char_count = name.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if name.chars().any(|c| c.is_control()) {
            return Err(AppError::bad_request(
                "Username contains invalid control characters",
            ));
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

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_valid() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("  alice  ").is_ok()); // trimmed
        assert_eq!(UserName::new("  alice  ").unwrap().as_str(), "alice");
    }

    #[test]
    fn test_user_name_empty() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_user_name_too_long() {
        let long = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(UserName::new(long).is_err());
    }

    #[test]
    fn test_user_name_control_characters() {
        assert!(UserName::new("ali\u{0007}ce").is_err());
    }

    #[test]
    fn test_user_name_nfkc_normalization() {
        // Full-width letters normalize to ASCII
        let name = UserName::new("ａｌｉｃｅ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }
}
