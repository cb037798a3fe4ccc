//! User Password Value Objects
//!
//! Domain-level wrappers around the platform password primitives.
//! `RawPassword` holds a validated clear-text password (zeroized on drop),
//! `UserPassword` holds the Argon2id hash that is safe to persist.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};

/// Validated clear-text password (never persisted, never logged)
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a raw password against the platform policy
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        Ok(Self(ClearTextPassword::new(raw)?))
    }

    fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl std::fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Hashed user password (PHC string, safe to store)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword {
    hash: HashedPassword,
}

impl UserPassword {
    /// Hash a raw password with an optional application pepper
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        Ok(Self {
            hash: raw.inner().hash(pepper)?,
        })
    }

    /// Restore from a PHC string loaded from the database
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        Ok(Self {
            hash: HashedPassword::from_phc_string(s)?,
        })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        self.hash.as_phc_string()
    }

    /// Verify a raw password against this hash (constant-time)
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.hash.verify(raw.inner(), pepper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("pw123456".to_string()).unwrap();
        let password = UserPassword::from_raw(&raw, None).unwrap();

        assert!(password.verify(&raw, None));

        let wrong = RawPassword::new("pw654321".to_string()).unwrap();
        assert!(!password.verify(&wrong, None));
    }

    #[test]
    fn test_policy_applied() {
        assert!(RawPassword::new("short".to_string()).is_err());
        assert!(RawPassword::new("pw123456".to_string()).is_ok());
    }

    #[test]
    fn test_phc_roundtrip() {
        let raw = RawPassword::new("pw123456".to_string()).unwrap();
        let password = UserPassword::from_raw(&raw, None).unwrap();

        let restored = UserPassword::from_phc_string(password.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("pw123456".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("pw123456"));
    }
}
