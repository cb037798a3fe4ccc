//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at process
//! start and passed down by reference; there are no ambient globals.

use std::time::Duration;

use platform::cookie::CookieConfig;

use crate::domain::value_object::user_role::UserRole;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Cookie name for shopper sessions
    pub user_cookie_name: String,
    /// Cookie name for admin sessions
    pub admin_cookie_name: String,
    /// Secret key for HMAC token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Token validity (7 days)
    pub token_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_cookie_name: "usertoken".to_string(),
            admin_cookie_name: "admintoken".to_string(),
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(7 * 24 * 3600), // 7 days
            cookie_secure: true,
            cookie_same_site: SameSite::None,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, Strict SameSite)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            cookie_same_site: SameSite::Strict,
            ..Self::with_random_secret()
        }
    }

    /// Cookie name for a role
    pub fn cookie_name(&self, role: UserRole) -> &str {
        match role {
            UserRole::Shopper => &self.user_cookie_name,
            UserRole::Admin => &self.admin_cookie_name,
        }
    }

    /// Build the cookie configuration for a role
    pub fn cookie_config(&self, role: UserRole) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name(role).to_string(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl.as_secs() as i64),
        }
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_name_per_role() {
        let config = AuthConfig::default();
        assert_eq!(config.cookie_name(UserRole::Shopper), "usertoken");
        assert_eq!(config.cookie_name(UserRole::Admin), "admintoken");
    }

    #[test]
    fn test_default_ttl_is_seven_days() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_secs(), 7 * 24 * 3600);
    }

    #[test]
    fn test_development_cookie_flags() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Strict);
    }
}
