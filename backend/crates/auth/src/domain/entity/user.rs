//! User Entity
//!
//! Credential Store record: one row per shopper or admin account.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
    user_role::UserRole,
};

/// User entity
///
/// The password hash never leaves the domain layer; API responses are
/// built from the sanitized DTO in the presentation layer.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub username: UserName,
    /// Unique, lowercased email address
    pub email: Email,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Role (Shopper or Admin), immutable after creation
    pub role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: UserName, email: Email, password_hash: UserPassword, role: UserRole) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this account holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Update display name
    pub fn set_username(&mut self, username: UserName) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update email address
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Replace the password hash (rehashed by the application layer)
    pub fn set_password_hash(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
