use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    #[default]
    Shopper = 0,
    Admin = 1,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Shopper => "shopper",
            Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        use UserRole::*;
        match id {
            0 => Shopper,
            1 => Admin,
            _ => {
                tracing::error!("Invalid UserRole id: {}", id);
                unreachable!("Invalid UserRole id: {}", id)
            }
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Self {
        use UserRole::*;
        match code {
            "shopper" => Shopper,
            "admin" => Admin,
            _ => {
                tracing::error!("Invalid UserRole code: {}", code);
                unreachable!("Invalid UserRole code: {}", code)
            }
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_id() {
        assert_eq!(UserRole::from_id(0), UserRole::Shopper);
        assert_eq!(UserRole::from_id(1), UserRole::Admin);
    }

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("shopper"), UserRole::Shopper);
        assert_eq!(UserRole::from_code("admin"), UserRole::Admin);
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Shopper.to_string(), "shopper");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_role_checks() {
        assert!(!UserRole::Shopper.is_admin());
        assert!(UserRole::Admin.is_admin());
    }
}
