//! Price Value Object
//!
//! Non-negative decimal amount. Decimal arithmetic avoids the float
//! rounding a money field must never exhibit.

use kernel::error::app_error::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Item price (non-negative)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price; negative amounts are rejected
    pub fn new(amount: Decimal) -> AppResult<Self> {
        if amount.is_sign_negative() {
            return Err(AppError::bad_request("Price must be non-negative"));
        }
        Ok(Self(amount))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn test_price_non_negative() {
        assert!(Price::new(Decimal::from_f64(12.5).unwrap()).is_ok());
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::from_f64(-0.01).unwrap()).is_err());
    }

    #[test]
    fn test_price_amount() {
        let price = Price::new(Decimal::new(1250, 2)).unwrap();
        assert_eq!(price.amount(), Decimal::new(1250, 2));
        assert_eq!(price.to_string(), "12.50");
    }
}
