//! Catalog price in Indian rupees.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price must be a non-negative number (got {0})")]
    Negative(Decimal),
}

/// A non-negative product price in INR.
///
/// Whole-rupee amounts render without a fractional part, matching the
/// catalog display (`₹999`); anything else renders with two decimals
/// (`₹999.50`).
///
/// ```
/// use basha_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(999, 0)).expect("non-negative");
/// assert_eq!(price.to_string(), "₹999");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0.normalize();
        if amount.is_integer() {
            write!(f, "\u{20b9}{amount:.0}")
        } else {
            write!(f, "\u{20b9}{amount:.2}")
        }
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::new(amount)?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(
            Price::new(dec("-1")),
            Err(PriceError::Negative(dec("-1")))
        );
    }

    #[test]
    fn test_zero_is_allowed() {
        let price = Price::new(Decimal::ZERO).expect("zero is a valid price");
        assert_eq!(price.to_string(), "\u{20b9}0");
    }

    #[test]
    fn test_whole_rupees_render_without_decimals() {
        let price = Price::new(dec("999")).expect("non-negative");
        assert_eq!(price.to_string(), "\u{20b9}999");
    }

    #[test]
    fn test_trailing_zeros_are_normalized() {
        let price = Price::new(dec("999.00")).expect("non-negative");
        assert_eq!(price.to_string(), "\u{20b9}999");
    }

    #[test]
    fn test_fractional_rupees_render_two_decimals() {
        let price = Price::new(dec("999.5")).expect("non-negative");
        assert_eq!(price.to_string(), "\u{20b9}999.50");
    }

    #[test]
    fn test_serde_rejects_negative() {
        let result: Result<Price, _> = serde_json::from_str("\"-5\"");
        assert!(result.is_err());
    }
}
