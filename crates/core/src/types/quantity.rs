//! Cart line quantity.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is zero or negative.
    #[error("quantity must be at least 1, got {0}")]
    NotPositive(i64),
    /// The value does not fit in a `u32`.
    #[error("quantity {0} is too large")]
    TooLarge(i64),
}

/// A positive number of units of one product.
///
/// A cart never stores a zero quantity: lines are removed instead. The
/// deserializer rejects values below 1, so a document carrying one is
/// treated as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// One unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Build a quantity from any integer, clamping to `1..=u32::MAX`.
    #[must_use]
    pub fn floored(value: i64) -> Self {
        let clamped = value.clamp(1, i64::from(u32::MAX));
        u32::try_from(clamped)
            .ok()
            .and_then(NonZeroU32::new)
            .map_or(Self::ONE, Self)
    }

    /// The quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(QuantityError::NotPositive(value));
        }
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(QuantityError::TooLarge(value))
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> Self {
        Self::from(quantity.get())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_floored() {
        assert_eq!(Quantity::floored(-3).get(), 1);
        assert_eq!(Quantity::floored(0).get(), 1);
        assert_eq!(Quantity::floored(1).get(), 1);
        assert_eq!(Quantity::floored(7).get(), 7);
        assert_eq!(Quantity::floored(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn test_try_from_rejects_zero() {
        assert_eq!(Quantity::try_from(0), Err(QuantityError::NotPositive(0)));
        assert_eq!(Quantity::try_from(-1), Err(QuantityError::NotPositive(-1)));
        assert!(matches!(
            Quantity::try_from(i64::MAX),
            Err(QuantityError::TooLarge(_))
        ));
        assert_eq!(Quantity::try_from(4).unwrap().get(), 4);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Quantity::floored(3)).unwrap();
        assert_eq!(json, "3");

        let parsed: Quantity = serde_json::from_str("5").unwrap();
        assert_eq!(parsed.get(), 5);

        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-2").is_err());
    }
}
