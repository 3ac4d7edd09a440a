//! Type-safe price representation using decimal arithmetic.
//!
//! The store trades in a single currency (US dollars), so a price is just a
//! non-negative decimal amount. Decimal arithmetic keeps cart totals exact:
//! `2 × 24.99 + 49.99` is `99.97`, not `99.97000000000001`.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in US dollars.
///
/// ```
/// use clothing_co_core::Price;
///
/// let tee = Price::from_cents(2499);
/// assert_eq!(tee.to_string(), "$24.99");
/// assert_eq!((tee * 2).format_amount(), "49.98");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Format the amount with exactly two decimal places, without a symbol.
    #[must_use]
    pub fn format_amount(&self) -> String {
        format!("{:.2}", self.0.round_dp(2))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.format_amount())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self::Output {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::from_cents(4999).to_string(), "$49.99");
        assert_eq!(Price::from_cents(500).to_string(), "$5.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_multiply_by_quantity() {
        assert_eq!(Price::from_cents(2499) * 3, Price::from_cents(7497));
        assert_eq!(Price::from_cents(2499) * 0, Price::ZERO);
    }

    #[test]
    fn test_sum_is_exact() {
        let total: Price = [Price::from_cents(2499) * 2, Price::from_cents(4999)]
            .into_iter()
            .sum();
        assert_eq!(total.format_amount(), "99.97");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Price::from_cents(3999)).unwrap();
        assert_eq!(json, "\"39.99\"");
    }
}
