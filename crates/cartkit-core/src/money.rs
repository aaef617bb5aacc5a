//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Worse, rounding at the cent boundary becomes unreliable:               │
//! │    a price of 5.679 stored as f64 is already not exactly 5.679,         │
//! │    so "round half-up to 2 digits" can land on the wrong cent.           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    5.679 is exactly 5.679; totals round half-up exactly once,           │
//! │    at the moment a total is asked for.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartkit_core::Money;
//! use rust_decimal_macros::dec;
//!
//! // Unit prices may carry sub-cent precision
//! let price = Money::new(dec!(5.679));
//!
//! // Totals round half-up at the cent boundary
//! assert_eq!(price.round_to_cents(), Money::new(dec!(5.68)));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::PRICE_SCALE;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal.
///
/// ## Design Decisions
/// - **`Decimal` (exact)**: stored prices keep whatever precision they were
///   constructed with; nothing rounds until an aggregate query asks for it
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
/// - **`Copy`**: `Decimal` is 128 bits; passing by value keeps call sites
///   free of lifetime noise
/// - **`#[serde(transparent)]`**: serializes as the bare decimal value
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use cartkit_core::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(39.99));
    /// assert_eq!(price.amount(), dec!(39.99));
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount, unrounded.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounds to [`PRICE_SCALE`] fractional digits using half-up rounding.
    ///
    /// A value exactly at the midpoint rounds away from zero to the next
    /// cent up: `.005` becomes `.01`.
    ///
    /// ## Example
    /// ```rust
    /// use cartkit_core::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(
    ///     Money::new(dec!(4.674)).round_to_cents(),
    ///     Money::new(dec!(4.67))
    /// );
    /// assert_eq!(
    ///     Money::new(dec!(4.675)).round_to_cents(),
    ///     Money::new(dec!(4.68))
    /// );
    /// ```
    pub fn round_to_cents(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Always renders two fractional digits. This is for debugging and receipts;
/// localization is the embedding application's concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.round_to_cents().0;
        let sign = if cents.is_sign_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, cents.abs())
    }
}

impl From<Decimal> for Money {
    #[inline]
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used when accumulating totals.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by quantity (line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Multiplication by a decimal factor (tax rates).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: Decimal) -> Self {
        Money(self.0 * factor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_is_unrounded() {
        let money = Money::new(dec!(5.679));
        assert_eq!(money.amount(), dec!(5.679));
    }

    #[test]
    fn test_round_half_up() {
        // third digit >= 5 rounds up
        assert_eq!(
            Money::new(dec!(5.679)).round_to_cents(),
            Money::new(dec!(5.68))
        );
        // third digit < 5 rounds down
        assert_eq!(
            Money::new(dec!(4.674)).round_to_cents(),
            Money::new(dec!(4.67))
        );
        // exact midpoint rounds away from zero
        assert_eq!(
            Money::new(dec!(2.005)).round_to_cents(),
            Money::new(dec!(2.01))
        );
    }

    #[test]
    fn test_round_is_idempotent() {
        let once = Money::new(dec!(39.345)).round_to_cents();
        assert_eq!(once.round_to_cents(), once);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(dec!(10.99))), "$10.99");
        assert_eq!(format!("{}", Money::new(dec!(5))), "$5.00");
        assert_eq!(format!("{}", Money::new(dec!(-5.5))), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(5.50));

        assert_eq!(a + b, Money::new(dec!(15.50)));
        assert_eq!(a * 3_i64, Money::new(dec!(30.00)));
        assert_eq!(a * dec!(0.125), Money::new(dec!(1.25)));

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc, Money::new(dec!(15.50)));
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::new(dec!(0.01)).is_zero());
        assert_eq!(Money::default(), Money::zero());
    }
}
