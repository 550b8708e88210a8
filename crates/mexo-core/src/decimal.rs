//! Precision-safe decimal types for trading.
//!
//! Uses `rust_decimal` for exact decimal arithmetic, so ladder rungs such as
//! `10.02 + 2 * 0.01` land exactly on `10.04`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Price with exact decimal precision.
///
/// Wraps `Decimal` to provide type safety and prevent mixing
/// prices with sizes in calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Truncate toward zero at `dp` decimal places.
    ///
    /// `12.34567` truncated at 4 places is `12.3456`; nothing is ever rounded up.
    #[inline]
    pub fn truncate_dp(&self, dp: u32) -> Self {
        Self(self.0.round_dp_with_strategy(dp, RoundingStrategy::ToZero))
    }

    /// Step this price by `steps` increments of `step` (negative steps move down).
    #[inline]
    pub fn offset(&self, step: Decimal, steps: i64) -> Self {
        Self(self.0 + step * Decimal::from(steps))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add<Decimal> for Price {
    type Output = Self;

    fn add(self, rhs: Decimal) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub for Price {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Size/quantity in base asset units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(pub Decimal);

impl Size {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Notional value at `price`.
    #[inline]
    pub fn notional(&self, price: Price) -> Decimal {
        self.0 * price.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Size {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Size {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Mul<Decimal> for Size {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_truncate_never_rounds_up() {
        assert_eq!(Price::new(dec!(12.34567)).truncate_dp(4).inner(), dec!(12.3456));
        assert_eq!(Price::new(dec!(0.99999)).truncate_dp(4).inner(), dec!(0.9999));
        assert_eq!(Price::new(dec!(3)).truncate_dp(4).inner(), dec!(3));
    }

    #[test]
    fn test_offset_steps_both_ways() {
        let p = Price::new(dec!(10.00));
        assert_eq!(p.offset(dec!(0.01), 2).inner(), dec!(10.02));
        assert_eq!(p.offset(dec!(0.01), -2).inner(), dec!(9.98));
    }

    #[test]
    fn test_price_sub_yields_decimal() {
        let diff = Price::new(dec!(1.0001)) - Price::new(dec!(1.0000));
        assert_eq!(diff, dec!(0.0001));
    }

    #[test]
    fn test_positive_checks() {
        assert!(Price::new(dec!(0.0001)).is_positive());
        assert!(!Price::ZERO.is_positive());
        assert!(!Size::new(dec!(-1)).is_positive());
    }

    #[test]
    fn test_notional_calculation() {
        let size = Size::new(dec!(30));
        assert_eq!(size.notional(Price::new(dec!(0.25))), dec!(7.5));
    }
}
