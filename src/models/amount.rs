//! Amount type for ledger records
//!
//! Amounts are plain `f64` values: positive for inflows, negative for
//! outflows. Two renderings are provided: [`Amount::format_fixed`] for
//! money columns and `Display` for the raw numeric total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use thiserror::Error;

/// A signed monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount from user input
    ///
    /// Accepts "12", "12.5", "-12.50" and "$12.50".
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let value: f64 = rest
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;
        if !value.is_finite() || rest.starts_with(['+', '-']) {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with exactly two decimal places, e.g. `-45.67`
    pub fn format_fixed(&self) -> String {
        format!("{:.2}", self.0)
    }
}

/// Raw numeric rendering: shortest round-trip digits, with `.0` kept on
/// integral values (`900.0`, `834.33`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

// Folds from +0.0 in iteration order so an empty sum is never -0.0.
impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_display() {
        assert_eq!(Amount::new(900.0).to_string(), "900.0");
        assert_eq!(Amount::new(834.33).to_string(), "834.33");
        assert_eq!(Amount::new(-45.67).to_string(), "-45.67");
        assert_eq!(Amount::zero().to_string(), "0.0");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(Amount::new(900.0).format_fixed(), "900.00");
        assert_eq!(Amount::new(-45.67).format_fixed(), "-45.67");
        assert_eq!(Amount::new(0.5).format_fixed(), "0.50");
    }

    #[test]
    fn test_sum_matches_sequential_addition() {
        let amounts = [Amount::new(900.0), Amount::new(-45.67), Amount::new(-20.0)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.value(), 900.0 - 45.67 - 20.0);
        assert_eq!(total.to_string(), "834.33");
    }

    #[test]
    fn test_empty_sum_is_positive_zero() {
        let total: Amount = Vec::<Amount>::new().into_iter().sum();
        assert!(total.value().is_sign_positive());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("$10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("-$3").unwrap().value(), -3.0);
        assert_eq!(Amount::parse(" 12 ").unwrap().value(), 12.0);
        assert!(Amount::parse("ten").is_err());
        assert!(Amount::parse("inf").is_err());
        assert!(Amount::parse("--5").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(10.0);
        let b = Amount::new(2.5);
        assert_eq!((a + b).value(), 12.5);
        assert_eq!((a - b).value(), 7.5);
        assert_eq!((-a).value(), -10.0);
        assert!(b < a);
    }
}
