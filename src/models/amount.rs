//! Amount type for recorded income values
//!
//! Wraps the raw value recorded by the user. Full precision is kept
//! internally; display rounds to two decimal places. Parsing is
//! deliberately permissive: any input that reads as a real number is
//! accepted, negative and zero included, because corrections and refunds
//! are recorded as ordinary entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A recorded income amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
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

    /// Parse an amount from user input
    ///
    /// Accepts anything `f64` accepts after trimming whitespace.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        s.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| AmountParseError::InvalidNumber(s.trim().to_string()))
    }

    /// Format with a currency symbol, two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.0 < 0.0 {
            format!("-{}{:.2}", symbol, -self.0)
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
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

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidNumber(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidNumber(s) => write!(f, "Invalid numeric value: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("125.50").unwrap().value(), 125.5);
        assert_eq!(Amount::parse("  800 ").unwrap().value(), 800.0);
        assert_eq!(Amount::parse("0").unwrap().value(), 0.0);
    }

    #[test]
    fn test_parse_accepts_negative() {
        // Permissive on purpose: a negative entry records a correction.
        assert_eq!(Amount::parse("-12.75").unwrap().value(), -12.75);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("12,50").is_err());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Amount::new(50.0).to_string(), "50.00");
        assert_eq!(Amount::new(25.5).to_string(), "25.50");
        assert_eq!(Amount::new(0.005).to_string(), "0.01");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Amount::new(1050.5).format_with_symbol("$"), "$1050.50");
        assert_eq!(Amount::new(-10.5).format_with_symbol("$"), "-$10.50");
        assert_eq!(Amount::zero().format_with_symbol("$"), "$0.00");
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Amount::new(50.0), Amount::new(25.5)];
        let total: Amount = amounts.into_iter().sum();
        assert_eq!(total.value(), 75.5);
    }

    #[test]
    fn test_serialization() {
        let a = Amount::new(125.5);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "125.5");

        let deserialized: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(a, deserialized);
    }
}
