//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A sandwich priced from three topping lookups would accumulate          │
//! │  rounding noise before it ever reached the receipt.                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Catalog files store "0.75"; we parse straight to 75 cents and        │
//! │    every sum after that is exact integer arithmetic                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use deli_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(550); // $5.50
//!
//! // Parse the decimal form used by the catalog files
//! let parsed: Money = "5.50".parse().unwrap();
//! assert_eq!(parsed, price);
//!
//! // And write it back out losslessly
//! assert_eq!(price.to_decimal_string(), "5.50");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic never traps mid-checkout, and differences
///   are representable
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  catalog file "0.75" ──► ToppingEntry price table ──► own_price()       │
/// │                                                          │              │
/// │                          total_price() recursion ◄───────┘              │
/// │                                    │                                    │
/// │          receipt column "0.75" ◄───┴───► menu display "$0.75"           │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use deli_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use deli_core::money::Money;
    ///
    /// let price = Money::from_major_minor(5, 50); // $5.50
    /// assert_eq!(price.cents(), 550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // If major is negative, minor moves further from zero
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    ///
    /// The receipt renderer leans on this: a line whose total is zero gets a
    /// blank price column instead of "0.00".
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats the value as a plain decimal, two fractional digits, no
    /// currency symbol: `550` → `"5.50"`.
    ///
    /// This is the form the catalog files and the receipt price column use;
    /// [`fmt::Display`] keeps the `$` for menus.
    ///
    /// ## Example
    /// ```rust
    /// use deli_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(550).to_decimal_string(), "5.50");
    /// assert_eq!(Money::from_cents(0).to_decimal_string(), "0.00");
    /// assert_eq!(Money::from_cents(-75).to_decimal_string(), "-0.75");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Decimal Parsing
// =============================================================================

/// Error parsing a decimal price string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// The input was empty or whitespace.
    #[error("empty price")]
    Empty,

    /// The input was not a decimal number.
    #[error("invalid price {0:?}")]
    Invalid(String),

    /// More than two fractional digits; cents cannot represent it.
    #[error("price {0:?} has more than two decimal places")]
    TooPrecise(String),
}

/// Parses the decimal form the catalog files use: `"5"`, `"5.5"`, `"5.50"`,
/// with an optional leading `-`. At most two fractional digits.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (body, None),
        };

        // "-", "." and "-." all reduce to nothing left to parse.
        if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }

        let dollars: i64 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?
        };

        let cents: i64 = match frac_part {
            None | Some("") => 0,
            Some(frac) if frac.len() > 2 => return Err(ParseMoneyError::TooPrecise(s.to_string())),
            Some(frac) => {
                if !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseMoneyError::Invalid(s.to_string()));
                }
                let parsed: i64 = frac
                    .parse()
                    .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?;
                // One digit means tenths: "5.5" is 5 dollars 50 cents
                if frac.len() == 1 {
                    parsed * 10
                } else {
                    parsed
                }
            }
        };

        let total = dollars * 100 + cents;
        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money the way the menus do: `$5.50`, `-$0.75`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Summing an iterator of Money values, used by the total-price recursion.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(5, 50);
        assert_eq!(money.cents(), 550);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(550)), "$5.50");
        assert_eq!(format!("{}", Money::from_cents(-75)), "-$0.75");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(550).to_decimal_string(), "5.50");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_decimal_string(), "0.00");
        assert_eq!(Money::from_cents(-130).to_decimal_string(), "-1.30");
    }

    #[test]
    fn test_parse_whole_and_fractions() {
        assert_eq!("5".parse::<Money>().unwrap().cents(), 500);
        assert_eq!("5.5".parse::<Money>().unwrap().cents(), 550);
        assert_eq!("5.50".parse::<Money>().unwrap().cents(), 550);
        assert_eq!("0.75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("-1.30".parse::<Money>().unwrap().cents(), -130);
        assert_eq!(" 2.00 ".parse::<Money>().unwrap().cents(), 200);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert!(matches!(
            "abc".parse::<Money>(),
            Err(ParseMoneyError::Invalid(_))
        ));
        assert!(matches!(
            "1.2.3".parse::<Money>(),
            Err(ParseMoneyError::TooPrecise(_))
        ));
        assert!(matches!(
            "5.505".parse::<Money>(),
            Err(ParseMoneyError::TooPrecise(_))
        ));
        assert!(matches!(
            "-".parse::<Money>(),
            Err(ParseMoneyError::Invalid(_))
        ));
        assert!(matches!(
            ".".parse::<Money>(),
            Err(ParseMoneyError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_display_round_trip() {
        for cents in [0, 5, 75, 550, 700, 850, -130] {
            let money = Money::from_cents(cents);
            let parsed: Money = money.to_decimal_string().parse().unwrap();
            assert_eq!(parsed, money);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(700);
        let b = Money::from_cents(125);

        assert_eq!((a + b).cents(), 825);
        assert_eq!((a - b).cents(), 575);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 825);
    }

    #[test]
    fn test_sum() {
        let parts = [Money::from_cents(700), Money::from_cents(50), Money::from_cents(75)];
        let total: Money = parts.into_iter().sum();
        assert_eq!(total.cents(), 825);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }
}
