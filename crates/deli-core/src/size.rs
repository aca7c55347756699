//! # Size Enums
//!
//! Sandwich and drink sizes. Both enums carry the two numbers the rest of
//! the system needs from a size:
//!
//! - a **price dimension**: sandwich size fixes the base price and selects
//!   the bread/topping price column; drink size selects the drink price
//!   column
//! - a **consumption factor**: how many stock units a selection of that size
//!   draws at checkout (1/2/3 for the three tiers)

use std::fmt;

use crate::money::Money;

// =============================================================================
// Sandwich Size
// =============================================================================

/// The three sandwich sizes sold at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandwichSize {
    FourInch,
    EightInch,
    TwelveInch,
}

impl SandwichSize {
    /// All sizes in menu order, smallest first.
    pub const ALL: [SandwichSize; 3] = [
        SandwichSize::FourInch,
        SandwichSize::EightInch,
        SandwichSize::TwelveInch,
    ];

    /// Base price of a sandwich of this size, before toppings.
    ///
    /// Bread is included in the base price, which is why a bread selection
    /// prices at zero.
    pub const fn base_price(self) -> Money {
        match self {
            SandwichSize::FourInch => Money::from_cents(550),
            SandwichSize::EightInch => Money::from_cents(700),
            SandwichSize::TwelveInch => Money::from_cents(850),
        }
    }

    /// Stock units a bread or topping of this size consumes at checkout.
    pub const fn units(self) -> i64 {
        match self {
            SandwichSize::FourInch => 1,
            SandwichSize::EightInch => 2,
            SandwichSize::TwelveInch => 3,
        }
    }

    /// Column in a bread/topping price table for this size.
    pub(crate) const fn price_index(self) -> usize {
        match self {
            SandwichSize::FourInch => 0,
            SandwichSize::EightInch => 1,
            SandwichSize::TwelveInch => 2,
        }
    }
}

/// Displays as the short form used in line-item names: `8in`.
impl fmt::Display for SandwichSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SandwichSize::FourInch => "4in",
            SandwichSize::EightInch => "8in",
            SandwichSize::TwelveInch => "12in",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Drink Size
// =============================================================================

/// The three fountain drink sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrinkSize {
    Small,
    Medium,
    Large,
}

impl DrinkSize {
    /// All sizes in menu order, smallest first.
    pub const ALL: [DrinkSize; 3] = [DrinkSize::Small, DrinkSize::Medium, DrinkSize::Large];

    /// Stock units a drink of this size consumes at checkout.
    pub const fn units(self) -> i64 {
        match self {
            DrinkSize::Small => 1,
            DrinkSize::Medium => 2,
            DrinkSize::Large => 3,
        }
    }

    /// Column in a drink price table for this size.
    pub(crate) const fn price_index(self) -> usize {
        match self {
            DrinkSize::Small => 0,
            DrinkSize::Medium => 1,
            DrinkSize::Large => 2,
        }
    }
}

/// Displays as the full word used in line-item names: `Medium`.
impl fmt::Display for DrinkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DrinkSize::Small => "Small",
            DrinkSize::Medium => "Medium",
            DrinkSize::Large => "Large",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandwich_base_prices() {
        assert_eq!(SandwichSize::FourInch.base_price().cents(), 550);
        assert_eq!(SandwichSize::EightInch.base_price().cents(), 700);
        assert_eq!(SandwichSize::TwelveInch.base_price().cents(), 850);
    }

    #[test]
    fn test_unit_factors_scale_with_size() {
        assert_eq!(SandwichSize::FourInch.units(), 1);
        assert_eq!(SandwichSize::EightInch.units(), 2);
        assert_eq!(SandwichSize::TwelveInch.units(), 3);

        assert_eq!(DrinkSize::Small.units(), 1);
        assert_eq!(DrinkSize::Medium.units(), 2);
        assert_eq!(DrinkSize::Large.units(), 3);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(SandwichSize::FourInch.to_string(), "4in");
        assert_eq!(SandwichSize::TwelveInch.to_string(), "12in");
        assert_eq!(DrinkSize::Medium.to_string(), "Medium");
    }
}
