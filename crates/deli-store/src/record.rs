//! # Catalog Record Codec
//!
//! One ledger line per entry: a leading integer stock count, a `|`, then a
//! category-specific payload. This module owns the payload half; the
//! [ledger](crate::ledger) owns the stock half and the file itself.
//!
//! ## Line Layouts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bread    <stock>|<name>                                                │
//! │  drink    <stock>|<priceS>|<priceM>|<priceL>|<name>                     │
//! │  extra    <stock>|<price>|<name>                                        │
//! │  topping  <stock>|<p4>|<p8>|<p12>|<xp4>|<xp8>|<xp12>|<category>|<name>  │
//! │                                                                         │
//! │  Prices are plain decimals ("0.75"). The name is always the LAST        │
//! │  field and re-joins any remaining `|` fields, so "Fizzy|Pop" is a       │
//! │  legal drink name. Writing is exactly the inverse: round-trips are      │
//! │  lossless in value.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use deli_core::catalog::{
    BreadEntry, BreadId, DrinkEntry, DrinkId, ExtraEntry, ExtraId, ToppingEntry, ToppingId,
};
use deli_core::money::{Money, ParseMoneyError};
use thiserror::Error;

// =============================================================================
// Parse Errors
// =============================================================================

/// Error parsing a single payload. The ledger wraps it with the file path
/// and line number before it surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Too few `|`-separated fields for this category's layout.
    #[error("expected at least {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A price field did not parse as a decimal.
    #[error(transparent)]
    Price(#[from] ParseMoneyError),
}

fn price(field: &str) -> Result<Money, RecordError> {
    Ok(field.parse::<Money>()?)
}

// =============================================================================
// CatalogRecord Trait
// =============================================================================

/// What the generic ledger needs from a category: the payload codec, stock
/// access, and the typed-handle plumbing.
///
/// `parse_payload` builds the entry with a placeholder stock of 0; the
/// ledger stamps the real count with `set_stock` right after.
pub trait CatalogRecord: Sized {
    /// Typed handle for this category's arena.
    type Id: Copy + Eq + fmt::Debug;

    /// Category label used in errors and logs ("bread", "topping", ...).
    const CATEGORY: &'static str;

    /// Mints the handle for an arena index. Only the owning ledger calls
    /// this.
    fn id_at(index: usize) -> Self::Id;

    /// The arena index behind a handle.
    fn index_of(id: Self::Id) -> usize;

    /// Parses everything after the leading `<stock>|`.
    fn parse_payload(payload: &str) -> Result<Self, RecordError>;

    /// The inverse of [`parse_payload`](CatalogRecord::parse_payload).
    fn write_payload(&self) -> String;

    fn name(&self) -> &str;

    fn stock(&self) -> i64;

    fn set_stock(&mut self, stock: i64);

    /// Whether the entry belongs on the menu.
    fn in_stock(&self) -> bool {
        self.stock() > 0
    }
}

// =============================================================================
// Bread: <name>
// =============================================================================

impl CatalogRecord for BreadEntry {
    type Id = BreadId;
    const CATEGORY: &'static str = "bread";

    fn id_at(index: usize) -> BreadId {
        BreadId::from_index(index)
    }

    fn index_of(id: BreadId) -> usize {
        id.index()
    }

    /// The whole payload is the name; bread carries no price of its own.
    fn parse_payload(payload: &str) -> Result<Self, RecordError> {
        Ok(BreadEntry {
            name: payload.to_string(),
            stock: 0,
        })
    }

    fn write_payload(&self) -> String {
        self.name.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stock(&self) -> i64 {
        self.stock
    }

    fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

// =============================================================================
// Drink: <priceS>|<priceM>|<priceL>|<name>
// =============================================================================

impl CatalogRecord for DrinkEntry {
    type Id = DrinkId;
    const CATEGORY: &'static str = "drink";

    fn id_at(index: usize) -> DrinkId {
        DrinkId::from_index(index)
    }

    fn index_of(id: DrinkId) -> usize {
        id.index()
    }

    fn parse_payload(payload: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = payload.split('|').collect();
        if fields.len() < 4 {
            return Err(RecordError::FieldCount {
                expected: 4,
                found: fields.len(),
            });
        }
        Ok(DrinkEntry {
            prices: [price(fields[0])?, price(fields[1])?, price(fields[2])?],
            name: fields[3..].join("|"),
            stock: 0,
        })
    }

    fn write_payload(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.prices[0].to_decimal_string(),
            self.prices[1].to_decimal_string(),
            self.prices[2].to_decimal_string(),
            self.name
        )
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stock(&self) -> i64 {
        self.stock
    }

    fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

// =============================================================================
// Extra: <price>|<name>
// =============================================================================

impl CatalogRecord for ExtraEntry {
    type Id = ExtraId;
    const CATEGORY: &'static str = "extra";

    fn id_at(index: usize) -> ExtraId {
        ExtraId::from_index(index)
    }

    fn index_of(id: ExtraId) -> usize {
        id.index()
    }

    fn parse_payload(payload: &str) -> Result<Self, RecordError> {
        let (price_text, name) = payload.split_once('|').ok_or(RecordError::FieldCount {
            expected: 2,
            found: 1,
        })?;
        Ok(ExtraEntry {
            price: price(price_text)?,
            name: name.to_string(),
            stock: 0,
        })
    }

    fn write_payload(&self) -> String {
        format!("{}|{}", self.price.to_decimal_string(), self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stock(&self) -> i64 {
        self.stock
    }

    fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

// =============================================================================
// Topping: <p4>|<p8>|<p12>|<xp4>|<xp8>|<xp12>|<category>|<name>
// =============================================================================

impl CatalogRecord for ToppingEntry {
    type Id = ToppingId;
    const CATEGORY: &'static str = "topping";

    fn id_at(index: usize) -> ToppingId {
        ToppingId::from_index(index)
    }

    fn index_of(id: ToppingId) -> usize {
        id.index()
    }

    fn parse_payload(payload: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = payload.split('|').collect();
        if fields.len() < 8 {
            return Err(RecordError::FieldCount {
                expected: 8,
                found: fields.len(),
            });
        }
        Ok(ToppingEntry {
            prices: [price(fields[0])?, price(fields[1])?, price(fields[2])?],
            extra_prices: [price(fields[3])?, price(fields[4])?, price(fields[5])?],
            category: fields[6].to_string(),
            name: fields[7..].join("|"),
            stock: 0,
        })
    }

    fn write_payload(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}",
            self.prices[0].to_decimal_string(),
            self.prices[1].to_decimal_string(),
            self.prices[2].to_decimal_string(),
            self.extra_prices[0].to_decimal_string(),
            self.extra_prices[1].to_decimal_string(),
            self.extra_prices[2].to_decimal_string(),
            self.category,
            self.name
        )
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stock(&self) -> i64 {
        self.stock
    }

    fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
