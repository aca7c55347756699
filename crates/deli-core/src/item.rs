//! # Line Item Composite
//!
//! Everything an order is made of sits in one priced tree, and every node
//! in that tree speaks the same small interface: [`LineItem`].
//!
//! ## The Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order (own 0)                                                          │
//! │  ├── 8in Sandwich (own 7.00 = base price)                               │
//! │  │   ├── Wheat            bread selection, own 0, consumes 2            │
//! │  │   ├── Cheddar          topping, own 0.50, consumes 2                 │
//! │  │   ├── Extra Cheddar    topping, own 0.75, consumes 2                 │
//! │  │   └── Toasted          marker, own 0, consumes nothing               │
//! │  ├── Medium Cola (own 1.25, consumes 2)                                 │
//! │  └── Chips (own 1.50, consumes 1)                                       │
//! │                                                                         │
//! │  total(node) = own(node) + Σ total(child)      computed on demand       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Three capabilities, one trait: every node is named, priced, and has
//! children. Nodes backed by a catalog entry additionally report a
//! [`Consumption`] describing the stock they draw at checkout; the default
//! is `None`, so markers and containers opt out by doing nothing.

use crate::catalog::{Catalog, EntryRef};
use crate::money::Money;

// =============================================================================
// Consumption
// =============================================================================

/// One stock draw: which catalog entry, and how many units.
///
/// Unit counts scale with size. An 8in sandwich draws 2 units of its bread
/// and 2 units of every topping serving; a Large drink draws 3; an extra
/// always draws 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumption {
    pub entry: EntryRef,
    pub units: i64,
}

// =============================================================================
// LineItem Trait
// =============================================================================

/// A node in the priced composite tree.
///
/// Names and prices are resolved through the [`Catalog`] view on every
/// call rather than stored, so a line always reflects the one
/// authoritative copy of its entry.
pub trait LineItem {
    /// Display name, e.g. `"8in Sandwich"`, `"Extra Cheddar"`.
    fn name(&self, catalog: &Catalog<'_>) -> String;

    /// This node's own contribution, independent of children.
    fn own_price(&self, catalog: &Catalog<'_>) -> Money;

    /// Ordered children. Empty for leaves.
    fn sub_items(&self) -> Vec<&dyn LineItem>;

    /// The stock this node draws at checkout, if it is backed by a catalog
    /// entry. Containers and markers keep the default.
    fn consumption(&self) -> Option<Consumption> {
        None
    }
}

/// Total price of a node: own price plus the recursively summed price of
/// all descendants. Computed on demand, never cached; the tree is shallow
/// by construction (root → line → sub-line).
pub fn total_price(item: &dyn LineItem, catalog: &Catalog<'_>) -> Money {
    let children: Money = item
        .sub_items()
        .iter()
        .map(|sub| total_price(*sub, catalog))
        .sum();
    item.own_price(catalog) + children
}

// =============================================================================
// Toasted Marker
// =============================================================================

/// Zero-price marker node present on a sandwich only while it is toasted.
///
/// Toasting shows up on the receipt as a child line, so it is modeled as a
/// conditionally included node rather than a flag the renderer would have
/// to know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastedMarker;

/// The one marker instance sandwiches hand out references to.
pub(crate) static TOASTED: ToastedMarker = ToastedMarker;

impl LineItem for ToastedMarker {
    fn name(&self, _catalog: &Catalog<'_>) -> String {
        "Toasted".to_string()
    }

    fn own_price(&self, _catalog: &Catalog<'_>) -> Money {
        Money::zero()
    }

    fn sub_items(&self) -> Vec<&dyn LineItem> {
        Vec::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
