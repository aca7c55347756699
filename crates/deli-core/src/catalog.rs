//! # Catalog Entries and Handles
//!
//! One stock-tracked item type per entry: a kind of bread, topping, drink,
//! or extra, each with its price data and a quantity on hand.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Who Owns What                                      │
//! │                                                                         │
//! │  InventoryLedger (deli-store)                                           │
//! │    owns Vec<ToppingEntry> ── stable arena, never grows or shrinks       │
//! │         │                    after load                                 │
//! │         │ index                                                         │
//! │         ▼                                                               │
//! │  ToppingId(3) ── what an order line holds; Copy, no aliasing            │
//! │         │                                                               │
//! │         ▼ resolved through                                              │
//! │  Catalog<'_> ── borrowed view over all four arenas, used for            │
//! │                 naming and pricing                                      │
//! │                                                                         │
//! │  Stock lives in exactly ONE place. Order lines can never hold a         │
//! │  diverged copy of an entry.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handles are minted only by the owning ledger, and the arenas are fixed
//! for the process lifetime, so resolving a handle cannot fail: lookups
//! index directly. An out-of-stock entry stays in its arena, which is what
//! keeps stale selections editable after stock runs out.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::money::Money;
use crate::size::{DrinkSize, SandwichSize};

// =============================================================================
// Typed Handles
// =============================================================================

/// Index handle into the arena holding entries of type `T`.
///
/// A `BreadId` cannot be confused with a `ToppingId` even though both are
/// an index underneath; the compiler keeps the four catalogs apart.
pub struct EntryId<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EntryId<T> {
    /// Wraps an arena index. Intended for the owning ledger at load time;
    /// a handle made from an index that was never loaded will panic on
    /// resolution.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        EntryId {
            index,
            _marker: PhantomData,
        }
    }

    /// The arena index this handle points at.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }
}

// Manual impls: derived ones would put bounds on T, which is only a marker.
impl<T> Clone for EntryId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntryId<T> {}

impl<T> PartialEq for EntryId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for EntryId<T> {}

impl<T> Hash for EntryId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for EntryId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntryId").field(&self.index).finish()
    }
}

/// Handle to a bread entry.
pub type BreadId = EntryId<BreadEntry>;
/// Handle to a topping entry.
pub type ToppingId = EntryId<ToppingEntry>;
/// Handle to a drink entry.
pub type DrinkId = EntryId<DrinkEntry>;
/// Handle to an extra entry.
pub type ExtraId = EntryId<ExtraEntry>;

/// A handle to an entry in any of the four catalogs.
///
/// Consumption is routed through this: a line item names what it draws
/// stock from, and the shop inventory dispatches to the right ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef {
    Bread(BreadId),
    Topping(ToppingId),
    Drink(DrinkId),
    Extra(ExtraId),
}

// =============================================================================
// Catalog Entries
// =============================================================================

/// A kind of bread. No price of its own; bread is covered by the sandwich
/// base price. Stock still depletes per sandwich.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadEntry {
    pub name: String,
    pub stock: i64,
}

impl BreadEntry {
    /// Whether the entry can be offered on the menu.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A kind of topping, with a normal-serving and an extra-serving price for
/// each sandwich size, plus a menu category ("meats", "cheese", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToppingEntry {
    pub name: String,
    pub category: String,
    /// Normal-serving price per sandwich size, smallest first.
    pub prices: [Money; 3],
    /// Extra-serving price per sandwich size, smallest first.
    pub extra_prices: [Money; 3],
    pub stock: i64,
}

impl ToppingEntry {
    /// Price of one serving for the given sandwich size and serving kind.
    pub fn price(&self, size: SandwichSize, extra: bool) -> Money {
        let table = if extra { &self.extra_prices } else { &self.prices };
        table[size.price_index()]
    }

    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A kind of drink, priced per drink size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkEntry {
    pub name: String,
    /// Price per drink size, smallest first.
    pub prices: [Money; 3],
    pub stock: i64,
}

impl DrinkEntry {
    /// Price for the given drink size.
    pub fn price(&self, size: DrinkSize) -> Money {
        self.prices[size.price_index()]
    }

    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A standalone extra (chips, cookie), flat price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraEntry {
    pub name: String,
    pub price: Money,
    pub stock: i64,
}

impl ExtraEntry {
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Catalog View
// =============================================================================

/// Borrowed view over all four entry arenas.
///
/// Line items never store entry data; they resolve their handles through
/// this view each time a name or price is needed, so pricing always reads
/// the single authoritative copy.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub breads: &'a [BreadEntry],
    pub toppings: &'a [ToppingEntry],
    pub drinks: &'a [DrinkEntry],
    pub extras: &'a [ExtraEntry],
}

impl<'a> Catalog<'a> {
    pub fn bread(&self, id: BreadId) -> &'a BreadEntry {
        &self.breads[id.index()]
    }

    pub fn topping(&self, id: ToppingId) -> &'a ToppingEntry {
        &self.toppings[id.index()]
    }

    pub fn drink(&self, id: DrinkId) -> &'a DrinkEntry {
        &self.drinks[id.index()]
    }

    pub fn extra(&self, id: ExtraId) -> &'a ExtraEntry {
        &self.extras[id.index()]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
