//! # deli-core: Pure Domain Logic for Deli POS
//!
//! This crate is the **heart** of Deli POS. It holds the priced composite
//! tree an order is built from, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Deli POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/terminal (interactive POS)                 │   │
//! │  │     order menu ──► sandwich editor ──► cart view ──► checkout   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 deli-store (persistence layer)                  │   │
//! │  │    inventory ledgers • signature book • receipt • checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ deli-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │   item    │  │   order   │  │   │
//! │  │   │   Money   │  │  entries  │  │ LineItem  │  │   Order   │  │   │
//! │  │   │  decimal  │  │  handles  │  │ Consumpt. │  │ Sandwich  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic (no floating point!)
//! - [`size`] - Sandwich and drink size enums with prices and unit factors
//! - [`catalog`] - Catalog entries, typed handles, and the borrowed catalog view
//! - [`item`] - The `LineItem` composite trait and total-price recursion
//! - [`sandwich`] - Sandwich lines, bread/topping selections, signatures
//! - [`order`] - The order root aggregate plus drink and extra lines
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: pricing is deterministic - same tree, same total
//! 2. **No I/O**: file and terminal access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Handles, not pointers**: order lines reference catalog entries by
//!    typed index into the owning ledger's arena, so stock lives in exactly
//!    one place
//!
//! ## Example Usage
//!
//! ```rust
//! use deli_core::catalog::{BreadEntry, Catalog, EntryId};
//! use deli_core::item::total_price;
//! use deli_core::sandwich::SandwichLine;
//! use deli_core::size::SandwichSize;
//!
//! let breads = vec![BreadEntry { name: "Wheat".into(), stock: 10 }];
//! let catalog = Catalog {
//!     breads: &breads,
//!     toppings: &[],
//!     drinks: &[],
//!     extras: &[],
//! };
//!
//! // A 12in sandwich with no toppings prices at its base alone.
//! let sandwich = SandwichLine::new(SandwichSize::TwelveInch, EntryId::from_index(0));
//! assert_eq!(total_price(&sandwich, &catalog).cents(), 850);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod item;
pub mod money;
pub mod order;
pub mod sandwich;
pub mod size;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use deli_core::Money` instead of
// `use deli_core::money::Money`

pub use catalog::{
    BreadEntry, BreadId, Catalog, DrinkEntry, DrinkId, EntryId, EntryRef, ExtraEntry, ExtraId,
    ToppingEntry, ToppingId,
};
pub use error::{OrderError, OrderResult};
pub use item::{total_price, Consumption, LineItem};
pub use money::Money;
pub use order::{DrinkLine, ExtraLine, Order};
pub use sandwich::{BreadSelection, SandwichLine, SignatureSandwich, ToppingSelection};
pub use size::{DrinkSize, SandwichSize};
