//! # Domain Error Types
//!
//! Typed errors for order and sandwich editing. Every fallible mutator in
//! this crate returns [`OrderResult`]; nothing here panics.
//!
//! ## Error Philosophy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Edit rejected (wrong index, missing line, duplicate topping)           │
//! │      → OrderError, shown to the cashier, order unchanged                │
//! │                                                                         │
//! │  File problems never appear here: persistence errors belong to          │
//! │  deli-store, terminal problems to apps/terminal                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors produced while editing an order or a sandwich.
///
/// All variants describe a rejected edit; the order is left untouched when
/// one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Sandwich removal or edit addressed a position that does not exist.
    #[error("no sandwich at position {index}")]
    SandwichIndexOutOfRange { index: usize },

    /// Drink removal found no line matching the (type, size) pair.
    #[error("that drink is not in the order")]
    DrinkNotFound,

    /// Extra removal found no line of that type.
    #[error("that extra is not in the order")]
    ExtraNotFound,

    /// Topping removal found no selection matching the (type, serving) pair.
    #[error("that topping is not on the sandwich")]
    ToppingNotFound,

    /// The same (type, serving) topping selection is already present.
    /// A topping may appear at most twice: once normal, once as an extra
    /// serving.
    #[error("that topping is already on the sandwich")]
    DuplicateTopping,
}

/// Result alias for order-editing operations.
pub type OrderResult<T> = Result<T, OrderError>;
