//! # deli-store: Persistence Layer for Deli POS
//!
//! Everything durable lives here: the four inventory ledger files, the
//! signature book, and the receipt files written at checkout.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Deli POS Data Flow                               │
//! │                                                                         │
//! │  apps/terminal (menu loop)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    deli-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ ShopInventory │    │   Ledgers     │    │   Receipt    │  │   │
//! │  │   │  (shop.rs)    │    │ (ledger.rs)   │    │ (receipt.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ open/checkout │◄───│ load/consume  │    │ render/save  │  │   │
//! │  │   │ Catalog view  │    │ write-through │    │ process_sale │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  breads.csv  toppings.csv  drinks.csv  extras.csv  signatures.csv       │
//! │  receipts/20260825-143305.txt                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`record`] - The per-category `<stock>|payload` line codec
//! - [`ledger`] - Load-once, write-through inventory ledgers
//! - [`signatures`] - The signature sandwich book
//! - [`receipt`] - Rendering, saving, and sale finalization
//! - [`shop`] - Shop assembly and the two-phase checkout
//! - [`error`] - Persistence error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deli_store::{CatalogPaths, ShopInventory};
//!
//! let mut shop = ShopInventory::open(&paths)?;
//!
//! // ... the terminal builds an Order against shop.catalog() ...
//!
//! // Receipt first, stock second; a failed save never reaches the stock.
//! let receipt_path = shop.checkout(&order, Path::new("receipts"))?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod receipt;
pub mod record;
pub mod shop;
pub mod signatures;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use ledger::InventoryLedger;
pub use receipt::{receipt_file_name, Receipt};
pub use record::CatalogRecord;
pub use shop::{CatalogPaths, ShopInventory};
pub use signatures::SignatureBook;
