//! # Persistence Error Types
//!
//! Error types for ledger, signature, and receipt file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (read/write failed)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds path, line number, category            │
//! │       │                                                                 │
//! │       ├── at load time    → fatal, the shop cannot open                │
//! │       ├── at receipt save → checkout aborts, nothing consumed           │
//! │       └── at ledger save  → NOT raised; logged, decrement stands        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The third arm is the deliberate odd one out: write-through persistence
//! failure after a consume is reported through `tracing::error!` by the
//! ledger itself, so no variant here covers it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A catalog or signature file could not be read at load time.
    ///
    /// ## When This Occurs
    /// - File missing (fresh install without seed data)
    /// - Permission denied
    /// - Not valid UTF-8
    #[error("could not read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A ledger line did not parse for its category's layout.
    #[error("{}:{line}: malformed {category} record: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        category: &'static str,
        reason: String,
    },

    /// A category has no in-stock entries, so nothing could be sold from
    /// it. Checked at shop assembly, not by the ledger itself.
    #[error("no {category} in stock; the shop cannot open")]
    EmptyCatalog { category: &'static str },

    /// A signature line was structurally bad (too few fields, a topping
    /// listed more than twice).
    #[error("{}:{line}: bad signature record: {reason}", .path.display())]
    BadSignature {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A signature named a bread that is not in the bread catalog.
    #[error("signature {signature:?} names unknown bread {bread:?}")]
    UnknownBread { signature: String, bread: String },

    /// A signature named a topping that is not in the topping catalog.
    #[error("signature {signature:?} names unknown topping {topping:?}")]
    UnknownTopping { signature: String, topping: String },

    /// The receipts directory could not be created at checkout.
    #[error("could not create receipts directory {}: {source}", .path.display())]
    ReceiptDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The receipt file could not be written. Checkout aborts on this
    /// before any stock is consumed.
    #[error("could not write receipt {}: {source}", .path.display())]
    ReceiptWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Creates a Malformed error for a ledger line.
    pub fn malformed(
        path: impl Into<PathBuf>,
        line: usize,
        category: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        StoreError::Malformed {
            path: path.into(),
            line,
            category,
            reason: reason.into(),
        }
    }

    /// Creates a BadSignature error for a signature line.
    pub fn bad_signature(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        StoreError::BadSignature {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
