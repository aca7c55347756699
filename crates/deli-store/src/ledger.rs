//! # Inventory Ledgers
//!
//! One ledger per category, loaded once at startup, written through on
//! every stock mutation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load()      read file, one entry per line, fatal on any problem        │
//! │     │        (a shop with an unreadable catalog cannot open)            │
//! │     ▼                                                                   │
//! │  entries     stable arena: never grows, never shrinks, never reorders   │
//! │     │        handles minted here stay valid for the whole process       │
//! │     ▼                                                                   │
//! │  consume()   stock -= units, then rewrite the WHOLE file                │
//! │              • no floor: stock may go negative                          │
//! │              • write failure is logged, not raised; the in-memory       │
//! │                decrement stands (known weak point, kept deliberately)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `items()` is the menu's view (in stock only); `all_items()` resolves
//! previously-made selections, so an order line whose entry ran out of
//! stock can still be shown and removed.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, error};

use crate::error::{StoreError, StoreResult};
use crate::record::CatalogRecord;

/// A load-once, write-through store of catalog entries for one category.
#[derive(Debug)]
pub struct InventoryLedger<E: CatalogRecord> {
    path: PathBuf,
    entries: Vec<E>,
}

impl<E: CatalogRecord> InventoryLedger<E> {
    /// Loads a ledger file.
    ///
    /// Each non-blank line is `<stock>|<payload>`; the payload layout is
    /// the category's (see [`crate::record`]). Blank lines are skipped.
    /// Any read or parse problem is fatal.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| StoreError::ReadFailed {
            path: path.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let (stock_text, payload) = line.split_once('|').ok_or_else(|| {
                StoreError::malformed(&path, number + 1, E::CATEGORY, "missing '|' separator")
            })?;
            let stock: i64 = stock_text.trim().parse().map_err(|_| {
                StoreError::malformed(
                    &path,
                    number + 1,
                    E::CATEGORY,
                    format!("bad stock count {stock_text:?}"),
                )
            })?;
            let mut entry = E::parse_payload(payload).map_err(|parse_error| {
                StoreError::malformed(&path, number + 1, E::CATEGORY, parse_error.to_string())
            })?;
            entry.set_stock(stock);
            entries.push(entry);
        }

        debug!(
            path = %path.display(),
            category = E::CATEGORY,
            count = entries.len(),
            "Loaded inventory ledger"
        );
        Ok(InventoryLedger { path, entries })
    }

    /// The full arena, in load order, for building a catalog view.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// In-stock entries with their handles, load order preserved. This is
    /// what menus list.
    pub fn items(&self) -> impl Iterator<Item = (E::Id, &E)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.in_stock())
            .map(|(index, entry)| (E::id_at(index), entry))
    }

    /// Every entry with its handle, including out-of-stock ones. Used to
    /// resolve selections made earlier in the session.
    pub fn all_items(&self) -> impl Iterator<Item = (E::Id, &E)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (E::id_at(index), entry))
    }

    /// Resolves a handle minted by this ledger.
    pub fn get(&self, id: E::Id) -> &E {
        &self.entries[E::index_of(id)]
    }

    /// Whether anything in this category can currently be sold.
    pub fn has_in_stock(&self) -> bool {
        self.entries.iter().any(|entry| entry.in_stock())
    }

    /// Draws `units` of stock from an entry and persists the ledger.
    ///
    /// There is no floor: stock goes negative if a sale outruns it. If the
    /// write fails the decrement stays in memory and the failure is
    /// logged; the caller is never interrupted mid-checkout.
    pub fn consume(&mut self, id: E::Id, units: i64) {
        let entry = &mut self.entries[E::index_of(id)];
        let stock = entry.stock() - units;
        entry.set_stock(stock);
        debug!(
            category = E::CATEGORY,
            name = entry.name(),
            units,
            stock,
            "Consumed stock"
        );

        if let Err(write_error) = self.save() {
            error!(
                path = %self.path.display(),
                error = %write_error,
                "Could not update inventory file"
            );
        }
    }

    /// Rewrites the whole file, one line per entry, in arena order.
    fn save(&self) -> io::Result<()> {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("{}|{}\n", entry.stock(), entry.write_payload()));
        }
        fs::write(&self.path, out)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
