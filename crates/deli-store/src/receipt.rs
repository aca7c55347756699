//! # Receipt: Pricing, Rendering, Finalization
//!
//! A [`Receipt`] binds one order tree at checkout time and does three
//! things with it: totals it, renders it, and walks it to draw stock.
//!
//! ## Rendered Form
//! ```text
//! 8in Sandwich          8.25
//!   Wheat
//!   Bacon               0.50
//!   Extra Bacon         0.75
//!   Toasted
//! Medium Cola           1.25
//! ```
//!
//! The name column is 20 characters wide and gives up 2 per nesting level
//! to the indent, so the price column lines up at every depth. A line
//! whose total is exactly zero gets a blank price column rather than a
//! noisy `0.00`.
//!
//! ## Checkout Ordering
//! The receipt file is written before any stock moves. [`Receipt::save_to_file`]
//! failing therefore leaves every ledger untouched; [`Receipt::process_sale`]
//! runs only after a successful save. The shop layer composes the two.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use deli_core::catalog::Catalog;
use deli_core::item::{total_price, Consumption, LineItem};
use deli_core::money::Money;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Width of the name column at depth zero.
const ITEM_WIDTH: usize = 20;
/// Width of the right-aligned price column.
const PRICE_WIDTH: usize = 6;

/// File name for a receipt written at the given moment, e.g.
/// `20260825-143305.txt`. Second resolution; one sale per second is
/// plenty for a single terminal.
pub fn receipt_file_name(timestamp: DateTime<Local>) -> String {
    format!("{}.txt", timestamp.format("%Y%m%d-%H%M%S"))
}

/// One order, captured at checkout.
///
/// Stateless over the tree it borrows: prices and names are recomputed
/// from the catalog on every call, never cached.
pub struct Receipt<'a> {
    root: &'a dyn LineItem,
    timestamp: DateTime<Local>,
}

impl<'a> Receipt<'a> {
    /// Binds the root of an order tree, stamped with the current time.
    pub fn new(root: &'a dyn LineItem) -> Self {
        Receipt {
            root,
            timestamp: Local::now(),
        }
    }

    /// When this receipt was created.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// File name this receipt saves under.
    pub fn file_name(&self) -> String {
        receipt_file_name(self.timestamp)
    }

    /// Total charged for the order. The root's own price is zero by
    /// construction but is included in the recursion for uniformity.
    pub fn price(&self, catalog: &Catalog<'_>) -> Money {
        total_price(self.root, catalog)
    }

    /// Renders the tree, one line per node, depth first. The root itself
    /// is not printed; the receipt starts at the order's lines.
    pub fn render(&self, catalog: &Catalog<'_>) -> String {
        let mut lines = Vec::new();
        for child in self.root.sub_items() {
            render_lines(child, catalog, 0, &mut lines);
        }
        lines.join("\n")
    }

    /// Writes the rendered text verbatim, creating the parent directory
    /// if it does not exist yet.
    pub fn save_to_file(&self, path: &Path, catalog: &Catalog<'_>) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::ReceiptDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, self.render(catalog)).map_err(|source| StoreError::ReceiptWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Wrote receipt file");
        Ok(())
    }

    /// Walks the entire tree, root included, depth first, and hands every
    /// stock draw to `apply` exactly once in traversal order.
    ///
    /// There is no atomicity across nodes: if draw `k` fails to persist,
    /// draws `1..k` have already been persisted and stand.
    pub fn process_sale<F>(&self, mut apply: F)
    where
        F: FnMut(Consumption),
    {
        consume_tree(self.root, &mut apply);
    }
}

fn render_lines(item: &dyn LineItem, catalog: &Catalog<'_>, depth: usize, lines: &mut Vec<String>) {
    let total = total_price(item, catalog);
    let price_text = if total.is_zero() {
        String::new()
    } else {
        total.to_decimal_string()
    };

    let indent = depth * 2;
    let name_width = ITEM_WIDTH.saturating_sub(indent);
    let line = format!(
        "{:indent$}{:<name_width$.name_width$}{:>price_width$}",
        "",
        item.name(catalog),
        price_text,
        indent = indent,
        name_width = name_width,
        price_width = PRICE_WIDTH,
    );
    lines.push(line.trim_end().to_string());

    for child in item.sub_items() {
        render_lines(child, catalog, depth + 1, lines);
    }
}

fn consume_tree(item: &dyn LineItem, apply: &mut dyn FnMut(Consumption)) {
    if let Some(consumption) = item.consumption() {
        apply(consumption);
    }
    for child in item.sub_items() {
        consume_tree(child, apply);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
