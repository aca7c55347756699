//! # Signature Sandwich Book
//!
//! House sandwiches, defined one per line and resolved against the bread
//! and topping ledgers when the shop opens:
//!
//! ```text
//! <name>|<bread name>|<toasted>|<topping name>|<topping name>|...
//! BLT|White|true|Bacon|Lettuce|Tomato|Mayo
//! ```
//!
//! A topping name listed a second time marks that occurrence as the extra
//! serving. Names that resolve to nothing are a fatal load error; a menu
//! offering a sandwich the kitchen cannot look up is worse than refusing
//! to open.
//!
//! Templates resolve at 4in. Picking one clones the template into the
//! order, where it can be resized and edited like any sandwich.

use std::fs;
use std::path::PathBuf;

use deli_core::catalog::{BreadEntry, ToppingEntry, ToppingId};
use deli_core::sandwich::{SandwichLine, SignatureSandwich};
use deli_core::size::SandwichSize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::ledger::InventoryLedger;

/// The signature sandwiches on offer, in file order.
#[derive(Debug)]
pub struct SignatureBook {
    sandwiches: Vec<SignatureSandwich>,
}

impl SignatureBook {
    /// Loads and resolves the signature file. Blank lines are skipped.
    ///
    /// Resolution goes through `all_items`, so a signature whose bread or
    /// topping happens to be out of stock still loads; stock is a sale-time
    /// concern, not a definition-time one.
    pub fn load(
        path: impl Into<PathBuf>,
        breads: &InventoryLedger<BreadEntry>,
        toppings: &InventoryLedger<ToppingEntry>,
    ) -> StoreResult<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| StoreError::ReadFailed {
            path: path.clone(),
            source,
        })?;

        let mut sandwiches = Vec::new();
        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('|').collect();
            if fields.len() < 3 {
                return Err(StoreError::bad_signature(
                    &path,
                    number + 1,
                    "expected name|bread|toasted with optional toppings",
                ));
            }
            let name = fields[0];
            let bread_name = fields[1];
            let toasted = fields[2].eq_ignore_ascii_case("true");

            let (bread_id, _) = breads
                .all_items()
                .find(|(_, entry)| entry.name == bread_name)
                .ok_or_else(|| StoreError::UnknownBread {
                    signature: name.to_string(),
                    bread: bread_name.to_string(),
                })?;

            let mut sandwich = SandwichLine::new(SandwichSize::FourInch, bread_id);
            sandwich.set_toasted(toasted);

            let mut seen: Vec<ToppingId> = Vec::new();
            for topping_name in &fields[3..] {
                let (topping_id, _) = toppings
                    .all_items()
                    .find(|(_, entry)| entry.name == *topping_name)
                    .ok_or_else(|| StoreError::UnknownTopping {
                        signature: name.to_string(),
                        topping: topping_name.to_string(),
                    })?;

                // Second listing of the same topping is the extra serving;
                // a third is a definition error and rejected below.
                let extra = seen.contains(&topping_id);
                sandwich
                    .add_topping(topping_id, extra)
                    .map_err(|edit_error| {
                        StoreError::bad_signature(
                            &path,
                            number + 1,
                            format!("topping {topping_name:?}: {edit_error}"),
                        )
                    })?;
                seen.push(topping_id);
            }

            sandwiches.push(SignatureSandwich::new(name, sandwich));
        }

        debug!(
            path = %path.display(),
            count = sandwiches.len(),
            "Loaded signature book"
        );
        Ok(SignatureBook { sandwiches })
    }

    /// The signatures in file order.
    pub fn signatures(&self) -> &[SignatureSandwich] {
        &self.sandwiches
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn test_ledgers(
        dir: &Path,
    ) -> (
        InventoryLedger<BreadEntry>,
        InventoryLedger<ToppingEntry>,
    ) {
        let breads = write_file(dir, "breads.csv", "10|White\n0|Wheat\n");
        let toppings = write_file(
            dir,
            "toppings.csv",
            "20|1.00|2.00|3.00|0.50|1.00|1.50|meats|Bacon\n\
             15|0.00|0.00|0.00|0.00|0.00|0.00|vegetables|Lettuce\n\
             0|0.00|0.00|0.00|0.00|0.00|0.00|vegetables|Tomato\n",
        );
        (
            InventoryLedger::load(breads).unwrap(),
            InventoryLedger::load(toppings).unwrap(),
        )
    }

    #[test]
    fn test_load_resolves_names() {
        let dir = TempDir::new().unwrap();
        let (breads, toppings) = test_ledgers(dir.path());
        let path = write_file(dir.path(), "signatures.csv", "BLT|White|true|Bacon|Lettuce|Tomato\n");

        let book = SignatureBook::load(path, &breads, &toppings).unwrap();
        assert_eq!(book.signatures().len(), 1);

        let blt = &book.signatures()[0];
        assert_eq!(blt.name(), "BLT");

        let sandwich = blt.sandwich();
        assert_eq!(sandwich.size(), SandwichSize::FourInch);
        assert!(sandwich.is_toasted());
        assert_eq!(sandwich.toppings().len(), 3);
    }

    #[test]
    fn test_out_of_stock_names_still_resolve() {
        let dir = TempDir::new().unwrap();
        let (breads, toppings) = test_ledgers(dir.path());
        // Wheat has stock 0 and Tomato has stock 0; both resolve anyway.
        let path = write_file(dir.path(), "signatures.csv", "Veggie|Wheat|false|Tomato|Lettuce\n");

        let book = SignatureBook::load(path, &breads, &toppings).unwrap();
        assert_eq!(book.signatures().len(), 1);
        assert!(!book.signatures()[0].sandwich().is_toasted());
    }

    #[test]
    fn test_duplicate_topping_becomes_extra() {
        let dir = TempDir::new().unwrap();
        let (breads, toppings) = test_ledgers(dir.path());
        let path = write_file(dir.path(), "signatures.csv", "Double Bacon|White|false|Bacon|Bacon\n");

        let book = SignatureBook::load(path, &breads, &toppings).unwrap();
        let sandwich = book.signatures()[0].sandwich();

        let flags: Vec<bool> = sandwich.toppings().iter().map(|t| t.is_extra()).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_third_listing_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (breads, toppings) = test_ledgers(dir.path());
        let path = write_file(
            dir.path(),
            "signatures.csv",
            "Triple Bacon|White|false|Bacon|Bacon|Bacon\n",
        );

        let result = SignatureBook::load(path, &breads, &toppings);
        assert!(matches!(
            result,
            Err(StoreError::BadSignature { line: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_names_are_fatal() {
        let dir = TempDir::new().unwrap();
        let (breads, toppings) = test_ledgers(dir.path());

        let bad_bread = write_file(dir.path(), "s1.csv", "Oops|Brioche|false\n");
        assert!(matches!(
            SignatureBook::load(bad_bread, &breads, &toppings),
            Err(StoreError::UnknownBread { .. })
        ));

        let bad_topping = write_file(dir.path(), "s2.csv", "Oops|White|false|Caviar\n");
        assert!(matches!(
            SignatureBook::load(bad_topping, &breads, &toppings),
            Err(StoreError::UnknownTopping { .. })
        ));
    }

    #[test]
    fn test_short_line_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (breads, toppings) = test_ledgers(dir.path());
        let path = write_file(dir.path(), "signatures.csv", "JustAName|White\n");

        assert!(matches!(
            SignatureBook::load(path, &breads, &toppings),
            Err(StoreError::BadSignature { line: 1, .. })
        ));
    }

    #[test]
    fn test_blank_lines_and_empty_book() {
        let dir = TempDir::new().unwrap();
        let (breads, toppings) = test_ledgers(dir.path());
        let path = write_file(dir.path(), "signatures.csv", "\n  \n");

        let book = SignatureBook::load(path, &breads, &toppings).unwrap();
        assert!(book.signatures().is_empty());
    }
}
