//! # Shop Assembly and Checkout
//!
//! [`ShopInventory`] owns the four ledgers and the signature book, hands
//! out the borrowed [`Catalog`] view the pricing layer works against, and
//! runs the two-phase checkout.
//!
//! ## Checkout Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout(order, receipts_dir)                                          │
//! │                                                                         │
//! │  Phase 1  save receipt file ──── fails? ──► Err, NOTHING consumed       │
//! │                │                                                        │
//! │                ▼ saved                                                  │
//! │  Phase 2  process_sale ── every stock draw routed to its ledger,        │
//! │                           each ledger persisting write-through.         │
//! │                           Failures here are logged, never raised;       │
//! │                           there is no rollback across draws.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Consumption only ever follows a successful save, so an aborted checkout
//! can simply be retried whole.

use std::path::{Path, PathBuf};

use deli_core::catalog::{BreadEntry, Catalog, DrinkEntry, EntryRef, ExtraEntry, ToppingEntry};
use deli_core::item::Consumption;
use deli_core::order::Order;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::ledger::InventoryLedger;
use crate::receipt::Receipt;
use crate::record::CatalogRecord;
use crate::signatures::SignatureBook;

// =============================================================================
// Catalog Paths
// =============================================================================

/// Locations of the five files a shop loads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub breads: PathBuf,
    pub toppings: PathBuf,
    pub drinks: PathBuf,
    pub extras: PathBuf,
    pub signatures: PathBuf,
}

impl CatalogPaths {
    /// The conventional file names, all under one data directory.
    pub fn in_dir(dir: &Path) -> Self {
        CatalogPaths {
            breads: dir.join("breads.csv"),
            toppings: dir.join("toppings.csv"),
            drinks: dir.join("drinks.csv"),
            extras: dir.join("extras.csv"),
            signatures: dir.join("signatures.csv"),
        }
    }
}

// =============================================================================
// Shop Inventory
// =============================================================================

/// The four ledgers plus the signature book, loaded once at startup.
///
/// Owns every catalog arena for the process lifetime. All stock mutation
/// funnels through [`ShopInventory::consume`], which keeps the
/// write-through discipline in exactly one place per category.
#[derive(Debug)]
pub struct ShopInventory {
    breads: InventoryLedger<BreadEntry>,
    toppings: InventoryLedger<ToppingEntry>,
    drinks: InventoryLedger<DrinkEntry>,
    extras: InventoryLedger<ExtraEntry>,
    signatures: SignatureBook,
}

impl ShopInventory {
    /// Loads all four ledgers and the signature book.
    ///
    /// Every category must have at least one in-stock entry; a shop that
    /// cannot sell a sandwich is not worth opening. An empty signature
    /// book is fine, signatures are a shortcut, not a requirement.
    pub fn open(paths: &CatalogPaths) -> StoreResult<Self> {
        let breads = InventoryLedger::load(&paths.breads)?;
        let toppings = InventoryLedger::load(&paths.toppings)?;
        let drinks = InventoryLedger::load(&paths.drinks)?;
        let extras = InventoryLedger::load(&paths.extras)?;

        require_stock(&breads)?;
        require_stock(&toppings)?;
        require_stock(&drinks)?;
        require_stock(&extras)?;

        let signatures = SignatureBook::load(&paths.signatures, &breads, &toppings)?;

        info!(
            breads = breads.entries().len(),
            toppings = toppings.entries().len(),
            drinks = drinks.entries().len(),
            extras = extras.entries().len(),
            signatures = signatures.signatures().len(),
            "Opened shop inventory"
        );

        Ok(ShopInventory {
            breads,
            toppings,
            drinks,
            extras,
            signatures,
        })
    }

    pub fn breads(&self) -> &InventoryLedger<BreadEntry> {
        &self.breads
    }

    pub fn toppings(&self) -> &InventoryLedger<ToppingEntry> {
        &self.toppings
    }

    pub fn drinks(&self) -> &InventoryLedger<DrinkEntry> {
        &self.drinks
    }

    pub fn extras(&self) -> &InventoryLedger<ExtraEntry> {
        &self.extras
    }

    pub fn signature_book(&self) -> &SignatureBook {
        &self.signatures
    }

    /// Borrowed view over all four arenas, for naming and pricing.
    pub fn catalog(&self) -> Catalog<'_> {
        Catalog {
            breads: self.breads.entries(),
            toppings: self.toppings.entries(),
            drinks: self.drinks.entries(),
            extras: self.extras.entries(),
        }
    }

    /// Routes one stock draw to the ledger that owns the entry.
    pub fn consume(&mut self, consumption: Consumption) {
        match consumption.entry {
            EntryRef::Bread(id) => self.breads.consume(id, consumption.units),
            EntryRef::Topping(id) => self.toppings.consume(id, consumption.units),
            EntryRef::Drink(id) => self.drinks.consume(id, consumption.units),
            EntryRef::Extra(id) => self.extras.consume(id, consumption.units),
        }
    }

    /// Checks the order out: receipt file first, stock second.
    ///
    /// Returns the path of the written receipt. If the save fails the
    /// error comes back with no stock consumed, and the whole checkout
    /// can be retried.
    pub fn checkout(&mut self, order: &Order, receipts_dir: &Path) -> StoreResult<PathBuf> {
        let receipt = Receipt::new(order);
        let path = receipts_dir.join(receipt.file_name());

        receipt.save_to_file(&path, &self.catalog())?;
        receipt.process_sale(|consumption| self.consume(consumption));

        info!(
            path = %path.display(),
            total = %receipt.price(&self.catalog()),
            "Checked out order"
        );
        Ok(path)
    }
}

fn require_stock<E: CatalogRecord>(ledger: &InventoryLedger<E>) -> StoreResult<()> {
    if ledger.has_in_stock() {
        Ok(())
    } else {
        Err(StoreError::EmptyCatalog {
            category: E::CATEGORY,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use deli_core::catalog::{BreadId, DrinkId, ExtraId, ToppingId};
    use deli_core::sandwich::SandwichLine;
    use deli_core::size::{DrinkSize, SandwichSize};
    use tempfile::TempDir;

    fn write_shop_files(dir: &Path) -> CatalogPaths {
        let paths = CatalogPaths::in_dir(dir);
        fs::write(&paths.breads, "10|Wheat\n8|White\n").unwrap();
        fs::write(
            &paths.toppings,
            "12|0.25|0.50|0.75|0.40|0.75|1.10|meats|Bacon\n\
             9|0.00|0.00|0.00|0.30|0.55|0.80|cheese|Cheddar\n",
        )
        .unwrap();
        fs::write(&paths.drinks, "6|1.00|1.25|1.50|Cola\n").unwrap();
        fs::write(&paths.extras, "5|1.50|Chips\n").unwrap();
        fs::write(&paths.signatures, "Bacon Melt|Wheat|true|Bacon|Cheddar\n").unwrap();
        paths
    }

    fn find_bread(shop: &ShopInventory, name: &str) -> BreadId {
        shop.breads()
            .items()
            .find(|(_, entry)| entry.name == name)
            .map(|(id, _)| id)
            .unwrap()
    }

    fn find_topping(shop: &ShopInventory, name: &str) -> ToppingId {
        shop.toppings()
            .items()
            .find(|(_, entry)| entry.name == name)
            .map(|(id, _)| id)
            .unwrap()
    }

    fn find_drink(shop: &ShopInventory, name: &str) -> DrinkId {
        shop.drinks()
            .items()
            .find(|(_, entry)| entry.name == name)
            .map(|(id, _)| id)
            .unwrap()
    }

    fn find_extra(shop: &ShopInventory, name: &str) -> ExtraId {
        shop.extras()
            .items()
            .find(|(_, entry)| entry.name == name)
            .map(|(id, _)| id)
            .unwrap()
    }

    /// 8in wheat sandwich, normal + extra Bacon, toasted, medium Cola.
    fn e2e_order(shop: &ShopInventory) -> Order {
        let mut sandwich = SandwichLine::new(SandwichSize::EightInch, find_bread(shop, "Wheat"));
        let bacon = find_topping(shop, "Bacon");
        sandwich.add_topping(bacon, false).unwrap();
        sandwich.add_topping(bacon, true).unwrap();
        sandwich.set_toasted(true);

        let mut order = Order::new();
        order.add_sandwich(sandwich);
        order.add_drink(find_drink(shop, "Cola"), DrinkSize::Medium);
        order
    }

    #[test]
    fn test_open_loads_everything() {
        let dir = TempDir::new().unwrap();
        let paths = write_shop_files(dir.path());

        let shop = ShopInventory::open(&paths).unwrap();
        let catalog = shop.catalog();
        assert_eq!(catalog.breads.len(), 2);
        assert_eq!(catalog.toppings.len(), 2);
        assert_eq!(catalog.drinks.len(), 1);
        assert_eq!(catalog.extras.len(), 1);
        assert_eq!(shop.signature_book().signatures().len(), 1);
    }

    #[test]
    fn test_open_rejects_category_with_nothing_in_stock() {
        let dir = TempDir::new().unwrap();
        let paths = write_shop_files(dir.path());
        // Both drink records load fine; neither can be sold.
        fs::write(
            &paths.drinks,
            "0|1.00|1.25|1.50|Cola\n-2|1.00|1.25|1.50|Root Beer\n",
        )
        .unwrap();

        let result = ShopInventory::open(&paths);
        assert!(matches!(
            result,
            Err(StoreError::EmptyCatalog { category: "drink" })
        ));
    }

    #[test]
    fn test_checkout_writes_receipt_then_consumes() {
        let dir = TempDir::new().unwrap();
        let paths = write_shop_files(dir.path());
        let mut shop = ShopInventory::open(&paths).unwrap();
        let order = e2e_order(&shop);

        let receipts_dir = dir.path().join("receipts");
        let receipt_path = shop.checkout(&order, &receipts_dir).unwrap();

        // Receipt exists and shows the tree.
        let text = fs::read_to_string(&receipt_path).unwrap();
        assert!(text.contains("8in Sandwich"));
        assert!(text.contains("  Extra Bacon"));
        assert!(text.contains("Medium Cola"));

        // 8in factor is 2: bread -2, bacon -(2+2), cola -2.
        assert_eq!(shop.catalog().bread(find_bread(&shop, "Wheat")).stock, 8);
        let bacon = shop
            .toppings()
            .all_items()
            .find(|(_, entry)| entry.name == "Bacon")
            .map(|(id, _)| id)
            .unwrap();
        assert_eq!(shop.catalog().topping(bacon).stock, 8);
        assert_eq!(shop.catalog().drink(find_drink(&shop, "Cola")).stock, 4);

        // Write-through: the decrements are already on disk.
        let breads_file = fs::read_to_string(&paths.breads).unwrap();
        assert_eq!(breads_file, "8|Wheat\n8|White\n");
        let drinks_file = fs::read_to_string(&paths.drinks).unwrap();
        assert_eq!(drinks_file, "4|1.00|1.25|1.50|Cola\n");
    }

    #[test]
    fn test_failed_receipt_save_consumes_nothing() {
        let dir = TempDir::new().unwrap();
        let paths = write_shop_files(dir.path());
        let mut shop = ShopInventory::open(&paths).unwrap();
        let order = e2e_order(&shop);

        // A file sits where the receipts directory should go, so the
        // save fails in phase one.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = shop.checkout(&order, &blocker.join("receipts"));
        assert!(matches!(result, Err(StoreError::ReceiptDir { .. })));

        // Phase two never ran: memory and disk both untouched.
        assert_eq!(shop.catalog().bread(find_bread(&shop, "Wheat")).stock, 10);
        let breads_file = fs::read_to_string(&paths.breads).unwrap();
        assert_eq!(breads_file, "10|Wheat\n8|White\n");
    }

    #[test]
    fn test_consume_routes_to_the_owning_ledger() {
        let dir = TempDir::new().unwrap();
        let paths = write_shop_files(dir.path());
        let mut shop = ShopInventory::open(&paths).unwrap();

        let chips = find_extra(&shop, "Chips");
        shop.consume(Consumption {
            entry: EntryRef::Extra(chips),
            units: 1,
        });

        assert_eq!(shop.catalog().extra(chips).stock, 4);
        // Nothing else moved.
        assert_eq!(shop.catalog().bread(find_bread(&shop, "Wheat")).stock, 10);
    }

    #[test]
    fn test_signature_resolves_against_live_ledgers() {
        let dir = TempDir::new().unwrap();
        let paths = write_shop_files(dir.path());
        let shop = ShopInventory::open(&paths).unwrap();

        let melt = &shop.signature_book().signatures()[0];
        assert_eq!(melt.name(), "Bacon Melt");

        let sandwich = melt.sandwich();
        let catalog = shop.catalog();
        assert_eq!(catalog.bread(sandwich.bread()).name, "Wheat");
        assert_eq!(sandwich.toppings().len(), 2);
    }
}
