//! # Starter Catalog Generator
//!
//! Writes a ready-to-sell set of catalog files so a fresh checkout can
//! open the shop without hand-editing ledgers.
//!
//! ## Usage
//! ```bash
//! # Seed ./data with the default menu
//! cargo run -p deli-store --bin seed
//!
//! # Seed somewhere else
//! cargo run -p deli-store --bin seed -- --data-dir /var/lib/deli
//!
//! # Start over, overwriting whatever is there
//! cargo run -p deli-store --bin seed -- --force
//! ```
//!
//! ## Generated Files
//! - `breads.csv` - four breads
//! - `toppings.csv` - meats, cheeses, vegetables, sauces
//! - `drinks.csv` - fountain drinks and bottles, priced per size
//! - `extras.csv` - sides with a flat price
//! - `signatures.csv` - the house sandwiches, resolvable against the above

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use deli_core::catalog::{BreadEntry, DrinkEntry, ExtraEntry, ToppingEntry};
use deli_core::money::Money;
use deli_store::record::CatalogRecord;
use deli_store::shop::{CatalogPaths, ShopInventory};

/// stock, name
const BREADS: &[(i64, &str)] = &[
    (30, "White"),
    (30, "Wheat"),
    (20, "Rye"),
    (15, "Sourdough"),
];

/// stock, normal price per size (cents), extra price per size (cents),
/// category, name
const TOPPINGS: &[(i64, [i64; 3], [i64; 3], &str, &str)] = &[
    // Meats
    (40, [100, 200, 300], [50, 100, 150], "meats", "Bacon"),
    (40, [100, 200, 300], [50, 100, 150], "meats", "Ham"),
    (35, [100, 200, 300], [50, 100, 150], "meats", "Salami"),
    (30, [100, 200, 300], [50, 100, 150], "meats", "Roast Beef"),
    (30, [100, 200, 300], [50, 100, 150], "meats", "Chicken"),
    (25, [100, 200, 300], [50, 100, 150], "meats", "Steak"),
    // Cheeses
    (50, [75, 150, 225], [30, 60, 90], "cheese", "American"),
    (45, [75, 150, 225], [30, 60, 90], "cheese", "Provolone"),
    (45, [75, 150, 225], [30, 60, 90], "cheese", "Cheddar"),
    (40, [75, 150, 225], [30, 60, 90], "cheese", "Swiss"),
    // Vegetables ride along free, extra serving included
    (60, [0, 0, 0], [0, 0, 0], "vegetables", "Lettuce"),
    (60, [0, 0, 0], [0, 0, 0], "vegetables", "Tomato"),
    (60, [0, 0, 0], [0, 0, 0], "vegetables", "Onions"),
    (50, [0, 0, 0], [0, 0, 0], "vegetables", "Pickles"),
    (50, [0, 0, 0], [0, 0, 0], "vegetables", "Peppers"),
    (50, [0, 0, 0], [0, 0, 0], "vegetables", "Cucumbers"),
    (40, [0, 0, 0], [0, 0, 0], "vegetables", "Jalapenos"),
    (40, [0, 0, 0], [0, 0, 0], "vegetables", "Mushrooms"),
    // Sauces
    (70, [0, 0, 0], [0, 0, 0], "sauces", "Mayo"),
    (70, [0, 0, 0], [0, 0, 0], "sauces", "Mustard"),
    (60, [0, 0, 0], [0, 0, 0], "sauces", "Ranch"),
    (60, [0, 0, 0], [0, 0, 0], "sauces", "Vinaigrette"),
    (50, [0, 0, 0], [0, 0, 0], "sauces", "Thousand Islands"),
];

/// stock, price per size (cents), name
const DRINKS: &[(i64, [i64; 3], &str)] = &[
    (60, [100, 150, 200], "Cola"),
    (60, [100, 150, 200], "Diet Cola"),
    (50, [100, 150, 200], "Lemon-Lime Soda"),
    (40, [100, 150, 200], "Root Beer"),
    (40, [125, 175, 225], "Sweet Tea"),
    (40, [125, 175, 225], "Lemonade"),
    (50, [100, 125, 150], "Bottled Water"),
];

/// stock, price (cents), name
const EXTRAS: &[(i64, i64, &str)] = &[
    (50, 150, "Chips"),
    (40, 100, "Cookie"),
    (30, 175, "Brownie"),
    (40, 75, "Pickle Spear"),
    (30, 125, "Apple Slices"),
];

/// Every bread and topping name here must exist in the tables above;
/// the shop refuses to open on an unresolvable signature.
const SIGNATURES: &[&str] = &[
    "BLT|White|true|Bacon|Lettuce|Tomato|Mayo",
    "Philly Cheese Steak|White|true|Steak|American|Onions|Peppers|Mushrooms",
    "Veggie Delight|Wheat|false|Provolone|Lettuce|Tomato|Onions|Peppers|Cucumbers",
];

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut data_dir = String::from("./data");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => {
                force = true;
            }
            "--help" | "-h" => {
                println!("Deli POS Starter Catalog Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <PATH>  Directory for catalog files (default: ./data)");
                println!("  -f, --force            Overwrite existing catalog files");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Deli POS Starter Catalog Generator");
    println!("=====================================");
    println!("Data dir: {}", data_dir);
    println!();

    let dir = Path::new(&data_dir);
    fs::create_dir_all(dir)?;
    let paths = CatalogPaths::in_dir(dir);

    // Refuse to clobber a live shop unless asked to.
    let existing: Vec<&Path> = [
        paths.breads.as_path(),
        paths.toppings.as_path(),
        paths.drinks.as_path(),
        paths.extras.as_path(),
        paths.signatures.as_path(),
    ]
    .into_iter()
    .filter(|path| path.exists())
    .collect();

    if !existing.is_empty() && !force {
        println!("⚠ Catalog files already exist:");
        for path in existing {
            println!("    {}", path.display());
        }
        println!("  Skipping seed to avoid clobbering live stock counts.");
        println!("  Re-run with --force to overwrite.");
        return Ok(());
    }

    write_ledger(&paths.breads, &seed_breads())?;
    write_ledger(&paths.toppings, &seed_toppings())?;
    write_ledger(&paths.drinks, &seed_drinks())?;
    write_ledger(&paths.extras, &seed_extras())?;

    let mut signature_file = SIGNATURES.join("\n");
    signature_file.push('\n');
    fs::write(&paths.signatures, signature_file)?;
    println!(
        "✓ Wrote {} ({} signatures)",
        paths.signatures.display(),
        SIGNATURES.len()
    );

    // Prove the shop can actually open on what was written.
    println!();
    println!("Verifying catalog...");
    let shop = ShopInventory::open(&paths)?;
    let catalog = shop.catalog();
    println!(
        "  {} breads, {} toppings, {} drinks, {} extras",
        catalog.breads.len(),
        catalog.toppings.len(),
        catalog.drinks.len(),
        catalog.extras.len()
    );
    println!(
        "  {} signature sandwiches",
        shop.signature_book().signatures().len()
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Serializes entries through the same codec the ledgers save with, so
/// seeded files and rewritten files are byte-compatible.
fn write_ledger<E: CatalogRecord>(path: &Path, entries: &[E]) -> Result<(), Box<dyn Error>> {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{}|{}\n", entry.stock(), entry.write_payload()));
    }
    fs::write(path, out)?;
    println!("✓ Wrote {} ({} entries)", path.display(), entries.len());
    Ok(())
}

fn seed_breads() -> Vec<BreadEntry> {
    BREADS
        .iter()
        .map(|&(stock, name)| BreadEntry {
            name: name.to_string(),
            stock,
        })
        .collect()
}

fn seed_toppings() -> Vec<ToppingEntry> {
    TOPPINGS
        .iter()
        .map(|&(stock, prices, extra_prices, category, name)| ToppingEntry {
            name: name.to_string(),
            category: category.to_string(),
            prices: prices.map(Money::from_cents),
            extra_prices: extra_prices.map(Money::from_cents),
            stock,
        })
        .collect()
}

fn seed_drinks() -> Vec<DrinkEntry> {
    DRINKS
        .iter()
        .map(|&(stock, prices, name)| DrinkEntry {
            name: name.to_string(),
            prices: prices.map(Money::from_cents),
            stock,
        })
        .collect()
}

fn seed_extras() -> Vec<ExtraEntry> {
    EXTRAS
        .iter()
        .map(|&(stock, price, name)| ExtraEntry {
            name: name.to_string(),
            price: Money::from_cents(price),
            stock,
        })
        .collect()
}
