//! # Deli POS Terminal
//!
//! Entry point for the register: wires logging, configuration, and the shop
//! inventory onto the stdin/stdout menu loop.
//!
//! ## Environment
//! - `DELI_CONFIG` points at an alternate config file
//! - `DELI_DATA_DIR` / `DELI_RECEIPTS_DIR` override the configured directories
//! - `RUST_LOG` adjusts the log filter
//!
//! Logs go to stderr; the menus own stdout.

mod config;
mod menu;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use deli_store::ShopInventory;

use crate::config::ShopConfig;
use crate::menu::Menu;

fn main() -> ExitCode {
    init_tracing();

    let config_path = std::env::var_os("DELI_CONFIG").map(PathBuf::from);
    let config = ShopConfig::load_or_default(config_path);
    info!(
        data_dir = %config.files.data_dir.display(),
        receipts_dir = %config.receipts_dir().display(),
        "Starting terminal"
    );

    let mut shop = match ShopInventory::open(&config.catalog_paths()) {
        Ok(shop) => shop,
        Err(error) => {
            eprintln!("Could not open the shop catalogs: {error}");
            eprintln!(
                "Seed a data directory first: cargo run -p deli-store --bin seed -- --data-dir {}",
                config.files.data_dir.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock());
    if let Err(error) = menu.run(&mut shop, config.receipts_dir()) {
        eprintln!("Terminal I/O failed: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,deli_core=debug,deli_store=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
