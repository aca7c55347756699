//! # Terminal Configuration
//!
//! Configuration for the register: where the catalog files live and where
//! receipts are written.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DELI_DATA_DIR=/srv/deli/data                                       │
//! │     DELI_RECEIPTS_DIR=/srv/deli/receipts                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/deli-pos/deli.toml (Linux)                               │
//! │     ~/Library/Application Support/com.deli.pos/deli.toml (macOS)       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     data/ next to the working directory, receipts/ likewise            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # deli.toml
//! [files]
//! data_dir = "data"
//! breads = "breads.csv"
//! toppings = "toppings.csv"
//! drinks = "drinks.csv"
//! extras = "extras.csv"
//! signatures = "signatures.csv"
//!
//! [receipts]
//! dir = "receipts"
//! ```
//!
//! File names under `[files]` are resolved relative to `data_dir` unless
//! they are absolute paths.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use deli_store::CatalogPaths;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while loading or validating the terminal configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A required value resolved to an empty string.
    #[error("config value {key} must not be empty")]
    EmptyValue { key: &'static str },
}

/// Convenience alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// File Settings
// =============================================================================

/// Where the catalog ledger files live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    /// Directory that relative file names below are resolved against.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Bread ledger file name.
    #[serde(default = "default_breads_file")]
    pub breads: String,

    /// Topping ledger file name.
    #[serde(default = "default_toppings_file")]
    pub toppings: String,

    /// Drink ledger file name.
    #[serde(default = "default_drinks_file")]
    pub drinks: String,

    /// Extra ledger file name.
    #[serde(default = "default_extras_file")]
    pub extras: String,

    /// Signature sandwich listing file name.
    #[serde(default = "default_signatures_file")]
    pub signatures: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_breads_file() -> String {
    "breads.csv".to_string()
}

fn default_toppings_file() -> String {
    "toppings.csv".to_string()
}

fn default_drinks_file() -> String {
    "drinks.csv".to_string()
}

fn default_extras_file() -> String {
    "extras.csv".to_string()
}

impl Default for FileSettings {
    fn default() -> Self {
        FileSettings {
            data_dir: default_data_dir(),
            breads: default_breads_file(),
            toppings: default_toppings_file(),
            drinks: default_drinks_file(),
            extras: default_extras_file(),
            signatures: default_signatures_file(),
        }
    }
}

fn default_signatures_file() -> String {
    "signatures.csv".to_string()
}

// =============================================================================
// Receipt Settings
// =============================================================================

/// Where checkout receipts are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptSettings {
    /// Directory receipts are saved into. Created on first checkout.
    #[serde(default = "default_receipts_dir")]
    pub dir: PathBuf,
}

fn default_receipts_dir() -> PathBuf {
    PathBuf::from("receipts")
}

impl Default for ReceiptSettings {
    fn default() -> Self {
        ReceiptSettings {
            dir: default_receipts_dir(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete terminal configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Catalog file locations.
    #[serde(default)]
    pub files: FileSettings,

    /// Receipt output settings.
    #[serde(default)]
    pub receipts: ReceiptSettings,
}

impl ShopConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (deli.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        // Try to load from config file
        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(path = %path.display(), "Loading shop config from file");
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    ConfigError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?;
            } else {
                debug!(path = %path.display(), "Config file not found, using defaults");
            }
        }

        // Override with environment variables
        config.apply_env_overrides();

        // Validate the configuration
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load shop config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.files.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue {
                key: "files.data_dir",
            });
        }
        if self.files.breads.is_empty() {
            return Err(ConfigError::EmptyValue {
                key: "files.breads",
            });
        }
        if self.files.toppings.is_empty() {
            return Err(ConfigError::EmptyValue {
                key: "files.toppings",
            });
        }
        if self.files.drinks.is_empty() {
            return Err(ConfigError::EmptyValue {
                key: "files.drinks",
            });
        }
        if self.files.extras.is_empty() {
            return Err(ConfigError::EmptyValue {
                key: "files.extras",
            });
        }
        if self.files.signatures.is_empty() {
            return Err(ConfigError::EmptyValue {
                key: "files.signatures",
            });
        }
        if self.receipts.dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue {
                key: "receipts.dir",
            });
        }
        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("DELI_DATA_DIR") {
            debug!(dir = %dir, "Overriding data directory from environment");
            self.files.data_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("DELI_RECEIPTS_DIR") {
            debug!(dir = %dir, "Overriding receipts directory from environment");
            self.receipts.dir = PathBuf::from(dir);
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "deli", "pos")
            .map(|dirs| dirs.config_dir().join("deli.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Resolves the five catalog file locations.
    pub fn catalog_paths(&self) -> CatalogPaths {
        CatalogPaths {
            breads: self.resolve(&self.files.breads),
            toppings: self.resolve(&self.files.toppings),
            drinks: self.resolve(&self.files.drinks),
            extras: self.resolve(&self.files.extras),
            signatures: self.resolve(&self.files.signatures),
        }
    }

    /// Returns the directory receipts are written into.
    pub fn receipts_dir(&self) -> &Path {
        &self.receipts.dir
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.files.data_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.files.data_dir, PathBuf::from("data"));
        assert_eq!(config.files.breads, "breads.csv");
        assert_eq!(config.files.signatures, "signatures.csv");
        assert_eq!(config.receipts.dir, PathBuf::from("receipts"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_paths_resolve_against_data_dir() {
        let mut config = ShopConfig::default();
        config.files.data_dir = PathBuf::from("menu");

        let paths = config.catalog_paths();
        assert_eq!(paths.breads, PathBuf::from("menu/breads.csv"));
        assert_eq!(paths.toppings, PathBuf::from("menu/toppings.csv"));
        assert_eq!(paths.drinks, PathBuf::from("menu/drinks.csv"));
        assert_eq!(paths.extras, PathBuf::from("menu/extras.csv"));
        assert_eq!(paths.signatures, PathBuf::from("menu/signatures.csv"));
    }

    #[test]
    fn test_catalog_paths_keep_absolute_names() {
        let mut config = ShopConfig::default();
        config.files.breads = "/srv/deli/breads.csv".to_string();

        let paths = config.catalog_paths();
        assert_eq!(paths.breads, PathBuf::from("/srv/deli/breads.csv"));
        // Relative names still resolve against data_dir
        assert_eq!(paths.drinks, PathBuf::from("data/drinks.csv"));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: ShopConfig = toml::from_str("[files]\ndata_dir = \"menu\"\n").unwrap();
        assert_eq!(config.files.data_dir, PathBuf::from("menu"));
        assert_eq!(config.files.breads, "breads.csv");
        assert_eq!(config.receipts.dir, PathBuf::from("receipts"));
    }

    #[test]
    fn test_validation_rejects_empty_values() {
        let mut config = ShopConfig::default();
        config.files.breads = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyValue {
                key: "files.breads"
            })
        ));

        let mut config = ShopConfig::default();
        config.files.data_dir = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyValue {
                key: "files.data_dir"
            })
        ));
    }

    #[test]
    fn test_toml_serialization() {
        let config = ShopConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[files]"));
        assert!(toml_str.contains("[receipts]"));

        let parsed: ShopConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.files.breads, config.files.breads);
        assert_eq!(parsed.receipts.dir, config.receipts.dir);
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deli.toml");
        std::fs::write(&path, "[files]\ndata_dir = \"menu\"\n").unwrap();

        let config = ShopConfig::load(Some(path)).unwrap();
        assert_eq!(config.files.data_dir, PathBuf::from("menu"));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deli.toml");
        std::fs::write(&path, "[files\ndata_dir = ").unwrap();

        assert!(matches!(
            ShopConfig::load(Some(path)),
            Err(ConfigError::Parse { .. })
        ));
    }
}
