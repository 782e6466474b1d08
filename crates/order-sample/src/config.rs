//! # Sample Configuration
//!
//! Settings come from the environment (a `.env` file is honored, see
//! [`lifecycle::setup_environment`](crate::lifecycle::setup_environment)):
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `ORDER_SAMPLE_SEED` | Path to a JSON [`Seed`] file | built-in [`Seed::default`] |
//! | `RUST_LOG` | Log filter | off |

use crate::clients::TaxTable;
use order_placement::model::{Customer, CustomerId, TaxEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The seed file could not be read.
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid seed JSON.
    #[error("Invalid seed file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SampleConfig {
    pub seed_path: Option<PathBuf>,
}

impl SampleConfig {
    pub fn from_env() -> Self {
        Self {
            seed_path: std::env::var("ORDER_SAMPLE_SEED").ok().map(PathBuf::from),
        }
    }

    /// Loads the configured seed, falling back to the built-in one.
    pub fn load_seed(&self) -> Result<Seed, ConfigError> {
        match &self.seed_path {
            Some(path) => Seed::from_file(path),
            None => Ok(Seed::default()),
        }
    }
}

/// Stock level of one SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub sku: String,
    pub quantity: u32,
}

/// Initial data for the in-memory collaborators.
///
/// ```json
/// {
///   "customers": [{ "customer_id": 30, "postal_code": "12345", "country": "USA" }],
///   "stock": [{ "sku": "Laptop", "quantity": 10 }],
///   "tax_tables": [{
///     "postal_code": "12345",
///     "country": "USA",
///     "entries": [{ "description": "Sales tax", "rate": "1.08" }]
///   }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub stock: Vec<StockLevel>,
    #[serde(default)]
    pub tax_tables: Vec<TaxTable>,
}

impl Seed {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Seed {
    /// Two customers (one without a tax table) and three products (one sold out).
    fn default() -> Self {
        Self {
            customers: vec![
                Customer::new(CustomerId(30), "12345", "USA"),
                Customer::new(CustomerId(42), "99999", "NZ"),
            ],
            stock: vec![
                StockLevel { sku: "Laptop".to_string(), quantity: 10 },
                StockLevel { sku: "Tablet".to_string(), quantity: 25 },
                StockLevel { sku: "Phone".to_string(), quantity: 0 },
            ],
            tax_tables: vec![TaxTable {
                postal_code: "12345".to_string(),
                country: "USA".to_string(),
                entries: vec![TaxEntry::new("Sales tax", Decimal::new(108, 2))],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_path_uses_default_seed() {
        let seed = SampleConfig::default().load_seed().unwrap();
        assert_eq!(seed, Seed::default());
    }

    #[test]
    fn test_seed_file_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "customers": [{{ "customer_id": 7, "postal_code": "10115", "country": "DE" }}],
                "stock": [{{ "sku": "Kettle", "quantity": 4 }}],
                "tax_tables": [{{
                    "postal_code": "10115",
                    "country": "DE",
                    "entries": [{{ "description": "VAT", "rate": "1.19" }}]
                }}]
            }}"#
        )
        .unwrap();

        let config = SampleConfig {
            seed_path: Some(file.path().to_path_buf()),
        };
        let seed = config.load_seed().unwrap();

        assert_eq!(seed.customers, vec![Customer::new(CustomerId(7), "10115", "DE")]);
        assert_eq!(seed.stock[0].quantity, 4);
        assert_eq!(seed.tax_tables[0].entries[0].rate, Decimal::new(119, 2));
    }

    #[test]
    fn test_unreadable_and_invalid_seeds_are_reported() {
        let missing = SampleConfig {
            seed_path: Some(PathBuf::from("/nonexistent/seed.json")),
        };
        assert!(matches!(missing.load_seed(), Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let invalid = SampleConfig {
            seed_path: Some(file.path().to_path_buf()),
        };
        assert!(matches!(invalid.load_seed(), Err(ConfigError::Parse { .. })));
    }
}
