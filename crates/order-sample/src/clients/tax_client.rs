//! # Tax Client
//!
//! Serves tax tables keyed by postal code and country.
use async_trait::async_trait;
use order_placement::model::TaxEntry;
use order_placement::ports::TaxRateProvider;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// The tax entries that apply to one postal code in one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTable {
    pub postal_code: String,
    pub country: String,
    pub entries: Vec<TaxEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryTaxClient {
    tables: HashMap<(String, String), Vec<TaxEntry>>,
}

impl InMemoryTaxClient {
    pub fn new(tables: impl IntoIterator<Item = TaxTable>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(|table| ((table.postal_code, table.country), table.entries))
                .collect(),
        }
    }
}

#[async_trait]
impl TaxRateProvider for InMemoryTaxClient {
    #[instrument(skip(self))]
    async fn tax_entries(&self, postal_code: &str, country: &str) -> Option<Vec<TaxEntry>> {
        let entries = self
            .tables
            .get(&(postal_code.to_string(), country.to_string()))
            .cloned();
        debug!(entries = ?entries.as_ref().map(Vec::len), "Looked up tax table");
        entries
    }
}
