//! # Product Client
//!
//! Answers availability from a fixed table of stock levels.
use async_trait::async_trait;
use order_placement::ports::ProductAvailability;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Stock levels keyed by SKU. A SKU is in stock when its level is above zero;
/// unknown SKUs are out of stock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductClient {
    stock: HashMap<String, u32>,
}

impl InMemoryProductClient {
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            stock: levels
                .into_iter()
                .map(|(sku, quantity)| (sku.into(), quantity))
                .collect(),
        }
    }

    /// Current stock level for a SKU, if it is known.
    pub fn stock_level(&self, sku: &str) -> Option<u32> {
        self.stock.get(sku).copied()
    }
}

#[async_trait]
impl ProductAvailability for InMemoryProductClient {
    #[instrument(skip(self))]
    async fn is_in_stock(&self, sku: &str) -> bool {
        let level = self.stock_level(sku).unwrap_or(0);
        debug!(level, "Checked stock");
        level > 0
    }
}
