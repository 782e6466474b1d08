use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe numeric identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product that can be placed on an order.
///
/// Products are owned by the caller; the service only reads the SKU (for the
/// stock check and uniqueness check) and the unit price (for the net total).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub price: Decimal,
    #[serde(default)]
    pub product_id: Option<ProductId>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `sku` - Stock-keeping identifier, also the key used for availability checks
    /// * `price` - Unit price
    pub fn new(sku: impl Into<String>, price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            price,
            product_id: None,
        }
    }

    /// Attaches the optional numeric identifier.
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.product_id = Some(id.into());
        self
    }
}
