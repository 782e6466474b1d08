use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// A customer as known to the [`CustomerDirectory`](crate::ports::CustomerDirectory).
///
/// Looked up, never owned, by the placement service. The postal code and
/// country select the applicable tax entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub postal_code: String,
    pub country: String,
}

impl Customer {
    pub fn new(
        customer_id: impl Into<CustomerId>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }
}
