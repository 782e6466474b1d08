use crate::model::{CustomerId, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Type-safe identifier for Orders, assigned by the fulfillment collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A single (product, quantity) line within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: Product,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Unit price multiplied by quantity, or `None` on overflow.
    pub fn line_total(&self) -> Option<Decimal> {
        self.product.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Represents a customer order awaiting placement.
///
/// An `Order` is built by the caller and only read by the
/// [`OrderPlacementService`](crate::service::OrderPlacementService).
///
/// See [`OrderItem`] for the (product, quantity) lines it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub customer_id: CustomerId,
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `customer_id` - ID of the customer placing the order
    /// * `order_items` - Ordered lines of the order
    pub fn new(customer_id: impl Into<CustomerId>, order_items: Vec<OrderItem>) -> Self {
        Self {
            customer_id: customer_id.into(),
            order_items,
        }
    }

    /// Sum of every line total, or `None` if any step overflows.
    pub fn net_total(&self) -> Option<Decimal> {
        self.order_items
            .iter()
            .try_fold(Decimal::ZERO, |net, item| net.checked_add(item.line_total()?))
    }

    /// SKUs that appear on more than one line, in order of first appearance.
    pub fn duplicate_skus(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for item in &self.order_items {
            *counts.entry(item.product.sku.as_str()).or_default() += 1;
        }

        let mut duplicates: Vec<&str> = Vec::new();
        for item in &self.order_items {
            let sku = item.product.sku.as_str();
            if counts.get(sku).is_some_and(|&count| count > 1) && !duplicates.contains(&sku) {
                duplicates.push(sku);
            }
        }
        duplicates
    }
}

/// The fulfillment collaborator's acknowledgment of an order.
///
/// The `customer_id` here is whatever the collaborator reports and is not
/// required to match [`Order::customer_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub order_number: String,
    pub customer_id: CustomerId,
}
