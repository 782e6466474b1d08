use crate::model::{CustomerId, OrderId, OrderItem, TaxEntry};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of a successful placement.
///
/// Identifiers come from the [`OrderConfirmation`](crate::model::OrderConfirmation),
/// totals and taxes from the service's own computation, and the items are the
/// original order's items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub order_number: String,
    pub customer_id: CustomerId,
    pub estimated_delivery_date: DateTime<Utc>,
    pub net_total: Decimal,
    pub total: Decimal,
    pub taxes: Vec<TaxEntry>,
    pub order_items: Vec<OrderItem>,
}
