//! # Collaborator Ports
//!
//! One narrow capability trait per external collaborator. Each has a single
//! operation, is object safe (`#[async_trait]`), and is consumed by the
//! [`OrderPlacementService`](crate::service::OrderPlacementService) as an
//! `Arc<dyn Trait>`.
//!
//! Collaborators are treated as infallible: the only failure signals are the
//! `false` / `None` answers encoded in the return types. Production
//! implementations that talk to remote systems are expected to resolve their
//! own transport errors into those answers.
//!
//! For tests, every trait has an expectation-based double in [`crate::mock`].

use crate::model::{Customer, CustomerId, Order, OrderConfirmation, OrderId, TaxEntry};
use async_trait::async_trait;

/// Answers whether a product can currently be ordered.
#[async_trait]
pub trait ProductAvailability: Send + Sync {
    async fn is_in_stock(&self, sku: &str) -> bool;
}

/// Looks customers up by identifier.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Returns `None` when the customer is unknown.
    async fn get(&self, customer_id: CustomerId) -> Option<Customer>;
}

/// Resolves the tax entries applicable to a location.
#[async_trait]
pub trait TaxRateProvider: Send + Sync {
    /// Returns `None` when the location has no tax table.
    async fn tax_entries(&self, postal_code: &str, country: &str) -> Option<Vec<TaxEntry>>;
}

/// Hands a validated order over for fulfillment.
#[async_trait]
pub trait FulfillmentProvider: Send + Sync {
    async fn fulfill(&self, order: &Order) -> OrderConfirmation;
}

/// Sends the order confirmation notification. Fire-and-forget.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send_order_confirmation(&self, customer_id: CustomerId, order_id: OrderId);
}
