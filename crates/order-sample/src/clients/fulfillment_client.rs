//! # Fulfillment Client
//!
//! Accepts every order and numbers them sequentially.
use async_trait::async_trait;
use order_placement::model::{Order, OrderConfirmation, OrderId};
use order_placement::ports::FulfillmentProvider;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{info, instrument};

/// Assigns order ids from an atomic counter starting at 1 and order numbers of
/// the form `ORD-000001`. The confirmation echoes the order's customer id.
#[derive(Debug)]
pub struct SequentialFulfillmentClient {
    next_order_id: AtomicU32,
}

impl Default for SequentialFulfillmentClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialFulfillmentClient {
    pub fn new() -> Self {
        Self {
            next_order_id: AtomicU32::new(1),
        }
    }

    /// Number of orders fulfilled so far.
    pub fn fulfilled(&self) -> u32 {
        self.next_order_id.load(Ordering::SeqCst) - 1
    }
}

#[async_trait]
impl FulfillmentProvider for SequentialFulfillmentClient {
    #[instrument(skip(self, order), fields(customer_id = %order.customer_id))]
    async fn fulfill(&self, order: &Order) -> OrderConfirmation {
        let id = self.next_order_id.fetch_add(1, Ordering::SeqCst);
        let confirmation = OrderConfirmation {
            order_id: OrderId(id),
            order_number: format!("ORD-{:06}", id),
            customer_id: order.customer_id,
        };
        info!(order_number = %confirmation.order_number, "Order accepted for fulfillment");
        confirmation
    }
}
