//! # Email Client
//!
//! Stands in for a mail gateway: logs every confirmation and keeps a record of
//! what was sent.
use async_trait::async_trait;
use order_placement::model::{CustomerId, OrderId};
use order_placement::ports::NotificationSender;
use std::sync::{Mutex, PoisonError};
use tracing::{info, instrument};

#[derive(Debug, Default)]
pub struct RecordingEmailClient {
    sent: Mutex<Vec<(CustomerId, OrderId)>>,
}

impl RecordingEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(customer_id, order_id)` confirmed so far, oldest first.
    pub fn sent(&self) -> Vec<(CustomerId, OrderId)> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingEmailClient {
    #[instrument(skip(self))]
    async fn send_order_confirmation(&self, customer_id: CustomerId, order_id: OrderId) {
        info!(%customer_id, %order_id, "Sending order confirmation email");
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((customer_id, order_id));
    }
}
