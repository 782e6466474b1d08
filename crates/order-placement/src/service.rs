//! # Order Placement Service
//!
//! Validates an [`Order`] against its collaborators, computes the totals,
//! forwards it for fulfillment and sends the confirmation notification.
//!
//! ## Validation
//!
//! Every check runs before anything is rejected, and the reasons are reported
//! together in this order:
//!
//! 1. Duplicate SKUs (one reason per repeated SKU)
//! 2. Stock, one availability check per order line using that line's SKU
//! 3. Customer lookup
//! 4. Tax lookup for the customer's postal code and country (skipped when the
//!    customer is unknown; an empty entry list counts as invalid)
//! 5. Totals that overflow `Decimal`
//!
//! If any reason was collected the call returns an
//! [`OrderPlacementValidationError`] and neither the fulfillment provider nor
//! the notification sender is invoked.
//!
//! ## Totals
//!
//! - `net_total` is the sum of `price * quantity` over all lines.
//! - `total` is the sum, over tax entries, of `rate * net_total`.

use crate::error::{OrderPlacementValidationError, Rejection};
use crate::model::{gross_total, Order, OrderSummary, TaxEntry};
use crate::ports::{
    CustomerDirectory, FulfillmentProvider, NotificationSender, ProductAvailability,
    TaxRateProvider,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Orchestrates order placement over five injected collaborators.
///
/// The service keeps no per-call state, so one instance can be shared and
/// reused for any number of placements.
#[derive(Clone)]
pub struct OrderPlacementService {
    products: Arc<dyn ProductAvailability>,
    customers: Arc<dyn CustomerDirectory>,
    taxes: Arc<dyn TaxRateProvider>,
    fulfillment: Arc<dyn FulfillmentProvider>,
    notifications: Arc<dyn NotificationSender>,
}

impl OrderPlacementService {
    pub fn new(
        products: Arc<dyn ProductAvailability>,
        customers: Arc<dyn CustomerDirectory>,
        taxes: Arc<dyn TaxRateProvider>,
        fulfillment: Arc<dyn FulfillmentProvider>,
        notifications: Arc<dyn NotificationSender>,
    ) -> Self {
        Self {
            products,
            customers,
            taxes,
            fulfillment,
            notifications,
        }
    }

    /// Places an order and returns its summary.
    ///
    /// Collaborators are called one at a time: availability checks, customer
    /// lookup, tax lookup, fulfillment, notification.
    ///
    /// # Errors
    ///
    /// Returns [`OrderPlacementValidationError`] carrying every collected
    /// [`Rejection`] when the order has duplicate SKUs, an out-of-stock line,
    /// an unknown customer, no usable tax entries, or totals too large to compute.
    #[instrument(skip(self, order), fields(customer_id = %order.customer_id, items = order.order_items.len()))]
    pub async fn place_order(
        &self,
        order: &Order,
    ) -> Result<OrderSummary, OrderPlacementValidationError> {
        debug!(?order, "place_order called");

        let mut rejections = order
            .duplicate_skus()
            .into_iter()
            .map(|sku| Rejection::DuplicateSku(sku.to_string()))
            .collect::<Vec<_>>();

        for item in &order.order_items {
            if !self.products.is_in_stock(&item.product.sku).await {
                debug!(sku = %item.product.sku, "Product out of stock");
                rejections.push(Rejection::InsufficientStock(item.product.sku.clone()));
            }
        }

        let mut taxes: Vec<TaxEntry> = Vec::new();
        match self.customers.get(order.customer_id).await {
            None => rejections.push(Rejection::CustomerNotFound),
            Some(customer) => {
                let entries = self
                    .taxes
                    .tax_entries(&customer.postal_code, &customer.country)
                    .await;
                match entries {
                    Some(entries) if !entries.is_empty() => taxes = entries,
                    _ => rejections.push(Rejection::InvalidTaxEntry {
                        postal_code: customer.postal_code,
                        country: customer.country,
                    }),
                }
            }
        }

        let totals = order
            .net_total()
            .and_then(|net_total| Some((net_total, gross_total(&taxes, net_total)?)));
        if totals.is_none() {
            rejections.push(Rejection::TotalOverflow);
        }

        if let Some(err) = OrderPlacementValidationError::from_rejections(rejections) {
            warn!(reasons = ?err.reasons(), "Order rejected");
            return Err(err);
        }

        // Overflow was rejected above.
        let (net_total, total) = totals.unwrap_or_default();
        debug!(%net_total, %total, tax_entries = taxes.len(), "Totals computed");

        let confirmation = self.fulfillment.fulfill(order).await;

        let summary = OrderSummary {
            order_id: confirmation.order_id,
            order_number: confirmation.order_number,
            customer_id: confirmation.customer_id,
            estimated_delivery_date: Utc::now(),
            net_total,
            total,
            taxes,
            order_items: order.order_items.clone(),
        };

        self.notifications
            .send_order_confirmation(summary.customer_id, summary.order_id)
            .await;

        info!(
            order_id = %summary.order_id,
            order_number = %summary.order_number,
            %total,
            "Order placed"
        );
        Ok(summary)
    }
}
