//! # Order Placement
//!
//! Validates and places a customer order: checks product availability, looks up
//! the customer and the applicable taxes, computes the net and gross totals,
//! hands the order to a fulfillment collaborator and sends a confirmation
//! notification.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain data carried in and out of the service: [`Order`](model::Order),
//! [`Customer`](model::Customer), [`TaxEntry`](model::TaxEntry),
//! [`OrderSummary`](model::OrderSummary) and friends.
//!
//! ### 2. The Seams ([`ports`])
//! One single-method trait per external collaborator. The service only ever
//! talks to these traits, so any implementation (remote client, in-memory
//! table, test double) can be plugged in.
//!
//! ### 3. The Orchestration ([`service`])
//! [`OrderPlacementService::place_order`](service::OrderPlacementService::place_order)
//! runs every validation, computes the totals and drives the collaborators.
//!
//! ### 4. The Failure ([`error`])
//! A single error type, [`OrderPlacementValidationError`](error::OrderPlacementValidationError),
//! carrying the ordered list of [`Rejection`](error::Rejection)s.
//!
//! ### 5. The Doubles ([`mock`])
//! Expectation-based doubles for every port, for testing code built on the service.
//!
//! ## Example
//!
//! ```rust
//! use order_placement::mock::*;
//! use order_placement::model::*;
//! use order_placement::service::OrderPlacementService;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() {
//!     let products = MockProductAvailability::new();
//!     products.stub_is_in_stock(true);
//!     let customers = MockCustomerDirectory::new();
//!     customers.stub_get(Some(Customer::new(CustomerId(30), "12345", "USA")));
//!     let taxes = MockTaxRateProvider::new();
//!     taxes.stub_tax_entries(Some(vec![TaxEntry::new("sales", Decimal::new(12, 1))]));
//!     let fulfillment = MockFulfillmentProvider::new();
//!     fulfillment.stub_fulfill(OrderConfirmation {
//!         order_id: OrderId(123),
//!         order_number: "orderNum1".to_string(),
//!         customer_id: CustomerId(30),
//!     });
//!     let notifications = MockNotificationSender::new();
//!     notifications.stub_send_order_confirmation();
//!
//!     let service = OrderPlacementService::new(
//!         products.client(),
//!         customers.client(),
//!         taxes.client(),
//!         fulfillment.client(),
//!         notifications.client(),
//!     );
//!
//!     let order = Order::new(CustomerId(30), vec![OrderItem::new(Product::new("Laptop", Decimal::from(200)), 2)]);
//!     let summary = service.place_order(&order).await.unwrap();
//!
//!     assert_eq!(summary.net_total, Decimal::from(400));
//!     assert_eq!(summary.total, Decimal::from(480));
//! }
//! ```

pub mod error;
pub mod mock;
pub mod model;
pub mod ports;
pub mod service;

pub use error::{OrderPlacementValidationError, Rejection};
pub use service::OrderPlacementService;
