//! In-memory implementations of the [`order_placement::ports`] traits.
//!
//! These back the sample [`OrderSystem`](crate::lifecycle::OrderSystem) and the
//! end-to-end tests. Each client is built once from seed data and is safe to
//! share behind an `Arc`.

pub mod customer_client;
pub mod email_client;
pub mod fulfillment_client;
pub mod product_client;
pub mod tax_client;

pub use customer_client::*;
pub use email_client::*;
pub use fulfillment_client::*;
pub use product_client::*;
pub use tax_client::*;
