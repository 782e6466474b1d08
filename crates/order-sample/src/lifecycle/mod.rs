//! # System Lifecycle & Wiring
//!
//! Builds the in-memory collaborators from a [`Seed`](crate::config::Seed),
//! injects them into an [`OrderPlacementService`](order_placement::OrderPlacementService),
//! and initializes logging.
//!
//! ## Dependency Injection
//!
//! The service only knows the port traits. [`OrderSystem`] is the one place
//! that decides which concrete client backs each port:
//!
//! ```rust,ignore
//! let service = OrderPlacementService::new(
//!     product_client.clone(),
//!     customer_client.clone(),
//!     tax_client.clone(),
//!     fulfillment_client.clone(),
//!     email_client.clone(),
//! );
//! ```
//!
//! The concrete clients stay reachable on the system so callers (and tests)
//! can inspect what happened, e.g. which confirmations were sent.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see its docs for `RUST_LOG` usage.

pub mod order_system;
pub mod tracing;

pub use self::order_system::*;
pub use self::tracing::*;
