//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Placement**: `place_order` runs in a span carrying the customer id and
//!   item count; success is logged at `info` with the assigned order number,
//!   rejections at `warn` with every reason.
//! - **Collaborators**: each in-memory client call gets its own nested span.
//! - **Payloads**: the full order is logged once at `debug` on entry.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Placement outcomes only
//! RUST_LOG=info cargo run -p order-sample
//!
//! # Every collaborator call and the full order payload
//! RUST_LOG=debug cargo run -p order-sample
//!
//! # Filter to the service
//! RUST_LOG=order_placement=debug cargo run -p order-sample
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO place_order:fulfill: Order accepted for fulfillment order_number="ORD-000001" customer_id=customer_30
//! INFO place_order:send_order_confirmation: Sending order confirmation email customer_id=customer_30 order_id=order_1
//! INFO place_order: Order placed order_id=order_1 order_number=ORD-000001 total=3024.00 customer_id=customer_30 items=2
//! WARN place_order: Order rejected reasons=["There is not enough stock available for the product Phone to complete the order", "Customer not found"] customer_id=customer_99 items=1
//! ```

/// Initializes the global subscriber. `RUST_LOG` selects the verbosity.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans already name the operation
        .compact()
        .init();
}

/// Loads a `.env` file if present, then initializes tracing.
pub fn setup_environment() {
    // A missing .env file is fine; real environment variables still apply.
    let dotenv_loaded = dotenv::dotenv().is_ok();
    setup_tracing();
    ::tracing::debug!(dotenv_loaded, "Environment ready");
}
