//! # Order Sample
//!
//! Places one order that passes validation and one that does not, logging both
//! outcomes.
//!
//! ```bash
//! RUST_LOG=info cargo run -p order-sample
//! ORDER_SAMPLE_SEED=./seed.json RUST_LOG=debug cargo run -p order-sample
//! ```

use order_placement::model::{CustomerId, Order, OrderItem, Product, ProductId};
use order_sample::config::SampleConfig;
use order_sample::lifecycle::{setup_environment, OrderSystem};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_environment();

    let config = SampleConfig::from_env();
    let seed = config.load_seed()?;
    info!(seed_path = ?config.seed_path, "Starting order sample");

    let system = OrderSystem::new(seed);

    let order = Order::new(
        CustomerId(30),
        vec![
            OrderItem::new(Product::new("Laptop", Decimal::from(1000)).with_id(ProductId(210)), 2),
            OrderItem::new(Product::new("Tablet", Decimal::from(400)).with_id(ProductId(370)), 2),
        ],
    );

    let span = tracing::info_span!("valid_order");
    match system.place_order(&order).instrument(span).await {
        Ok(summary) => {
            info!(order_number = %summary.order_number, "Order processed successfully");
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    // Unknown customer and a sold-out product: both reasons are reported.
    let order = Order::new(
        CustomerId(99),
        vec![OrderItem::new(Product::new("Phone", Decimal::from(300)), 1)],
    );

    let span = tracing::info_span!("invalid_order");
    match system.place_order(&order).instrument(span).await {
        Ok(summary) => info!(order_number = %summary.order_number, "Order processed successfully"),
        Err(e) => {
            for reason in e.reasons() {
                error!(%reason, "Order rejected");
            }
        }
    }

    info!(
        fulfilled = system.fulfillment_client.fulfilled(),
        emails = system.email_client.sent().len(),
        "Sample completed"
    );
    Ok(())
}
