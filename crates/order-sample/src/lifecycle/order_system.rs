use crate::clients::{
    InMemoryCustomerClient, InMemoryProductClient, InMemoryTaxClient, RecordingEmailClient,
    SequentialFulfillmentClient,
};
use crate::config::Seed;
use order_placement::model::{Order, OrderSummary};
use order_placement::{OrderPlacementService, OrderPlacementValidationError};
use std::sync::Arc;
use tracing::info;

/// The wired-up order placement system.
///
/// `OrderSystem` is responsible for:
/// - **Construction**: Building every in-memory client from a [`Seed`]
/// - **Dependency Wiring**: Injecting those clients into the [`OrderPlacementService`]
/// - **Inspection**: Keeping the clients reachable so their state can be checked
///
/// # Example
///
/// ```rust
/// use order_sample::config::Seed;
/// use order_sample::lifecycle::OrderSystem;
/// use order_placement::model::{CustomerId, Order, OrderItem, Product};
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() {
///     let system = OrderSystem::new(Seed::default());
///     let order = Order::new(
///         CustomerId(30),
///         vec![OrderItem::new(Product::new("Laptop", Decimal::from(1000)), 1)],
///     );
///
///     let summary = system.place_order(&order).await.unwrap();
///     assert_eq!(summary.order_number, "ORD-000001");
///     assert_eq!(system.email_client.sent().len(), 1);
/// }
/// ```
pub struct OrderSystem {
    /// The placement service, wired to the clients below
    pub service: OrderPlacementService,

    pub product_client: Arc<InMemoryProductClient>,
    pub customer_client: Arc<InMemoryCustomerClient>,
    pub tax_client: Arc<InMemoryTaxClient>,
    pub fulfillment_client: Arc<SequentialFulfillmentClient>,
    pub email_client: Arc<RecordingEmailClient>,
}

impl OrderSystem {
    /// Builds every client from `seed` and wires them into a new service.
    pub fn new(seed: Seed) -> Self {
        info!(
            customers = seed.customers.len(),
            products = seed.stock.len(),
            tax_tables = seed.tax_tables.len(),
            "Building order system"
        );

        let product_client = Arc::new(InMemoryProductClient::new(
            seed.stock.into_iter().map(|level| (level.sku, level.quantity)),
        ));
        let customer_client = Arc::new(InMemoryCustomerClient::new(seed.customers));
        let tax_client = Arc::new(InMemoryTaxClient::new(seed.tax_tables));
        let fulfillment_client = Arc::new(SequentialFulfillmentClient::new());
        let email_client = Arc::new(RecordingEmailClient::new());

        let service = OrderPlacementService::new(
            product_client.clone(),
            customer_client.clone(),
            tax_client.clone(),
            fulfillment_client.clone(),
            email_client.clone(),
        );

        Self {
            service,
            product_client,
            customer_client,
            tax_client,
            fulfillment_client,
            email_client,
        }
    }

    /// Places `order` through the wired service.
    pub async fn place_order(
        &self,
        order: &Order,
    ) -> Result<OrderSummary, OrderPlacementValidationError> {
        self.service.place_order(order).await
    }
}
