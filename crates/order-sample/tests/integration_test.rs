use order_placement::model::{CustomerId, Order, OrderId, OrderItem, Product};
use order_sample::config::Seed;
use order_sample::lifecycle::OrderSystem;
use rust_decimal::Decimal;

fn laptop_order(customer_id: u32) -> Order {
    Order::new(
        CustomerId(customer_id),
        vec![
            OrderItem::new(Product::new("Laptop", Decimal::from(1000)), 2),
            OrderItem::new(Product::new("Tablet", Decimal::from(400)), 2),
        ],
    )
}

/// Full end-to-end test with all in-memory clients.
#[tokio::test]
async fn test_full_order_system_integration() {
    let system = OrderSystem::new(Seed::default());

    let summary = system
        .place_order(&laptop_order(30))
        .await
        .expect("Failed to place order");

    assert_eq!(summary.order_id, OrderId(1));
    assert_eq!(summary.order_number, "ORD-000001");
    assert_eq!(summary.customer_id, CustomerId(30));
    assert_eq!(summary.net_total, Decimal::from(2800));
    assert_eq!(summary.total, Decimal::new(302400, 2));
    assert_eq!(summary.taxes.len(), 1);

    assert_eq!(system.fulfillment_client.fulfilled(), 1);
    assert_eq!(
        system.email_client.sent(),
        vec![(CustomerId(30), OrderId(1))]
    );
}

#[tokio::test]
async fn test_orders_are_numbered_sequentially() {
    let system = OrderSystem::new(Seed::default());

    let first = system.place_order(&laptop_order(30)).await.unwrap();
    let second = system.place_order(&laptop_order(30)).await.unwrap();

    assert_eq!(first.order_number, "ORD-000001");
    assert_eq!(second.order_number, "ORD-000002");
    assert_eq!(system.email_client.sent().len(), 2);
}

#[tokio::test]
async fn test_customer_without_tax_table_is_rejected() {
    let system = OrderSystem::new(Seed::default());

    let err = system.place_order(&laptop_order(42)).await.unwrap_err();

    assert_eq!(
        err.reasons(),
        vec!["Tax Entry for the specified Postal Code: 99999 and Country: NZ was invalid"]
    );
    assert_eq!(system.fulfillment_client.fulfilled(), 0);
    assert!(system.email_client.sent().is_empty());
}

#[tokio::test]
async fn test_rejection_reports_every_reason() {
    let system = OrderSystem::new(Seed::default());
    let order = Order::new(
        CustomerId(99),
        vec![
            OrderItem::new(Product::new("Phone", Decimal::from(300)), 1),
            OrderItem::new(Product::new("Laptop", Decimal::from(1000)), 1),
            OrderItem::new(Product::new("Phone", Decimal::from(300)), 1),
        ],
    );

    let err = system.place_order(&order).await.unwrap_err();

    assert_eq!(
        err.reasons(),
        vec![
            "Product sku 'Phone' is not unique in the order.",
            "There is not enough stock available for the product Phone to complete the order",
            "There is not enough stock available for the product Phone to complete the order",
            "Customer not found",
        ]
    );
    assert_eq!(system.fulfillment_client.fulfilled(), 0);
    assert!(system.email_client.sent().is_empty());

    // A rejected order leaves the system usable.
    assert!(system.place_order(&laptop_order(30)).await.is_ok());
    assert_eq!(system.fulfillment_client.fulfilled(), 1);
}

/// The rejected order placed by the sample binary.
#[tokio::test]
async fn test_out_of_stock_order_for_unknown_customer_lists_stock_first() {
    let system = OrderSystem::new(Seed::default());
    let order = Order::new(
        CustomerId(99),
        vec![OrderItem::new(Product::new("Phone", Decimal::from(300)), 1)],
    );

    let err = system.place_order(&order).await.unwrap_err();

    assert_eq!(
        err.reasons(),
        vec![
            "There is not enough stock available for the product Phone to complete the order",
            "Customer not found",
        ]
    );
}
