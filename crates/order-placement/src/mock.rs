//! # Test Doubles
//!
//! One in-memory double per port in [`crate::ports`]. They let tests drive the
//! [`OrderPlacementService`](crate::service::OrderPlacementService) through every
//! branch without real collaborators and then assert on exactly which calls were
//! made.
//!
//! ## Expectations vs Stubs
//!
//! | API | Matches | Answers |
//! |-----|---------|---------|
//! | `expect_*(args).return_ok(value)` | the given arguments, once | `value` |
//! | `stub_*(value)` | any arguments, any number of times | `value` |
//!
//! Queued expectations are consumed first, in the order they were queued. Once
//! the queue is empty the stub (if any) answers. A call that matches neither
//! panics, as does an expectation whose arguments differ from the call.
//!
//! ## Example
//!
//! ```rust
//! use order_placement::mock::MockCustomerDirectory;
//! use order_placement::model::{Customer, CustomerId};
//! use order_placement::ports::CustomerDirectory;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCustomerDirectory::new();
//!     mock.expect_get(CustomerId(30))
//!         .return_ok(Some(Customer::new(CustomerId(30), "12345", "USA")));
//!
//!     let directory = mock.client();
//!     let customer = directory.get(CustomerId(30)).await;
//!
//!     assert_eq!(customer.unwrap().postal_code, "12345");
//!     assert_eq!(mock.calls(), vec![CustomerId(30)]);
//!     mock.verify(); // Ensures all expectations were met
//! }
//! ```

use crate::model::{Customer, CustomerId, Order, OrderConfirmation, OrderId, TaxEntry};
use crate::ports::{
    CustomerDirectory, FulfillmentProvider, NotificationSender, ProductAvailability,
    TaxRateProvider,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION QUEUE
// =============================================================================

/// A queued one-shot expectation.
struct Expectation<A, R> {
    args: A,
    response: R,
}

/// Shared state behind every double: queued expectations, the fallback stub
/// and the log of received calls.
struct Expectations<A, R> {
    queue: VecDeque<Expectation<A, R>>,
    stub: Option<R>,
    calls: Vec<A>,
}

impl<A, R> Default for Expectations<A, R> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            stub: None,
            calls: Vec::new(),
        }
    }
}

type SharedExpectations<A, R> = Arc<Mutex<Expectations<A, R>>>;

fn answer<A, R>(state: &SharedExpectations<A, R>, args: A) -> R
where
    A: PartialEq + Debug + Clone,
    R: Clone,
{
    let outcome = {
        let mut exps = state.lock().unwrap();
        exps.calls.push(args.clone());
        match exps.queue.pop_front() {
            Some(expectation) if expectation.args == args => Ok(expectation.response),
            Some(expectation) => Err(format!(
                "Unexpected request or expectation mismatch: expected {:?}, got {:?}",
                expectation.args, args
            )),
            None => exps
                .stub
                .clone()
                .ok_or_else(|| format!("Unexpected request with no expectation: {:?}", args)),
        }
    }; // Release lock before panicking so verify() still works

    match outcome {
        Ok(response) => response,
        Err(message) => panic!("{}", message),
    }
}

fn remaining<A, R>(state: &SharedExpectations<A, R>) -> usize {
    state.lock().unwrap().queue.len()
}

/// Builder returned by every `expect_*` method.
#[must_use = "an expectation is only queued once a response is given"]
pub struct ExpectationBuilder<A, R> {
    args: A,
    state: SharedExpectations<A, R>,
}

impl<A, R> ExpectationBuilder<A, R> {
    /// Queues the expectation with the response to return.
    pub fn return_ok(self, response: R) {
        let mut exps = self.state.lock().unwrap();
        exps.queue.push_back(Expectation {
            args: self.args,
            response,
        });
    }
}

impl<A> ExpectationBuilder<A, ()> {
    /// Queues an expectation for a call that returns nothing.
    pub fn acknowledge(self) {
        self.return_ok(())
    }
}

macro_rules! double_common {
    ($mock:ident, $args:ty, $response:ty) => {
        impl $mock {
            /// Creates a double with no expectations and no stub.
            pub fn new() -> Self {
                Self::default()
            }

            /// Returns a handle to pass to the service; it shares state with this mock.
            pub fn client(&self) -> Arc<$mock> {
                Arc::new(self.clone())
            }

            /// Every call received so far, in order.
            pub fn calls(&self) -> Vec<$args> {
                self.state.lock().unwrap().calls.clone()
            }

            /// Number of calls received so far.
            pub fn call_count(&self) -> usize {
                self.state.lock().unwrap().calls.len()
            }

            /// Verifies that all queued expectations were consumed.
            pub fn verify(&self) {
                let left = remaining(&self.state);
                if left != 0 {
                    panic!("Not all expectations were met. {} remaining", left);
                }
            }

            fn expect(&self, args: $args) -> ExpectationBuilder<$args, $response> {
                ExpectationBuilder {
                    args,
                    state: self.state.clone(),
                }
            }

            fn stub(&self, response: $response) {
                self.state.lock().unwrap().stub = Some(response);
            }
        }
    };
}

// =============================================================================
// DOUBLES
// =============================================================================

/// Double for [`ProductAvailability`]. Records each SKU checked.
#[derive(Clone, Default)]
pub struct MockProductAvailability {
    state: SharedExpectations<String, bool>,
}

double_common!(MockProductAvailability, String, bool);

impl MockProductAvailability {
    pub fn expect_is_in_stock(&self, sku: impl Into<String>) -> ExpectationBuilder<String, bool> {
        self.expect(sku.into())
    }

    /// Answers every otherwise unexpected check with `in_stock`.
    pub fn stub_is_in_stock(&self, in_stock: bool) {
        self.stub(in_stock)
    }
}

#[async_trait]
impl ProductAvailability for MockProductAvailability {
    async fn is_in_stock(&self, sku: &str) -> bool {
        answer(&self.state, sku.to_string())
    }
}

/// Double for [`CustomerDirectory`].
#[derive(Clone, Default)]
pub struct MockCustomerDirectory {
    state: SharedExpectations<CustomerId, Option<Customer>>,
}

double_common!(MockCustomerDirectory, CustomerId, Option<Customer>);

impl MockCustomerDirectory {
    pub fn expect_get(
        &self,
        customer_id: impl Into<CustomerId>,
    ) -> ExpectationBuilder<CustomerId, Option<Customer>> {
        self.expect(customer_id.into())
    }

    pub fn stub_get(&self, customer: Option<Customer>) {
        self.stub(customer)
    }
}

#[async_trait]
impl CustomerDirectory for MockCustomerDirectory {
    async fn get(&self, customer_id: CustomerId) -> Option<Customer> {
        answer(&self.state, customer_id)
    }
}

/// Double for [`TaxRateProvider`]. Calls are recorded as `(postal_code, country)`.
#[derive(Clone, Default)]
pub struct MockTaxRateProvider {
    state: SharedExpectations<(String, String), Option<Vec<TaxEntry>>>,
}

double_common!(MockTaxRateProvider, (String, String), Option<Vec<TaxEntry>>);

impl MockTaxRateProvider {
    pub fn expect_tax_entries(
        &self,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> ExpectationBuilder<(String, String), Option<Vec<TaxEntry>>> {
        self.expect((postal_code.into(), country.into()))
    }

    pub fn stub_tax_entries(&self, entries: Option<Vec<TaxEntry>>) {
        self.stub(entries)
    }
}

#[async_trait]
impl TaxRateProvider for MockTaxRateProvider {
    async fn tax_entries(&self, postal_code: &str, country: &str) -> Option<Vec<TaxEntry>> {
        answer(&self.state, (postal_code.to_string(), country.to_string()))
    }
}

/// Double for [`FulfillmentProvider`]. Records a copy of every order received.
#[derive(Clone, Default)]
pub struct MockFulfillmentProvider {
    state: SharedExpectations<Order, OrderConfirmation>,
}

double_common!(MockFulfillmentProvider, Order, OrderConfirmation);

impl MockFulfillmentProvider {
    pub fn expect_fulfill(&self, order: Order) -> ExpectationBuilder<Order, OrderConfirmation> {
        self.expect(order)
    }

    pub fn stub_fulfill(&self, confirmation: OrderConfirmation) {
        self.stub(confirmation)
    }
}

#[async_trait]
impl FulfillmentProvider for MockFulfillmentProvider {
    async fn fulfill(&self, order: &Order) -> OrderConfirmation {
        answer(&self.state, order.clone())
    }
}

/// Double for [`NotificationSender`]. Calls are recorded as `(customer_id, order_id)`.
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    state: SharedExpectations<(CustomerId, OrderId), ()>,
}

double_common!(MockNotificationSender, (CustomerId, OrderId), ());

impl MockNotificationSender {
    pub fn expect_send_order_confirmation(
        &self,
        customer_id: impl Into<CustomerId>,
        order_id: impl Into<OrderId>,
    ) -> ExpectationBuilder<(CustomerId, OrderId), ()> {
        self.expect((customer_id.into(), order_id.into()))
    }

    /// Accepts any number of notifications for any arguments.
    pub fn stub_send_order_confirmation(&self) {
        self.stub(())
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_order_confirmation(&self, customer_id: CustomerId, order_id: OrderId) {
        answer(&self.state, (customer_id, order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_expectations_consumed_in_order_then_stub() {
        let mock = MockProductAvailability::new();
        mock.expect_is_in_stock("Laptop").return_ok(false);
        mock.expect_is_in_stock("Tablet").return_ok(true);
        mock.stub_is_in_stock(true);

        let client = mock.client();
        assert!(!client.is_in_stock("Laptop").await);
        assert!(client.is_in_stock("Tablet").await);
        assert!(client.is_in_stock("Phone").await);

        assert_eq!(mock.calls(), vec!["Laptop", "Tablet", "Phone"]);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "expectation mismatch")]
    async fn test_argument_mismatch_panics() {
        let mock = MockCustomerDirectory::new();
        mock.expect_get(CustomerId(1)).return_ok(None);

        mock.client().get(CustomerId(2)).await;
    }

    #[tokio::test]
    #[should_panic(expected = "no expectation")]
    async fn test_unexpected_call_without_stub_panics() {
        let mock = MockNotificationSender::new();
        mock.client()
            .send_order_confirmation(CustomerId(1), OrderId(1))
            .await;
    }

    #[test]
    #[should_panic(expected = "1 remaining")]
    fn test_verify_reports_unconsumed_expectations() {
        let mock = MockTaxRateProvider::new();
        mock.expect_tax_entries("12345", "USA")
            .return_ok(Some(vec![TaxEntry::new("sales", Decimal::ONE)]));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatch_does_not_poison_call_log() {
        let mock = MockCustomerDirectory::new();
        mock.expect_get(CustomerId(1)).return_ok(None);

        let client = mock.client();
        let result = tokio::spawn(async move { client.get(CustomerId(2)).await }).await;

        assert!(result.is_err());
        assert_eq!(mock.calls(), vec![CustomerId(2)]);
        mock.verify();
    }
}
