//! # Customer Client
//!
//! Serves customer records from memory.
use async_trait::async_trait;
use order_placement::model::{Customer, CustomerId};
use order_placement::ports::CustomerDirectory;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Customers keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerClient {
    customers: HashMap<CustomerId, Customer>,
}

impl InMemoryCustomerClient {
    pub fn new(customers: impl IntoIterator<Item = Customer>) -> Self {
        Self {
            customers: customers
                .into_iter()
                .map(|customer| (customer.customer_id, customer))
                .collect(),
        }
    }
}

#[async_trait]
impl CustomerDirectory for InMemoryCustomerClient {
    #[instrument(skip(self))]
    async fn get(&self, customer_id: CustomerId) -> Option<Customer> {
        let customer = self.customers.get(&customer_id).cloned();
        debug!(found = customer.is_some(), "Looked up customer");
        customer
    }
}
