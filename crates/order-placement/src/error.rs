//! Error types for order placement.

use thiserror::Error;

/// A single reason an order was refused.
///
/// The `Display` output of each variant is the human-readable reason string
/// handed back to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// The same SKU appears on more than one order line.
    #[error("Product sku '{0}' is not unique in the order.")]
    DuplicateSku(String),

    /// The availability check for the SKU came back negative.
    #[error("There is not enough stock available for the product {0} to complete the order")]
    InsufficientStock(String),

    /// The customer directory has no entry for the order's customer.
    #[error("Customer not found")]
    CustomerNotFound,

    /// The tax lookup returned nothing usable for the customer's location.
    #[error("Tax Entry for the specified Postal Code: {postal_code} and Country: {country} was invalid")]
    InvalidTaxEntry { postal_code: String, country: String },

    /// The net or gross total does not fit in a `Decimal`.
    #[error("The order total is too large to be computed")]
    TotalOverflow,
}

/// Raised when an order fails validation.
///
/// Always carries at least one [`Rejection`], in the order the checks ran.
/// The `Display` form is every reason joined by a newline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", join_reasons(.rejections))]
pub struct OrderPlacementValidationError {
    rejections: Vec<Rejection>,
}

fn join_reasons(rejections: &[Rejection]) -> String {
    rejections
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl OrderPlacementValidationError {
    /// Builds the error, or `None` when there is nothing to reject.
    pub fn from_rejections(rejections: Vec<Rejection>) -> Option<Self> {
        if rejections.is_empty() {
            None
        } else {
            Some(Self { rejections })
        }
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// The human-readable reason strings, in check order.
    pub fn reasons(&self) -> Vec<String> {
        self.rejections.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejections_build_no_error() {
        assert!(OrderPlacementValidationError::from_rejections(Vec::new()).is_none());
    }

    #[test]
    fn test_reason_strings() {
        let err = OrderPlacementValidationError::from_rejections(vec![
            Rejection::DuplicateSku("fredbob".to_string()),
            Rejection::InsufficientStock("Laptop".to_string()),
            Rejection::CustomerNotFound,
            Rejection::InvalidTaxEntry {
                postal_code: "12345".to_string(),
                country: "USA".to_string(),
            },
            Rejection::TotalOverflow,
        ])
        .unwrap();

        assert_eq!(
            err.reasons(),
            vec![
                "Product sku 'fredbob' is not unique in the order.",
                "There is not enough stock available for the product Laptop to complete the order",
                "Customer not found",
                "Tax Entry for the specified Postal Code: 12345 and Country: USA was invalid",
                "The order total is too large to be computed",
            ]
        );
    }

    #[test]
    fn test_display_joins_reasons_with_newlines() {
        let err = OrderPlacementValidationError::from_rejections(vec![
            Rejection::InsufficientStock("Tablet".to_string()),
            Rejection::CustomerNotFound,
        ])
        .unwrap();

        assert_eq!(
            err.to_string(),
            "There is not enough stock available for the product Tablet to complete the order\nCustomer not found"
        );
    }
}
