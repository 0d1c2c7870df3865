//! Order model and wire types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// An order, owned by exactly one user
///
/// `total_amount` is always derived from quantity and unit price at the
/// last create/update; `user_name` is set by the server from the
/// authenticated identity. Field names are camelCase on the wire for
/// compatibility with existing clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned identifier, monotonic
    pub id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Derived: quantity × unit price
    pub total_amount: Decimal,
    /// Owner's email; never taken from client input
    pub user_name: String,
}

/// Client-supplied order fields for place and update
///
/// The id, owner, and total are never read from the client; anything
/// sent for them is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl OrderRequest {
    /// Check the order invariants
    ///
    /// Product name must be non-empty, quantity strictly positive, unit
    /// price non-negative.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.product_name.trim().is_empty() {
            return Err(ApiError::validation("Product name is required."));
        }
        if self.quantity <= 0 {
            return Err(ApiError::validation("Quantity must be greater than zero."));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(ApiError::validation("Unit price cannot be negative."));
        }
        Ok(())
    }

    /// Derived total, recomputed from the supplied values
    pub fn total_amount(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(product_name: &str, quantity: i32, unit_price: Decimal) -> OrderRequest {
        OrderRequest {
            product_name: product_name.to_string(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_total_is_quantity_times_unit_price() {
        let req = request("Widget", 3, Decimal::new(250, 2)); // 2.50
        assert_eq!(req.total_amount(), Decimal::new(750, 2)); // 7.50

        let req = request("Widget", 5, Decimal::new(250, 2));
        assert_eq!(req.total_amount(), Decimal::new(1250, 2)); // 12.50
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("Widget", 1, Decimal::ZERO).validate().is_ok());
        assert!(request("Widget", 3, Decimal::new(250, 2)).validate().is_ok());
    }

    #[test]
    fn test_empty_product_name_rejected() {
        assert!(request("", 3, Decimal::ONE).validate().is_err());
        assert!(request("   ", 3, Decimal::ONE).validate().is_err());
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        assert!(request("Widget", 0, Decimal::ONE).validate().is_err());
        assert!(request("Widget", -2, Decimal::ONE).validate().is_err());
    }

    #[test]
    fn test_negative_unit_price_rejected() {
        assert!(request("Widget", 1, Decimal::new(-1, 0)).validate().is_err());
    }

    #[test]
    fn test_order_wire_shape_is_camel_case() {
        let order = Order {
            id: 7,
            product_name: "Widget".to_string(),
            quantity: 3,
            unit_price: Decimal::new(250, 2),
            total_amount: Decimal::new(750, 2),
            user_name: "a@x.com".to_string(),
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["productName"], "Widget");
        assert_eq!(value["unitPrice"], 2.5);
        assert_eq!(value["totalAmount"], 7.5);
        assert_eq!(value["userName"], "a@x.com");
    }
}
