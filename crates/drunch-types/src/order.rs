//! Order types: checkout customer details and the submitted order snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartLine;
use crate::error::OrderError;

/// Customer details entered during checkout.
///
/// All four fields are required; validation is presence-only (trimmed
/// non-empty). Format checks beyond that are left to the input medium.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerDetails {
    /// Presence validation: every field must be non-empty after trimming.
    ///
    /// Returns the first missing field, checked in form order.
    pub fn validate(&self) -> Result<(), OrderError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(OrderError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// A completed checkout submission: customer details plus the cart's line
/// list and computed total, snapshotted at the moment of submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub items: Vec<CartLine>,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot an order from customer details and cart contents.
    pub fn new(details: &CustomerDetails, items: Vec<CartLine>, total_amount: Decimal) -> Self {
        Self {
            id: Uuid::now_v7(),
            customer_name: details.name.clone(),
            customer_email: details.email.clone(),
            customer_phone: details.phone.clone(),
            delivery_address: details.address.clone(),
            items,
            total_amount,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_details() -> CustomerDetails {
        CustomerDetails {
            name: "Ayesha Khan".to_string(),
            email: "ayesha@example.com".to_string(),
            phone: "0300 1234567".to_string(),
            address: "House 42, Block 5, Gulshan".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_full_details() {
        assert!(full_details().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut details = full_details();
        details.name = String::new();
        assert!(matches!(
            details.validate(),
            Err(OrderError::MissingField("name"))
        ));
    }

    #[test]
    fn test_validate_rejects_whitespace_only_phone() {
        let mut details = full_details();
        details.phone = "   ".to_string();
        assert!(matches!(
            details.validate(),
            Err(OrderError::MissingField("phone"))
        ));
    }

    #[test]
    fn test_order_snapshot_copies_details() {
        let details = full_details();
        let order = Order::new(&details, Vec::new(), Decimal::ZERO);
        assert_eq!(order.customer_name, details.name);
        assert_eq!(order.delivery_address, details.address);
        assert!(order.items.is_empty());
    }
}
