//! Cart line type.
//!
//! A cart line is one distinct orderable item at a chosen quantity. Display
//! metadata is copied from the catalog at add time and never re-fetched, so
//! a line stays renderable even if the menu item later changes or disappears.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::MenuItem;

/// One catalog item plus chosen quantity within the cart.
///
/// Invariant: `quantity >= 1`. The cart engine removes a line rather than
/// letting its quantity reach zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
}

impl CartLine {
    /// Build a line from a catalog item with quantity 1.
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            quantity: 1,
        }
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_item() -> MenuItem {
        MenuItem {
            id: Uuid::now_v7(),
            name: "Karak Chai".to_string(),
            description: "Strong milk tea".to_string(),
            price: Decimal::from(150),
            image_url: "https://example.com/chai.jpg".to_string(),
            category: "beverages".to_string(),
            is_available: true,
            is_featured: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_item_copies_metadata() {
        let item = sample_item();
        let line = CartLine::from_item(&item);
        assert_eq!(line.id, item.id);
        assert_eq!(line.name, item.name);
        assert_eq!(line.price, item.price);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::from_item(&sample_item());
        line.quantity = 3;
        assert_eq!(line.line_total(), Decimal::from(450));
    }

    #[test]
    fn test_cart_line_serde_roundtrip() {
        let line = CartLine::from_item(&sample_item());
        let json = serde_json::to_string(&line).unwrap();
        let parsed: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }
}
