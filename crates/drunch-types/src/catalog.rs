//! Catalog (menu) item types.
//!
//! Menu items are the externally-sourced list of orderable dishes. The cart
//! references them by id and copies their display metadata at add time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category labels used by the seeded menu and the CLI filter help.
///
/// Categories are stored as plain strings -- these constants are the known
/// labels, not an exhaustive set.
pub const KNOWN_CATEGORIES: &[&str] = &["breakfast", "lunch", "beverages", "desserts"];

/// A single orderable item on the menu.
///
/// `price` is in whole currency units (PKR) as an exact decimal.
/// Items with `is_available = false` are hidden from the browsable catalog;
/// `is_featured` items additionally appear on the home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}
