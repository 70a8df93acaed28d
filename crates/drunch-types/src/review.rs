//! Customer review type.
//!
//! Reviews are display-only for the website: the home page shows the four
//! newest approved reviews. Approval happens out of band, so new reviews
//! are stored unapproved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer review with a 1-5 star rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Create an unapproved review, clamping the rating into 1..=5.
    pub fn new(name: String, rating: u8, comment: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            name,
            rating: rating.clamp(1, 5),
            comment,
            is_approved: false,
            created_at: Utc::now(),
        }
    }
}
