//! Table reservation request type.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FormError;

/// A table reservation submitted through the "Book a Table" form.
///
/// `message` is optional free text; everything else is required.
/// The original form defaults `guests` to 2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: u32,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Presence validation for the required fields plus a guest-count floor.
    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        if self.guests == 0 {
            return Err(FormError::MissingField("guests"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reservation {
        Reservation {
            id: Uuid::now_v7(),
            name: "Bilal".to_string(),
            email: "bilal@example.com".to_string(),
            phone: "0312 2323244".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            guests: 2,
            message: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_guests() {
        let mut r = sample();
        r.guests = 0;
        assert!(matches!(r.validate(), Err(FormError::MissingField("guests"))));
    }

    #[test]
    fn test_reservation_serde_roundtrip() {
        let r = sample();
        let json = serde_json::to_string(&r).unwrap();
        let parsed: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.date, r.date);
        assert_eq!(parsed.time, r.time);
        assert_eq!(parsed.guests, 2);
    }
}
