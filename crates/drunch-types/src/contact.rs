//! Contact form message type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FormError;

/// A message submitted through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Presence validation: all three fields are required.
    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_message() {
        let msg = ContactMessage {
            id: Uuid::now_v7(),
            name: "Sana".to_string(),
            email: "sana@example.com".to_string(),
            message: String::new(),
            created_at: Utc::now(),
        };
        assert!(matches!(
            msg.validate(),
            Err(FormError::MissingField("message"))
        ));
    }
}
