//! Chat transcript types for the assistant widget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One turn in the assistant transcript.
///
/// The transcript is an ordered, append-only sequence of turns seeded with a
/// greeting from the assistant. It lives only for the widget session and is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub text: String,
    pub is_from_assistant: bool,
    pub at: DateTime<Utc>,
}

impl ChatTurn {
    /// A turn written by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_assistant: true,
            at: Utc::now(),
        }
    }

    /// A turn typed by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_assistant: false,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        assert!(ChatTurn::assistant("hi").is_from_assistant);
        assert!(!ChatTurn::user("hello").is_from_assistant);
    }

    #[test]
    fn test_turn_serde_roundtrip() {
        let turn = ChatTurn::user("What are your hours?");
        let json = serde_json::to_string(&turn).unwrap();
        let parsed: ChatTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, turn);
    }
}
