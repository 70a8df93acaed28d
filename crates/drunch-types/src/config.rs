//! Service configuration.
//!
//! Deserialized from `config.toml` in the data directory. Every field has a
//! default so a missing or partial file still yields a working config.

use serde::{Deserialize, Serialize};

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP API binds to.
    pub http_addr: String,
    /// Delay before the assistant's deferred reply is appended, in ms.
    pub reply_delay_ms: u64,
    /// Delay before a succeeded checkout view closes and resets, in ms.
    pub checkout_close_delay_ms: u64,
    /// Number of approved reviews served for display.
    pub review_limit: u32,
    /// Greeting turn seeded into every new assistant transcript.
    pub greeting: String,
    /// Assistant sessions idle longer than this are evicted, dropping
    /// their transcript.
    pub session_idle_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: "127.0.0.1:8420".to_string(),
            reply_delay_ms: 500,
            checkout_close_delay_ms: 2000,
            review_limit: 4,
            greeting: "Hello! How can I help you today?".to_string(),
            session_idle_secs: 30 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reply_delay_ms, 500);
        assert_eq!(config.checkout_close_delay_ms, 2000);
        assert_eq!(config.review_limit, 4);
        assert_eq!(config.session_idle_secs, 1800);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("reply_delay_ms = 0").unwrap();
        assert_eq!(config.reply_delay_ms, 0);
        assert_eq!(config.review_limit, 4);
        assert_eq!(config.http_addr, "127.0.0.1:8420");
    }
}
