//! Configuration loader.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`Config`]. Falls back to defaults when the file is missing or
//! malformed -- configuration problems must never stop the service.

use std::path::{Path, PathBuf};

use drunch_types::config::Config;

/// Resolve the data directory: `DRUNCH_DATA_DIR` env var, falling back to
/// `~/.drunch`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DRUNCH_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".drunch")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`Config::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the
///   default.
/// - Otherwise returns the parsed config (missing fields filled with
///   defaults via serde).
pub async fn load_config(data_dir: &Path) -> Config {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return Config::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return Config::default();
        }
    };

    match toml::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.reply_delay_ms, 500);
        assert_eq!(config.review_limit, 4);
    }

    #[tokio::test]
    async fn test_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
http_addr = "0.0.0.0:9000"
reply_delay_ms = 0
greeting = "Salaam! What can I get you?"
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.http_addr, "0.0.0.0:9000");
        assert_eq!(config.reply_delay_ms, 0);
        assert_eq!(config.greeting, "Salaam! What can I get you?");
        // Unspecified fields keep their defaults.
        assert_eq!(config.checkout_close_delay_ms, 2000);
    }

    #[tokio::test]
    async fn test_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.reply_delay_ms, 500);
    }
}
