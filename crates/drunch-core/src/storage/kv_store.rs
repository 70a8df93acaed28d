//! Key-value store trait.
//!
//! Defines the interface for session-scoped durable key-value storage --
//! the stand-in for the browser's local storage that the cart snapshot is
//! mirrored to. Implementations live in drunch-infra.

use drunch_types::error::RepositoryError;
use uuid::Uuid;

/// Trait for session-scoped key-value persistent storage.
///
/// Stores arbitrary JSON values keyed by session ID and string key.
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        session_id: &Uuid,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, RepositoryError>> + Send;

    /// Set a value for a key (upsert, whole-value overwrite).
    fn set(
        &self,
        session_id: &Uuid,
        key: &str,
        value: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete a key. No-op if key does not exist.
    fn delete(
        &self,
        session_id: &Uuid,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
