//! SQLite key-value store implementation.
//!
//! Implements `KvStore` from `drunch-core` over the `session_kv_store`
//! table. Values are stored as JSON text and deserialized on read; writes
//! are whole-value upserts, so every cart mutation replaces the previous
//! snapshot atomically.

use drunch_core::storage::kv_store::KvStore;
use drunch_types::error::RepositoryError;
use sqlx::Row;
use uuid::Uuid;

use super::format_datetime;
use super::pool::DatabasePool;

/// SQLite-backed implementation of `KvStore`.
#[derive(Debug, Clone)]
pub struct SqliteKvStore {
    pool: DatabasePool,
}

impl SqliteKvStore {
    /// Create a new KV store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl KvStore for SqliteKvStore {
    async fn get(
        &self,
        session_id: &Uuid,
        key: &str,
    ) -> Result<Option<serde_json::Value>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM session_kv_store WHERE session_id = ? AND key = ?")
            .bind(session_id.to_string())
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let value_str: String = row
                    .try_get("value")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                let value: serde_json::Value = serde_json::from_str(&value_str)
                    .map_err(|e| RepositoryError::Query(format!("invalid JSON value: {e}")))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(
        &self,
        session_id: &Uuid,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), RepositoryError> {
        let now = format_datetime(&chrono::Utc::now());
        let value_str = serde_json::to_string(value)
            .map_err(|e| RepositoryError::Query(format!("failed to serialize value: {e}")))?;

        sqlx::query(
            r#"INSERT INTO session_kv_store (session_id, key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?)
               ON CONFLICT (session_id, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(session_id.to_string())
        .bind(key)
        .bind(&value_str)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, session_id: &Uuid, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM session_kv_store WHERE session_id = ? AND key = ?")
            .bind(session_id.to_string())
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (tempfile::TempDir, SqliteKvStore) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("kv.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (dir, SqliteKvStore::new(pool))
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let (_dir, store) = test_store().await;
        let value = store.get(&Uuid::now_v7(), "drunchCart").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_roundtrip() {
        let (_dir, store) = test_store().await;
        let session = Uuid::now_v7();
        let value = serde_json::json!([{"id": "x", "quantity": 2}]);

        store.set(&session, "drunchCart", &value).await.unwrap();
        let read = store.get(&session, "drunchCart").await.unwrap();
        assert_eq!(read, Some(value));
    }

    #[tokio::test]
    async fn test_set_overwrites_whole_value() {
        let (_dir, store) = test_store().await;
        let session = Uuid::now_v7();

        store
            .set(&session, "drunchCart", &serde_json::json!([1, 2, 3]))
            .await
            .unwrap();
        store
            .set(&session, "drunchCart", &serde_json::json!([]))
            .await
            .unwrap();

        let read = store.get(&session, "drunchCart").await.unwrap();
        assert_eq!(read, Some(serde_json::json!([])));
    }

    #[tokio::test]
    async fn test_delete_is_noop_for_missing_key() {
        let (_dir, store) = test_store().await;
        store.delete(&Uuid::now_v7(), "drunchCart").await.unwrap();
    }
}
