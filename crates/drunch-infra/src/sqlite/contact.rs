//! SQLite contact message repository implementation.

use drunch_core::repository::contact::ContactRepository;
use drunch_types::contact::ContactMessage;
use drunch_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid};

/// SQLite-backed implementation of `ContactRepository`.
#[derive(Debug, Clone)]
pub struct SqliteContactRepository {
    pool: DatabasePool,
}

impl SqliteContactRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn message_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<ContactMessage, RepositoryError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(ContactMessage {
        id: parse_uuid(&id)?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        email: row
            .try_get("email")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        message: row
            .try_get("message")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        created_at: parse_datetime(&created_at)?,
    })
}

impl ContactRepository for SqliteContactRepository {
    async fn insert(&self, message: &ContactMessage) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO contact_messages (id, name, email, message, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(message.id.to_string())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(format_datetime(&message.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ContactMessage>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, name, email, message, created_at FROM contact_messages ORDER BY created_at DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(message_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("msg.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();
        let repo = SqliteContactRepository::new(pool);

        let message = ContactMessage {
            id: Uuid::now_v7(),
            name: "Sana".to_string(),
            email: "sana@example.com".to_string(),
            message: "Loved the lava cake!".to_string(),
            created_at: Utc::now(),
        };
        repo.insert(&message).await.unwrap();

        let read = repo.list_recent(5).await.unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, message.id);
        assert_eq!(read[0].message, "Loved the lava cake!");
    }
}
