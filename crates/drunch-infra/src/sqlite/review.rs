//! SQLite review repository implementation.
//!
//! Display reads return approved reviews only, newest first, limited.
//! Inserts always store `is_approved` as given (new reviews arrive
//! unapproved; approval is flipped out of band).

use drunch_core::repository::review::ReviewRepository;
use drunch_types::error::RepositoryError;
use drunch_types::review::Review;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid};

/// SQLite-backed implementation of `ReviewRepository`.
#[derive(Debug, Clone)]
pub struct SqliteReviewRepository {
    pool: DatabasePool,
}

impl SqliteReviewRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn review_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Review, RepositoryError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let rating: i64 = row
        .try_get("rating")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(Review {
        id: parse_uuid(&id)?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        rating: u8::try_from(rating)
            .map_err(|e| RepositoryError::Query(format!("invalid rating: {e}")))?,
        comment: row
            .try_get("comment")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        is_approved: row
            .try_get("is_approved")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        created_at: parse_datetime(&created_at)?,
    })
}

impl ReviewRepository for SqliteReviewRepository {
    async fn list_approved(&self, limit: i64) -> Result<Vec<Review>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, name, rating, comment, is_approved, created_at
               FROM reviews WHERE is_approved = 1 ORDER BY created_at DESC LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(review_from_row).collect()
    }

    async fn insert(&self, review: &Review) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO reviews (id, name, rating, comment, is_approved, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(review.id.to_string())
        .bind(&review.name)
        .bind(i64::from(review.rating))
        .bind(&review.comment)
        .bind(review.is_approved)
        .bind(format_datetime(&review.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    async fn test_repo() -> (tempfile::TempDir, SqliteReviewRepository) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("rev.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (dir, SqliteReviewRepository::new(pool))
    }

    fn review(name: &str, approved: bool, age_secs: i64) -> Review {
        let mut review = Review::new(name.to_string(), 5, format!("{name} says hi"));
        review.is_approved = approved;
        review.created_at = Utc::now() - Duration::seconds(age_secs);
        review
    }

    #[tokio::test]
    async fn test_unapproved_reviews_hidden() {
        let (_dir, repo) = test_repo().await;
        repo.insert(&review("approved", true, 10)).await.unwrap();
        repo.insert(&review("pending", false, 5)).await.unwrap();

        let read = repo.list_approved(10).await.unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].name, "approved");
    }

    #[tokio::test]
    async fn test_newest_first_and_limited() {
        let (_dir, repo) = test_repo().await;
        for age in [50, 40, 30, 20, 10] {
            repo.insert(&review(&format!("r{age}"), true, age))
                .await
                .unwrap();
        }

        let read = repo.list_approved(4).await.unwrap();
        assert_eq!(read.len(), 4);
        assert_eq!(read[0].name, "r10");
        assert_eq!(read[3].name, "r40");
    }
}
