//! SQLite reservation repository implementation.

use drunch_core::repository::reservation::ReservationRepository;
use drunch_types::error::RepositoryError;
use drunch_types::reservation::Reservation;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid};

/// SQLite-backed implementation of `ReservationRepository`.
#[derive(Debug, Clone)]
pub struct SqliteReservationRepository {
    pool: DatabasePool,
}

impl SqliteReservationRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct ReservationRow {
    id: String,
    name: String,
    email: String,
    phone: String,
    date: String,
    time: String,
    guests: i64,
    message: String,
    created_at: String,
}

impl ReservationRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            date: row.try_get("date")?,
            time: row.try_get("time")?,
            guests: row.try_get("guests")?,
            message: row.try_get("message")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_reservation(self) -> Result<Reservation, RepositoryError> {
        let date = self
            .date
            .parse()
            .map_err(|e| RepositoryError::Query(format!("invalid date: {e}")))?;
        let time = self
            .time
            .parse()
            .map_err(|e| RepositoryError::Query(format!("invalid time: {e}")))?;
        let guests = u32::try_from(self.guests)
            .map_err(|e| RepositoryError::Query(format!("invalid guest count: {e}")))?;

        Ok(Reservation {
            id: parse_uuid(&self.id)?,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date,
            time,
            guests,
            message: self.message,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl ReservationRepository for SqliteReservationRepository {
    async fn insert(&self, reservation: &Reservation) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO reservations (id, name, email, phone, date, time, guests, message, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(reservation.id.to_string())
        .bind(&reservation.name)
        .bind(&reservation.email)
        .bind(&reservation.phone)
        .bind(reservation.date.to_string())
        .bind(reservation.time.to_string())
        .bind(i64::from(reservation.guests))
        .bind(&reservation.message)
        .bind(format_datetime(&reservation.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Reservation>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, phone, date, time, guests, message, created_at
               FROM reservations ORDER BY created_at DESC LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                ReservationRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))
                    .and_then(ReservationRow::into_reservation)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use uuid::Uuid;

    async fn test_repo() -> (tempfile::TempDir, SqliteReservationRepository) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("res.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (dir, SqliteReservationRepository::new(pool))
    }

    fn sample() -> Reservation {
        Reservation {
            id: Uuid::now_v7(),
            name: "Bilal".to_string(),
            email: "bilal@example.com".to_string(),
            phone: "0312 2323244".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            guests: 4,
            message: "Window table please".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let (_dir, repo) = test_repo().await;
        let reservation = sample();
        repo.insert(&reservation).await.unwrap();

        let read = repo.list_recent(10).await.unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, reservation.id);
        assert_eq!(read[0].date, reservation.date);
        assert_eq!(read[0].time, reservation.time);
        assert_eq!(read[0].guests, 4);
        assert_eq!(read[0].message, "Window table please");
    }

    #[tokio::test]
    async fn test_zero_guests_rejected_by_schema() {
        let (_dir, repo) = test_repo().await;
        let mut reservation = sample();
        reservation.guests = 0;
        assert!(repo.insert(&reservation).await.is_err());
    }
}
