//! SQLite order repository implementation.
//!
//! Implements `OrderRepository` from `drunch-core`. The cart line list is
//! stored as JSON text in the `items` column, snapshotted at submission
//! time exactly as the checkout pipeline handed it over.

use drunch_core::repository::order::OrderRepository;
use drunch_types::cart::CartLine;
use drunch_types::error::RepositoryError;
use drunch_types::order::Order;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_decimal, parse_uuid};

/// SQLite-backed implementation of `OrderRepository`.
#[derive(Debug, Clone)]
pub struct SqliteOrderRepository {
    pool: DatabasePool,
}

impl SqliteOrderRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct OrderRow {
    id: String,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    delivery_address: String,
    items: String,
    total_amount: String,
    created_at: String,
}

impl OrderRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            customer_name: row.try_get("customer_name")?,
            customer_email: row.try_get("customer_email")?,
            customer_phone: row.try_get("customer_phone")?,
            delivery_address: row.try_get("delivery_address")?,
            items: row.try_get("items")?,
            total_amount: row.try_get("total_amount")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_order(self) -> Result<Order, RepositoryError> {
        let items: Vec<CartLine> = serde_json::from_str(&self.items)
            .map_err(|e| RepositoryError::Query(format!("invalid order items JSON: {e}")))?;

        Ok(Order {
            id: parse_uuid(&self.id)?,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            delivery_address: self.delivery_address,
            items,
            total_amount: parse_decimal(&self.total_amount)?,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl OrderRepository for SqliteOrderRepository {
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        let items = serde_json::to_string(&order.items)
            .map_err(|e| RepositoryError::Query(format!("failed to serialize items: {e}")))?;

        sqlx::query(
            r#"INSERT INTO orders (id, customer_name, customer_email, customer_phone, delivery_address, items, total_amount, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(order.id.to_string())
        .bind(&order.customer_name)
        .bind(&order.customer_email)
        .bind(&order.customer_phone)
        .bind(&order.delivery_address)
        .bind(&items)
        .bind(order.total_amount.to_string())
        .bind(format_datetime(&order.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, customer_name, customer_email, customer_phone, delivery_address, items, total_amount, created_at
               FROM orders ORDER BY created_at DESC LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                OrderRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))
                    .and_then(OrderRow::into_order)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use drunch_types::order::CustomerDetails;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    async fn test_repo() -> (tempfile::TempDir, SqliteOrderRepository) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("ord.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (dir, SqliteOrderRepository::new(pool))
    }

    fn sample_order(total: i64) -> Order {
        let details = CustomerDetails {
            name: "Ayesha Khan".to_string(),
            email: "ayesha@example.com".to_string(),
            phone: "0300 1234567".to_string(),
            address: "House 42, Block 5".to_string(),
        };
        let line = CartLine {
            id: Uuid::now_v7(),
            name: "Club Sandwich".to_string(),
            price: Decimal::from(total),
            image_url: String::new(),
            description: String::new(),
            category: "lunch".to_string(),
            quantity: 1,
        };
        Order::new(&details, vec![line], Decimal::from(total))
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let (_dir, repo) = test_repo().await;
        let order = sample_order(950);
        repo.insert(&order).await.unwrap();

        let read = repo.list_recent(10).await.unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, order.id);
        assert_eq!(read[0].items, order.items);
        assert_eq!(read[0].total_amount, Decimal::from(950));
        assert_eq!(read[0].created_at, order.created_at);
    }

    #[tokio::test]
    async fn test_list_recent_is_newest_first_and_limited() {
        let (_dir, repo) = test_repo().await;
        let mut orders = Vec::new();
        for total in [100, 200, 300] {
            let mut order = sample_order(total);
            order.created_at = Utc::now() + chrono::Duration::seconds(total);
            repo.insert(&order).await.unwrap();
            orders.push(order);
        }

        let read = repo.list_recent(2).await.unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].id, orders[2].id);
        assert_eq!(read[1].id, orders[1].id);
    }
}
