//! SQLite catalog (menu) repository implementation.
//!
//! Implements `CatalogRepository` from `drunch-core`. All list reads honor
//! the `is_available` flag; `get` does not, so an item that went off the
//! menu can still be resolved for an existing cart line.

use drunch_core::repository::catalog::CatalogRepository;
use drunch_types::catalog::MenuItem;
use drunch_types::error::RepositoryError;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{parse_datetime, parse_decimal, parse_uuid};

/// SQLite-backed implementation of `CatalogRepository`.
#[derive(Debug, Clone)]
pub struct SqliteCatalogRepository {
    pool: DatabasePool,
}

impl SqliteCatalogRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct MenuItemRow {
    id: String,
    name: String,
    description: String,
    price: String,
    image_url: String,
    category: String,
    is_available: bool,
    is_featured: bool,
    created_at: String,
}

impl MenuItemRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            image_url: row.try_get("image_url")?,
            category: row.try_get("category")?,
            is_available: row.try_get("is_available")?,
            is_featured: row.try_get("is_featured")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_item(self) -> Result<MenuItem, RepositoryError> {
        Ok(MenuItem {
            id: parse_uuid(&self.id)?,
            name: self.name,
            description: self.description,
            price: parse_decimal(&self.price)?,
            image_url: self.image_url,
            category: self.category,
            is_available: self.is_available,
            is_featured: self.is_featured,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, name, description, price, image_url, category, is_available, is_featured, created_at FROM menu_items";

impl SqliteCatalogRepository {
    async fn fetch_items(&self, query: &str) -> Result<Vec<MenuItem>, RepositoryError> {
        let rows = sqlx::query(query)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                MenuItemRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))
                    .and_then(MenuItemRow::into_item)
            })
            .collect()
    }
}

impl CatalogRepository for SqliteCatalogRepository {
    async fn list_available(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        self.fetch_items(&format!(
            "{SELECT_COLUMNS} WHERE is_available = 1 ORDER BY category ASC, name ASC"
        ))
        .await
    }

    async fn list_featured(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        self.fetch_items(&format!(
            "{SELECT_COLUMNS} WHERE is_available = 1 AND is_featured = 1 ORDER BY category ASC, name ASC"
        ))
        .await
    }

    async fn get(&self, id: &Uuid) -> Result<Option<MenuItem>, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let item = MenuItemRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_item()?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }
}
