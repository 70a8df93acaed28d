//! SQLite implementations of the drunch-core repository traits.

pub mod catalog;
pub mod contact;
pub mod kv;
pub mod order;
pub mod pool;
pub mod reservation;
pub mod review;

use chrono::{DateTime, Utc};
use drunch_types::error::RepositoryError;
use rust_decimal::Decimal;
use uuid::Uuid;

// Shared column mapping helpers. SQLite stores uuids, datetimes, and
// decimals as TEXT; decimals as text keeps prices exact.

pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, RepositoryError> {
    s.parse::<Uuid>()
        .map_err(|e| RepositoryError::Query(format!("invalid UUID: {e}")))
}

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

pub(crate) fn parse_decimal(s: &str) -> Result<Decimal, RepositoryError> {
    s.parse::<Decimal>()
        .map_err(|e| RepositoryError::Query(format!("invalid decimal: {e}")))
}
