//! Infrastructure implementations for the Drunch Café ordering service.
//!
//! SQLite-backed repositories (sqlx, split reader/writer pools, WAL) for
//! the catalog, record sinks, and the session key-value store, plus the
//! `config.toml` loader and data-directory resolution.

pub mod config;
pub mod sqlite;
