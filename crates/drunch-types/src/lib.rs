//! Shared domain types for the Drunch Café ordering service.
//!
//! This crate contains the core domain types used across the workspace:
//! catalog items, cart lines, orders, reservations, contact messages,
//! reviews, chat turns, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono,
//! rust_decimal, thiserror.

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod contact;
pub mod error;
pub mod order;
pub mod page;
pub mod reservation;
pub mod review;
