//! Business logic and repository trait definitions for the Drunch Café
//! ordering service.
//!
//! This crate defines the "ports" (repository traits) that the
//! infrastructure layer implements. It depends only on `drunch-types` --
//! never on `drunch-infra` or any database/IO crate.

pub mod cart;
pub mod chat;
pub mod faq;
pub mod order;
pub mod repository;
pub mod storage;
