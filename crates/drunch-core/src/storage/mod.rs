//! Storage trait definitions.

pub mod kv_store;

pub use kv_store::KvStore;
