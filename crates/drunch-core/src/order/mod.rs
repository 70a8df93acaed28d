//! Checkout submission pipeline.

pub mod service;

pub use service::OrderService;
