//! The cart engine: in-memory cart state, the two-phase checkout state
//! machine, and the session-bound cart service that mirrors every mutation
//! to durable storage.

pub mod checkout;
pub mod engine;
pub mod service;

pub use engine::Cart;
pub use service::{CartService, CART_STORAGE_KEY};
