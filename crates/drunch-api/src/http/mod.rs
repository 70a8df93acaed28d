//! REST API: router, handlers, error mapping, envelope responses.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
