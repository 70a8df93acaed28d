//! HTTP request handlers, one module per resource.

pub mod cart;
pub mod chat;
pub mod contact;
pub mod menu;
pub mod page;
pub mod reservation;
pub mod review;
