//! Repository trait definitions (ports).
//!
//! One trait per external-store table. Implementations live in
//! drunch-infra; all traits use native async fn in traits (RPITIT).

pub mod catalog;
pub mod contact;
pub mod order;
pub mod reservation;
pub mod review;

pub use catalog::CatalogRepository;
pub use contact::ContactRepository;
pub use order::OrderRepository;
pub use reservation::ReservationRepository;
pub use review::ReviewRepository;
