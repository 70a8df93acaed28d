//! OrderRepository trait definition.

use drunch_types::error::RepositoryError;
use drunch_types::order::Order;

/// Repository trait for completed checkout submissions.
///
/// The checkout pipeline relies only on insert success/failure -- never on
/// the stored record's shape. `list_recent` serves the operator CLI.
pub trait OrderRepository: Send + Sync {
    /// Store one order record.
    fn insert(
        &self,
        order: &Order,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Orders, newest first.
    fn list_recent(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Order>, RepositoryError>> + Send;
}
