//! CatalogRepository trait definition.
//!
//! The catalog is the externally-sourced list of orderable items the cart
//! references but does not own. All reads honor the availability flag.

use drunch_types::catalog::MenuItem;
use drunch_types::error::RepositoryError;
use uuid::Uuid;

/// Read-side repository trait for the menu catalog.
pub trait CatalogRepository: Send + Sync {
    /// Available items, ordered by category.
    fn list_available(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<MenuItem>, RepositoryError>> + Send;

    /// Available items that are also featured (home page highlights).
    fn list_featured(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<MenuItem>, RepositoryError>> + Send;

    /// Look up one item by id regardless of availability.
    fn get(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<MenuItem>, RepositoryError>> + Send;
}
