//! ReviewRepository trait definition.

use drunch_types::error::RepositoryError;
use drunch_types::review::Review;

/// Repository trait for customer reviews.
///
/// Reads are display-only: approved reviews, newest first, limited.
/// Inserts store reviews unapproved; approval happens out of band.
pub trait ReviewRepository: Send + Sync {
    /// Approved reviews, newest first, at most `limit`.
    fn list_approved(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Review>, RepositoryError>> + Send;

    /// Store one (unapproved) review.
    fn insert(
        &self,
        review: &Review,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
