//! ContactRepository trait definition.

use drunch_types::contact::ContactMessage;
use drunch_types::error::RepositoryError;

/// Repository trait for contact form submissions.
pub trait ContactRepository: Send + Sync {
    /// Store one contact message.
    fn insert(
        &self,
        message: &ContactMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Contact messages, newest first.
    fn list_recent(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<ContactMessage>, RepositoryError>> + Send;
}
