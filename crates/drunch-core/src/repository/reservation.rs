//! ReservationRepository trait definition.

use drunch_types::error::RepositoryError;
use drunch_types::reservation::Reservation;

/// Repository trait for table reservation submissions.
pub trait ReservationRepository: Send + Sync {
    /// Store one reservation record.
    fn insert(
        &self,
        reservation: &Reservation,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Reservations, newest first.
    fn list_recent(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Reservation>, RepositoryError>> + Send;
}
