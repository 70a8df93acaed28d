use thiserror::Error;

/// Errors from repository operations (used by trait definitions in drunch-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors from the checkout pipeline.
///
/// The external-store taxonomy is deliberately flat: every failure collapses
/// to `SubmissionFailed`, surfaced as a generic retry prompt.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("failed to place order, please try again")]
    SubmissionFailed,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("menu item not found")]
    UnknownItem,
}

/// Errors from the reservation and contact forms.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("failed to submit, please try again")]
    SubmissionFailed,
}

/// Errors from the assistant widget.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_display() {
        let err = OrderError::MissingField("email");
        assert_eq!(err.to_string(), "missing required field: email");
    }

    #[test]
    fn test_submission_failed_is_generic() {
        // The message must not leak which kind of failure occurred.
        let err = OrderError::SubmissionFailed;
        assert_eq!(err.to_string(), "failed to place order, please try again");
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
