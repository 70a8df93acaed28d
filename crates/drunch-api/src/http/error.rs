//! Application error type mapping to HTTP status codes and the envelope
//! format.
//!
//! The external-store taxonomy stays flat on the wire: every sink failure
//! surfaces as SUBMISSION_FAILED with a generic retry prompt, regardless of
//! the underlying cause.

use axum::response::{IntoResponse, Response};

use drunch_types::error::{ChatError, FormError, OrderError, RepositoryError};

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Checkout pipeline errors.
    Order(OrderError),
    /// Reservation/contact form errors.
    Form(FormError),
    /// Assistant widget errors.
    Chat(ChatError),
    /// Repository read errors outside a submission.
    Repository(RepositoryError),
    /// Request validation error.
    Validation(String),
    /// Missing resource.
    NotFound(String),
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        AppError::Order(e)
    }
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::Form(e)
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

impl AppError {
    fn code_and_message(&self) -> (&'static str, String) {
        match self {
            AppError::Order(OrderError::MissingField(field)) => {
                ("VALIDATION_ERROR", format!("Missing required field: {field}"))
            }
            AppError::Order(OrderError::SubmissionFailed) => (
                "SUBMISSION_FAILED",
                "Failed to place order. Please try again.".to_string(),
            ),
            AppError::Order(OrderError::SubmissionInFlight) => (
                "SUBMISSION_IN_FLIGHT",
                "A submission is already in progress.".to_string(),
            ),
            AppError::Order(OrderError::UnknownItem) => {
                ("ITEM_NOT_FOUND", "Menu item not found".to_string())
            }
            AppError::Form(FormError::MissingField(field)) => {
                ("VALIDATION_ERROR", format!("Missing required field: {field}"))
            }
            AppError::Form(FormError::SubmissionFailed) => (
                "SUBMISSION_FAILED",
                "Failed to submit. Please try again.".to_string(),
            ),
            AppError::Chat(ChatError::EmptyMessage) => {
                ("EMPTY_MESSAGE", "Message is empty".to_string())
            }
            AppError::Repository(e) => {
                tracing::error!(error = %e, "repository error");
                ("INTERNAL_ERROR", "Internal error".to_string())
            }
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = self.code_and_message();
        ApiResponse::error(code, &message).into_response()
    }
}
