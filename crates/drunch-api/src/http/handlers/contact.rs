//! Contact form handler.
//!
//! POST /api/v1/contact - Store a contact form message.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drunch_core::repository::contact::ContactRepository;
use drunch_types::contact::ContactMessage;
use drunch_types::error::FormError;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CreateContactResponse {
    pub id: Uuid,
    pub message: String,
}

/// POST /api/v1/contact
pub async fn create_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<ApiResponse<CreateContactResponse>, AppError> {
    let contact = ContactMessage {
        id: Uuid::now_v7(),
        name: request.name,
        email: request.email,
        message: request.message,
        created_at: Utc::now(),
    };
    contact.validate()?;

    if let Err(e) = state.contacts.insert(&contact).await {
        tracing::warn!(error = %e, "contact insert failed");
        return Err(AppError::Form(FormError::SubmissionFailed));
    }

    Ok(ApiResponse::success(CreateContactResponse {
        id: contact.id,
        message: "Message sent!".to_string(),
    }))
}
