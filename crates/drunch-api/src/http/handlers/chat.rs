//! Assistant widget handlers.
//!
//! Endpoints:
//! - GET  /api/v1/sessions/{id}/chat  - Current transcript
//! - POST /api/v1/sessions/{id}/chat  - Submit a user turn
//! - GET  /api/v1/chat/quick-questions - Canned prompts
//!
//! Submitting returns as soon as the user turn is appended; the answer
//! lands in the transcript after the configured delay, so clients re-fetch.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use drunch_core::faq;
use drunch_types::chat::ChatTurn;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/sessions/{id}/chat
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<ApiResponse<Vec<ChatTurn>>, AppError> {
    let assistant = state.assistant(session_id);
    Ok(ApiResponse::success(assistant.transcript().await))
}

#[derive(Debug, Deserialize)]
pub struct SubmitTurnRequest {
    pub message: String,
}

/// POST /api/v1/sessions/{id}/chat
pub async fn submit_turn(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitTurnRequest>,
) -> Result<ApiResponse<Vec<ChatTurn>>, AppError> {
    let assistant = state.assistant(session_id);
    assistant.submit_turn(&request.message).await?;
    Ok(ApiResponse::success(assistant.transcript().await))
}

/// GET /api/v1/chat/quick-questions
pub async fn quick_questions() -> ApiResponse<Vec<&'static str>> {
    ApiResponse::success(faq::QUICK_QUESTIONS.to_vec())
}
