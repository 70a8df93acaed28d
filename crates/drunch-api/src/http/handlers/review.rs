//! Review handlers.
//!
//! Endpoints:
//! - GET  /api/v1/reviews - Approved reviews, newest first, limited
//! - POST /api/v1/reviews - Store a new (unapproved) review

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drunch_core::repository::review::ReviewRepository;
use drunch_types::review::Review;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Review>>, AppError> {
    let limit = i64::from(state.config.review_limit);
    let reviews = state.reviews.list_approved(limit).await?;
    Ok(ApiResponse::success(reviews))
}

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub struct CreateReviewResponse {
    pub id: Uuid,
}

/// POST /api/v1/reviews
pub async fn create_review(
    State(state): State<AppState>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<ApiResponse<CreateReviewResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Missing required field: name".to_string()));
    }
    if request.comment.trim().is_empty() {
        return Err(AppError::Validation("Missing required field: comment".to_string()));
    }

    let review = Review::new(request.name, request.rating, request.comment);
    state.reviews.insert(&review).await?;
    Ok(ApiResponse::success(CreateReviewResponse { id: review.id }))
}
