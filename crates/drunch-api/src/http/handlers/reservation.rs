//! Reservation handler.
//!
//! POST /api/v1/reservations - Book a table.

use axum::extract::State;
use axum::Json;
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drunch_core::repository::reservation::ReservationRepository;
use drunch_types::error::FormError;
use drunch_types::reservation::Reservation;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

fn default_guests() -> u32 {
    2
}

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default = "default_guests")]
    pub guests: u32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CreateReservationResponse {
    pub id: Uuid,
    pub message: String,
}

/// POST /api/v1/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<ApiResponse<CreateReservationResponse>, AppError> {
    let reservation = Reservation {
        id: Uuid::now_v7(),
        name: request.name,
        email: request.email,
        phone: request.phone,
        date: request.date,
        time: request.time,
        guests: request.guests,
        message: request.message,
        created_at: Utc::now(),
    };
    reservation.validate()?;

    if let Err(e) = state.reservations.insert(&reservation).await {
        tracing::warn!(error = %e, "reservation insert failed");
        return Err(AppError::Form(FormError::SubmissionFailed));
    }

    Ok(ApiResponse::success(CreateReservationResponse {
        id: reservation.id,
        message: "Reservation confirmed!".to_string(),
    }))
}
