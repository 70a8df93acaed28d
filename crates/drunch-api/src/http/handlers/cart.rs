//! Session cart and checkout handlers.
//!
//! Endpoints:
//! - GET    /api/v1/sessions/{id}/cart                 - Current cart
//! - POST   /api/v1/sessions/{id}/cart/items           - Add one unit of an item
//! - PUT    /api/v1/sessions/{id}/cart/items/{item_id} - Replace a line's quantity
//! - DELETE /api/v1/sessions/{id}/cart/items/{item_id} - Remove a line
//! - DELETE /api/v1/sessions/{id}/cart                 - Empty the cart
//! - POST   /api/v1/sessions/{id}/checkout             - Place the order

use axum::extract::{Path, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drunch_core::cart::Cart;
use drunch_core::repository::catalog::CatalogRepository;
use drunch_types::cart::CartLine;
use drunch_types::error::OrderError;
use drunch_types::order::CustomerDetails;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Cart as returned to clients: lines plus the derived totals.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total_item_count: u64,
    pub total_price: Decimal,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        Self {
            total_item_count: cart.total_item_count(),
            total_price: cart.total_price(),
            lines: cart.into_lines(),
        }
    }
}

/// GET /api/v1/sessions/{id}/cart
pub async fn get_cart(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<ApiResponse<CartView>, AppError> {
    let cart = state.carts.load(&session_id).await;
    Ok(ApiResponse::success(cart.into()))
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub item_id: Uuid,
}

/// POST /api/v1/sessions/{id}/cart/items
pub async fn add_item(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddItemRequest>,
) -> Result<ApiResponse<CartView>, AppError> {
    let item = state
        .catalog
        .get(&request.item_id)
        .await?
        .ok_or(AppError::Order(OrderError::UnknownItem))?;
    let cart = state.carts.add_item(&session_id, &item).await?;
    Ok(ApiResponse::success(cart.into()))
}

#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    pub quantity: i64,
}

/// PUT /api/v1/sessions/{id}/cart/items/{item_id}
pub async fn set_quantity(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<SetQuantityRequest>,
) -> Result<ApiResponse<CartView>, AppError> {
    let cart = state
        .carts
        .set_quantity(&session_id, &item_id, request.quantity)
        .await?;
    Ok(ApiResponse::success(cart.into()))
}

/// DELETE /api/v1/sessions/{id}/cart/items/{item_id}
pub async fn remove_item(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<ApiResponse<CartView>, AppError> {
    let cart = state.carts.remove_item(&session_id, &item_id).await?;
    Ok(ApiResponse::success(cart.into()))
}

/// DELETE /api/v1/sessions/{id}/cart
pub async fn clear_cart(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<ApiResponse<CartView>, AppError> {
    let cart = state.carts.clear(&session_id).await?;
    Ok(ApiResponse::success(cart.into()))
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order_id: Uuid,
    pub total_amount: Decimal,
    pub message: String,
    /// How long the client shows the success view before closing the
    /// checkout flow and resetting to the cart review.
    pub close_delay_ms: u64,
}

/// POST /api/v1/sessions/{id}/checkout
pub async fn checkout(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<CheckoutRequest>,
) -> Result<ApiResponse<CheckoutResponse>, AppError> {
    let details = CustomerDetails {
        name: request.name,
        email: request.email,
        phone: request.phone,
        address: request.address,
    };
    let order = state.orders.place_order(&session_id, &details).await?;
    Ok(ApiResponse::success(CheckoutResponse {
        order_id: order.id,
        total_amount: order.total_amount,
        message: "Order placed successfully!".to_string(),
        close_delay_ms: state.config.checkout_close_delay_ms,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drunch_types::config::Config;

    #[test]
    fn test_checkout_response_carries_the_close_delay() {
        let config = Config::default();
        let response = CheckoutResponse {
            order_id: Uuid::now_v7(),
            total_amount: Decimal::from(250),
            message: "Order placed successfully!".to_string(),
            close_delay_ms: config.checkout_close_delay_ms,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["close_delay_ms"], 2000);
    }
}
