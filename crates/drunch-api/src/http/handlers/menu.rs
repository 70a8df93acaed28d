//! Menu catalog handlers.
//!
//! Endpoints:
//! - GET /api/v1/menu            - Available items (optionally filtered)
//! - GET /api/v1/menu?featured=true - Featured items for the home page

use axum::extract::{Query, State};
use serde::Deserialize;

use drunch_core::repository::catalog::CatalogRepository;
use drunch_types::catalog::MenuItem;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for menu listing.
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Restrict to one category (e.g. "breakfast").
    pub category: Option<String>,
    /// Only featured items.
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/v1/menu
pub async fn list_menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<ApiResponse<Vec<MenuItem>>, AppError> {
    let mut items = if query.featured {
        state.catalog.list_featured().await?
    } else {
        state.catalog.list_available().await?
    };

    if let Some(category) = &query.category {
        let category = category.to_lowercase();
        items.retain(|item| item.category == category);
    }

    Ok(ApiResponse::success(items))
}
