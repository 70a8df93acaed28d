//! Page resolution handler.
//!
//! GET /api/v1/pages/{name} - Resolve a page name, unknown names fall back
//! to home instead of 404ing.

use axum::extract::Path;
use serde::Serialize;

use drunch_types::page::Page;

use crate::http::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub requested: String,
    pub resolved: Page,
}

/// GET /api/v1/pages/{name}
pub async fn resolve_page(Path(name): Path<String>) -> ApiResponse<PageResponse> {
    let resolved = Page::resolve(&name);
    ApiResponse::success(PageResponse {
        requested: name,
        resolved,
    })
}
