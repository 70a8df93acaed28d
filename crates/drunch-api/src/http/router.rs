//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`.
//! Middleware: CORS (wide open, the site is a public storefront) and
//! request tracing.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Catalog
        .route("/menu", get(handlers::menu::list_menu))
        // Reviews
        .route(
            "/reviews",
            get(handlers::review::list_reviews).post(handlers::review::create_review),
        )
        // Forms
        .route(
            "/reservations",
            post(handlers::reservation::create_reservation),
        )
        .route("/contact", post(handlers::contact::create_contact))
        // Session cart
        .route(
            "/sessions/{id}/cart",
            get(handlers::cart::get_cart).delete(handlers::cart::clear_cart),
        )
        .route("/sessions/{id}/cart/items", post(handlers::cart::add_item))
        .route(
            "/sessions/{id}/cart/items/{item_id}",
            put(handlers::cart::set_quantity),
        )
        .route(
            "/sessions/{id}/cart/items/{item_id}",
            delete(handlers::cart::remove_item),
        )
        .route("/sessions/{id}/checkout", post(handlers::cart::checkout))
        // Assistant widget
        .route(
            "/sessions/{id}/chat",
            get(handlers::chat::get_transcript).post(handlers::chat::submit_turn),
        )
        .route(
            "/chat/quick-questions",
            get(handlers::chat::quick_questions),
        )
        // Page navigation
        .route("/pages/{name}", get(handlers::page::resolve_page));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
