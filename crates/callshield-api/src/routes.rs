//! API route definitions

use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Build the application routes
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::pages::index).post(handlers::analyze::handle_analyze),
        )
        .route("/qr_code", get(handlers::qr::qr_code))
        .route("/health", get(handlers::health::health_check))
        .fallback(not_found_handler)
        .layer(CompressionLayer::new())
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}
