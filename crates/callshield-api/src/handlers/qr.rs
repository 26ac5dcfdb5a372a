//! QR code image handler

use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

/// Serve the QR code image for the application's URL
///
/// The PNG is rendered once at startup and cached in application state.
pub async fn qr_code(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/png")],
        state.qr_png.as_ref().clone(),
    )
}
