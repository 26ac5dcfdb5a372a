//! Health check endpoint for monitoring and diagnostics

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Active transcription backend
    pub transcriber: String,
    /// Active emotion detection backend
    pub emotion: String,
    /// Whether the upload directory is writable
    pub storage_writable: bool,
}

/// Basic health check endpoint for monitoring systems
///
/// Returns HTTP 200 with service details while the upload directory is
/// writable, or HTTP 503 when temporary storage is unavailable.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let storage_writable = state.validate().is_ok();

    let status = if storage_writable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if storage_writable {
                "healthy".to_string()
            } else {
                "degraded".to_string()
            },
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
            transcriber: state.transcriber.name().to_string(),
            emotion: state.emotion.name().to_string(),
            storage_writable,
        }),
    )
}
