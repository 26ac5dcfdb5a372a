//! `CallShield` HTTP server library

#![forbid(unsafe_code)]

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use callshield_analyzer::{
    EmotionDetector, HeuristicEmotionDetector, HttpTranscriber, MockEmotionDetector,
    MockTranscriber, Transcriber,
};
use callshield_core::Config;
use callshield_core::context_error::Result;
use callshield_core::context_error;
use std::sync::Arc;
use tracing::info;

/// Build the application router, selecting collaborator backends from
/// configuration
///
/// # Errors
///
/// Returns an error if a configured backend cannot be constructed or the
/// application state validation fails.
pub fn build_router(config: Config) -> Result<Router> {
    let transcriber: Arc<dyn Transcriber> = match config.detection.transcriber.as_str() {
        "http" => {
            let url = config.detection.stt_url.clone().ok_or_else(|| {
                context_error!("detection.stt_url must be set when detection.transcriber is \"http\"")
            })?;
            Arc::new(
                HttpTranscriber::new(url, config.detection.stt_timeout_seconds)
                    .map_err(|e| context_error!("Failed to build HTTP transcriber: {}", e))?,
            )
        }
        _ => Arc::new(MockTranscriber::new()),
    };

    let emotion: Arc<dyn EmotionDetector> = match config.detection.emotion.as_str() {
        "mock" => Arc::new(MockEmotionDetector::new()),
        _ => Arc::new(HeuristicEmotionDetector::new()),
    };

    info!(
        "Using {} transcription and {} emotion backends",
        transcriber.name(),
        emotion.name()
    );

    build_router_with(config, transcriber, emotion)
}

/// Build the application router around explicit collaborator instances
///
/// This is the injection seam the tests use to substitute deterministic
/// stubs for the transcription and emotion collaborators.
///
/// # Errors
///
/// Returns an error if the application state cannot be created or fails
/// validation.
pub fn build_router_with(
    config: Config,
    transcriber: Arc<dyn Transcriber>,
    emotion: Arc<dyn EmotionDetector>,
) -> Result<Router> {
    let max_upload = usize::try_from(config.storage.max_upload_size)
        .map_err(|e| context_error!("Invalid max upload size: {}", e))?;

    let state = Arc::new(AppState::new(config, transcriber, emotion)?);

    // Validate the application state
    state.validate()?;

    let app = routes::build_router()
        .with_state(state)
        // Leave headroom for multipart framing around the payload itself
        .layer(DefaultBodyLimit::max(max_upload.saturating_add(64 * 1024)));

    Ok(app)
}
