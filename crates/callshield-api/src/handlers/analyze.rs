//! Upload analysis handler: the request pipeline
//!
//! One strictly sequential pipeline per request: extract the multipart
//! upload, validate it, save it under a collision-resistant name, run
//! transcription and emotion detection, scan and fuse the signals, render
//! the verdict. The temporary file is removed on every exit path past the
//! save, including collaborator failures.

use super::pages;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use callshield_analyzer::fusion;
use callshield_core::{EmotionLabel, utils};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Response for a rejected or failed upload
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    /// Whether the analysis succeeded (always false)
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

/// Temporary upload with guaranteed removal
///
/// Holds the saved file for the duration of one request; dropping the guard
/// deletes the file, so every exit path past the save cleans up. A deletion
/// failure is logged and never surfaced to the client.
#[derive(Debug)]
struct StoredUpload {
    path: PathBuf,
}

impl StoredUpload {
    /// Write the upload to `path`, taking ownership of its lifetime
    fn save(path: PathBuf, contents: &[u8]) -> std::io::Result<Self> {
        std::fs::write(&path, contents)?;
        Ok(Self { path })
    }

    const fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for StoredUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(
                "Failed to remove temporary upload {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

/// Handle `POST /`: run the analysis pipeline on an uploaded recording
///
/// Expects a multipart form with the recording in an `audio` field.
/// Responds with the rendered result page, or a JSON error:
///
/// * `400` - no `audio` field, empty filename, disallowed extension,
///   oversized upload, or malformed multipart data
/// * `500` - the upload could not be written to temporary storage
///
/// Collaborator failures do not fail the request: a failed transcription
/// degrades to an empty transcript and a failed emotion inference degrades
/// to the `unknown` label, leaving the remaining signal to decide.
pub async fn handle_analyze(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    // Extract the audio field, ignoring any extra form fields
    let mut audio_data: Option<Vec<u8>> = None;
    let mut audio_filename: Option<String> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("audio") {
                    continue;
                }
                audio_filename = field.file_name().map(String::from);
                match field.bytes().await {
                    Ok(data) => audio_data = Some(data.to_vec()),
                    Err(e) => {
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            &format!("Failed to read audio data: {e}"),
                        );
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("Invalid multipart data: {e}"),
                );
            }
        }
    }

    let Some(audio) = audio_data else {
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    // An upload without a filename cannot be validated either
    let filename = audio_filename.unwrap_or_default();
    if let Err(e) = utils::validate_upload_filename(
        &filename,
        &state.config.storage.allowed_extensions,
    ) {
        warn!(
            "Rejected upload '{}': {}",
            utils::sanitize_filename(&filename),
            e
        );
        return error_response(StatusCode::BAD_REQUEST, "Invalid file format");
    }

    if audio.len() as u64 > state.config.storage.max_upload_size {
        return error_response(
            StatusCode::BAD_REQUEST,
            &format!(
                "File size exceeds maximum of {} bytes",
                state.config.storage.max_upload_size
            ),
        );
    }

    // Save under a collision-resistant key; raw client filenames never
    // reach the filesystem.
    let storage_name = utils::generate_storage_filename(&filename);
    let file_path = state.upload_dir.join(&storage_name);

    let stored = match StoredUpload::save(file_path, &audio) {
        Ok(stored) => stored,
        Err(e) => {
            error!("Failed to save uploaded audio: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to store uploaded file",
            );
        }
    };

    // Transcription failure degrades to an empty transcript
    let transcription = match state.transcriber.transcribe(stored.path()).await {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "Transcription failed ({} backend), continuing without transcript: {}",
                state.transcriber.name(),
                e
            );
            String::new()
        }
    };

    let keywords_found = state.scanner.scan(&transcription);

    // Emotion failure degrades to the unknown label
    let emotion_detected = match state.emotion.detect(stored.path()).await {
        Ok(label) => label,
        Err(e) => {
            warn!(
                "Emotion analysis failed ({} backend), continuing without tone signal: {}",
                state.emotion.name(),
                e
            );
            EmotionLabel::Unknown
        }
    };

    let result = fusion::analyze(transcription, keywords_found, emotion_detected);

    // Remove the temporary file before responding; the guard would also
    // fire at end of scope on any earlier return.
    drop(stored);

    info!(
        "ANALYSIS: {} | keywords: {} | emotion: {} | scam: {}",
        utils::sanitize_filename(&filename),
        result.keywords_found.len(),
        result.emotion_detected,
        result.scam_detected
    );

    pages::render_result(&result).into_response()
}

/// Helper to build an error response with logging
fn error_response(status: StatusCode, message: &str) -> Response {
    error!("ANALYSIS FAILED: {}", message);

    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.to_string(),
        }),
    )
        .into_response()
}
