//! Speech-to-text collaborator seam

use crate::error::TranscriptionResult;
use async_trait::async_trait;
use std::path::Path;

/// Interface for transcription backends
///
/// The pipeline treats transcription as a black box: given a readable audio
/// file path, a backend returns best-effort text. An empty string is a valid
/// result for silent or unintelligible audio and must not be reported as an
/// error. Calls may block for the duration of model inference; there is no
/// streaming or cancellation.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file at `path` to text
    async fn transcribe(&self, path: &Path) -> TranscriptionResult<String>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}
