//! HTTP-backed transcription client
//!
//! Fronts a speech-to-text sidecar (e.g. a Whisper HTTP service) over a
//! simple multipart upload API: `POST {base_url}` with the audio file in an
//! `audio` field, JSON `{"text": "..."}` back.

use crate::error::{TranscriptionError, TranscriptionResult};
use crate::transcribe::Transcriber;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Transcriber delegating to a speech-to-text HTTP sidecar
#[derive(Debug)]
pub struct HttpTranscriber {
    client: reqwest::Client,
    url: String,
}

/// Response payload of the sidecar
#[derive(Debug, Deserialize)]
struct SttResponse {
    text: String,
}

impl HttpTranscriber {
    /// Create a client for the sidecar at `url` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout_seconds: u64) -> TranscriptionResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| {
                TranscriptionError::configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, path: &Path) -> TranscriptionResult<String> {
        if !path.exists() {
            return Err(TranscriptionError::file_not_found(path));
        }

        let audio = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        debug!(
            "Submitting {} bytes to transcription service at {}",
            audio.len(),
            self.url
        );

        let part = reqwest::multipart::Part::bytes(audio)
            .file_name(filename)
            .mime_str("application/octet-stream")?;
        let form = reqwest::multipart::Form::new().part("audio", part);

        let response = self.client.post(&self.url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranscriptionError::processing_failed(format!(
                "Service returned {status}: {error_text}"
            )));
        }

        let payload: SttResponse = response.json().await.map_err(|e| {
            TranscriptionError::invalid_response(format!("failed to parse response: {e}"))
        })?;

        info!(
            "Transcription service returned {} characters",
            payload.text.len()
        );

        Ok(payload.text)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let transcriber = HttpTranscriber::new("http://localhost:9000/transcribe", 60);
        assert!(transcriber.is_ok());
    }

    #[test]
    fn test_transcriber_name() {
        let transcriber = HttpTranscriber::new("http://localhost:9000/transcribe", 60).unwrap();
        assert_eq!(transcriber.name(), "http");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let transcriber = HttpTranscriber::new("http://localhost:9000/transcribe", 60).unwrap();
        let result = transcriber
            .transcribe(Path::new("/nonexistent/call.wav"))
            .await;
        assert!(matches!(
            result,
            Err(TranscriptionError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_response_deserialization() {
        let payload: SttResponse =
            serde_json::from_str(r#"{"text": "hello there"}"#).unwrap();
        assert_eq!(payload.text, "hello there");

        // Extra fields from richer sidecars are ignored
        let payload: SttResponse =
            serde_json::from_str(r#"{"text": "hi", "language": "en", "confidence": 0.9}"#)
                .unwrap();
        assert_eq!(payload.text, "hi");
    }
}
