//! Error types for the analysis collaborators

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for transcription operations
pub type TranscriptionResult<T> = Result<T, TranscriptionError>;

/// Result type alias for emotion detection operations
pub type EmotionResult<T> = Result<T, EmotionError>;

/// Errors that can occur during transcription
#[derive(Error, Debug)]
pub enum TranscriptionError {
    /// File not found or inaccessible
    #[error("File not found or inaccessible: {path}")]
    FileNotFound {
        /// Path to the file
        path: PathBuf,
    },

    /// Service unavailable
    #[error("Transcription service unavailable: {service}")]
    ServiceUnavailable {
        /// Service name
        service: String,
    },

    /// Transcription processing error
    #[error("Transcription processing failed: {reason}")]
    ProcessingFailed {
        /// Failure reason
        reason: String,
    },

    /// Malformed response from the transcription service
    #[error("Invalid transcription service response: {message}")]
    InvalidResponse {
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Invalid transcriber configuration: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl TranscriptionError {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a service unavailable error
    pub fn service_unavailable(service: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            service: service.into(),
        }
    }

    /// Create a processing failed error
    pub fn processing_failed(reason: impl Into<String>) -> Self {
        Self::ProcessingFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Errors that can occur during emotion detection
#[derive(Error, Debug)]
pub enum EmotionError {
    /// File not found or inaccessible
    #[error("File not found or inaccessible: {path}")]
    FileNotFound {
        /// Path to the file
        path: PathBuf,
    },

    /// Audio could not be decoded
    #[error("Failed to decode audio: {0}")]
    Decode(#[from] hound::Error),

    /// Emotion inference failure
    #[error("Emotion analysis failed: {reason}")]
    AnalysisFailed {
        /// Failure reason
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl EmotionError {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an analysis failed error
    pub fn analysis_failed(reason: impl Into<String>) -> Self {
        Self::AnalysisFailed {
            reason: reason.into(),
        }
    }
}
