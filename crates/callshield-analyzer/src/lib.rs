//! Analysis collaborators for `CallShield`
//!
//! This crate provides the pluggable collaborator seams of the scam
//! screening pipeline: speech-to-text transcription and emotion detection
//! behind injectable traits, a keyword scanner over a configured watchlist,
//! and the fusion rule that combines both signals into a verdict.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::multiple_crate_versions,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::uninlined_format_args
)]

pub mod emotion;
pub mod error;
pub mod fusion;
pub mod http;
pub mod keyword;
pub mod mock;
pub mod transcribe;

pub use emotion::{EmotionDetector, HeuristicEmotionDetector};
pub use error::{EmotionError, EmotionResult, TranscriptionError, TranscriptionResult};
pub use fusion::{analyze, fuse};
pub use http::HttpTranscriber;
pub use keyword::KeywordScanner;
pub use transcribe::Transcriber;

// Re-export commonly used items
pub use callshield_core::{AnalysisResult, EmotionLabel};
pub use mock::{MockEmotionDetector, MockTranscriber};
