//! Deterministic mock collaborators for testing

use crate::error::{EmotionError, EmotionResult, TranscriptionError, TranscriptionResult};
use crate::{EmotionDetector, Transcriber};
use async_trait::async_trait;
use callshield_core::EmotionLabel;
use std::path::Path;

/// Mock transcription backend for testing
///
/// Returns a fixed transcript for every file, or a scripted failure.
#[derive(Debug, Clone)]
pub struct MockTranscriber {
    text: String,
    should_fail: bool,
    failure_message: String,
}

impl MockTranscriber {
    /// Create a new mock transcriber with a generic transcript
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: "hello, how are you".to_string(),
            should_fail: false,
            failure_message: "Mock failure".to_string(),
        }
    }

    /// Set the transcript returned for every file
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Configure the mock to fail every transcription
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.should_fail = true;
        self.failure_message = message.into();
        self
    }
}

impl Default for MockTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _path: &Path) -> TranscriptionResult<String> {
        if self.should_fail {
            return Err(TranscriptionError::processing_failed(
                &self.failure_message,
            ));
        }
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Mock emotion detection backend for testing
///
/// Returns a fixed label for every file, or a scripted failure.
#[derive(Debug, Clone)]
pub struct MockEmotionDetector {
    label: EmotionLabel,
    should_fail: bool,
    failure_message: String,
}

impl MockEmotionDetector {
    /// Create a new mock detector reporting a neutral tone
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: EmotionLabel::Neutral,
            should_fail: false,
            failure_message: "Mock failure".to_string(),
        }
    }

    /// Set the label returned for every file
    #[must_use]
    pub const fn with_emotion(mut self, label: EmotionLabel) -> Self {
        self.label = label;
        self
    }

    /// Configure the mock to fail every detection
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.should_fail = true;
        self.failure_message = message.into();
        self
    }
}

impl Default for MockEmotionDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmotionDetector for MockEmotionDetector {
    async fn detect(&self, _path: &Path) -> EmotionResult<EmotionLabel> {
        if self.should_fail {
            return Err(EmotionError::analysis_failed(&self.failure_message));
        }
        Ok(self.label)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_mock_transcriber_returns_configured_text() {
        let transcriber = MockTranscriber::new().with_text("send me a gift card");
        let text = transcriber
            .transcribe(&PathBuf::from("/test/audio.wav"))
            .await
            .unwrap();
        assert_eq!(text, "send me a gift card");
    }

    #[tokio::test]
    async fn test_mock_transcriber_is_deterministic() {
        let transcriber = MockTranscriber::new();
        let path = PathBuf::from("/test/audio.wav");
        let first = transcriber.transcribe(&path).await.unwrap();
        let second = transcriber.transcribe(&path).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_mock_transcriber_failure() {
        let transcriber = MockTranscriber::new().with_failure("model exploded");
        let result = transcriber
            .transcribe(&PathBuf::from("/test/audio.wav"))
            .await;
        assert!(matches!(
            result,
            Err(TranscriptionError::ProcessingFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_mock_detector_returns_configured_label() {
        let detector = MockEmotionDetector::new().with_emotion(EmotionLabel::Fear);
        let label = detector
            .detect(&PathBuf::from("/test/audio.wav"))
            .await
            .unwrap();
        assert_eq!(label, EmotionLabel::Fear);
    }

    #[tokio::test]
    async fn test_mock_detector_default_is_neutral() {
        let detector = MockEmotionDetector::new();
        let label = detector
            .detect(&PathBuf::from("/test/audio.wav"))
            .await
            .unwrap();
        assert_eq!(label, EmotionLabel::Neutral);
    }

    #[tokio::test]
    async fn test_mock_detector_failure() {
        let detector = MockEmotionDetector::new().with_failure("no model loaded");
        let result = detector.detect(&PathBuf::from("/test/audio.wav")).await;
        assert!(matches!(result, Err(EmotionError::AnalysisFailed { .. })));
    }

    #[test]
    fn test_mock_names() {
        assert_eq!(MockTranscriber::new().name(), "mock");
        assert_eq!(MockEmotionDetector::new().name(), "mock");
    }
}
