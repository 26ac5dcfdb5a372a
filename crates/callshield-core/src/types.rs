//! Shared domain types for call analysis

use serde::{Deserialize, Serialize};

/// Emotion label produced by the emotion detection collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    /// No notable emotional tone
    Neutral,
    /// Positive, upbeat tone
    Happy,
    /// Subdued, low-energy tone
    Sad,
    /// Distressed, frightened tone
    Fear,
    /// Agitated, aggressive tone
    Anger,
    /// Repulsed tone
    Disgust,
    /// Startled tone
    Surprise,
    /// Emotion inference unavailable or failed
    Unknown,
}

impl Default for EmotionLabel {
    fn default() -> Self {
        Self::Unknown
    }
}

impl EmotionLabel {
    /// Whether this label belongs to the distress trigger set used by
    /// the scam verdict.
    #[must_use]
    pub const fn is_distress(self) -> bool {
        matches!(self, Self::Fear | Self::Anger)
    }

    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Fear => "fear",
            Self::Anger => "anger",
            Self::Disgust => "disgust",
            Self::Surprise => "surprise",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of analyzing one uploaded call recording
///
/// Constructed once per request and rendered back to the user; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Best-effort transcript of the recording (empty when transcription
    /// failed or the audio was unintelligible)
    pub transcription: String,

    /// Watchlist entries found in the transcript, in watchlist order
    pub keywords_found: Vec<String>,

    /// Emotional tone estimated from the audio
    pub emotion_detected: EmotionLabel,

    /// Combined verdict
    pub scam_detected: bool,
}
