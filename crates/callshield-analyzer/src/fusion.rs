//! Scam signal fusion

use callshield_core::{AnalysisResult, EmotionLabel};

/// Combine keyword and emotion evidence into the scam verdict
///
/// A call is flagged when either signal fires: any watchlist keyword in the
/// transcript, or a distress emotion (fear or anger) in the audio. The OR
/// biases the detector toward recall over precision. An empty transcript
/// (failed or silent transcription) simply contributes no keyword evidence;
/// the verdict then rests on emotion alone.
#[must_use]
pub fn fuse(keywords_found: &[String], emotion: EmotionLabel) -> bool {
    !keywords_found.is_empty() || emotion.is_distress()
}

/// Assemble the final analysis record for one request
#[must_use]
pub fn analyze(
    transcription: String,
    keywords_found: Vec<String>,
    emotion_detected: EmotionLabel,
) -> AnalysisResult {
    let scam_detected = fuse(&keywords_found, emotion_detected);
    AnalysisResult {
        transcription,
        keywords_found,
        emotion_detected,
        scam_detected,
    }
}
