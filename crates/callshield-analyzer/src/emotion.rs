//! Emotion detection collaborator seam and the built-in prosody heuristic

use crate::error::{EmotionError, EmotionResult};
use async_trait::async_trait;
use callshield_core::EmotionLabel;
use std::path::Path;
use tracing::debug;

/// Interface for emotion detection backends
///
/// Given a readable audio file path, a backend returns one label from the
/// fixed emotion set. Calls may block for the duration of model inference.
#[async_trait]
pub trait EmotionDetector: Send + Sync {
    /// Estimate the dominant emotional tone of the recording at `path`
    async fn detect(&self, path: &Path) -> EmotionResult<EmotionLabel>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Prosody features extracted from a decoded recording
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProsodyFeatures {
    /// Root-mean-square energy of the normalized samples
    pub energy_rms: f32,
    /// Zero-crossing-rate pitch proxy in Hz
    pub pitch_hz: f32,
}

/// WAV prosody heuristic standing in for a real affect model
///
/// Decodes the recording with `hound`, computes RMS energy and a
/// zero-crossing pitch proxy, and maps the two onto the label set with
/// crude thresholds. Non-WAV input yields `EmotionLabel::Unknown` rather
/// than an error, since the signal is merely unavailable.
#[derive(Debug, Default)]
pub struct HeuristicEmotionDetector;

/// Quiet recordings below this RMS carry no usable affect signal
const SILENCE_RMS: f32 = 0.015;
/// RMS above this counts as a raised voice
const LOUD_RMS: f32 = 0.12;
/// Pitch proxy above this counts as high-pitched speech
const HIGH_PITCH_HZ: f32 = 180.0;

impl HeuristicEmotionDetector {
    /// Create a new heuristic detector
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extract prosody features from a WAV file
    fn extract_features(path: &Path) -> EmotionResult<ProsodyFeatures> {
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => {
                reader.samples::<f32>().collect::<Result<_, _>>()?
            }
            hound::SampleFormat::Int => {
                let scale = (1_i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / scale))
                    .collect::<Result<_, _>>()?
            }
        };

        if samples.is_empty() {
            return Err(EmotionError::analysis_failed("recording contains no samples"));
        }

        let energy_rms =
            (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt();

        let crossings = samples
            .windows(2)
            .filter(|w| (w[0] >= 0.0) != (w[1] >= 0.0))
            .count();
        // Interleaved channels are treated as one stream; close enough for a
        // coarse pitch proxy.
        let duration_secs =
            samples.len() as f32 / (spec.sample_rate as f32 * f32::from(spec.channels));
        let pitch_hz = crossings as f32 / (2.0 * duration_secs * f32::from(spec.channels));

        Ok(ProsodyFeatures {
            energy_rms,
            pitch_hz,
        })
    }

    /// Map prosody features onto the emotion label set
    fn classify(features: ProsodyFeatures) -> EmotionLabel {
        if features.energy_rms < SILENCE_RMS {
            return EmotionLabel::Neutral;
        }

        let loud = features.energy_rms > LOUD_RMS;
        let high_pitched = features.pitch_hz > HIGH_PITCH_HZ;

        match (loud, high_pitched) {
            (true, true) => EmotionLabel::Fear,
            (true, false) => EmotionLabel::Anger,
            (false, true) => EmotionLabel::Happy,
            (false, false) => EmotionLabel::Neutral,
        }
    }

    fn is_wav(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
    }
}

#[async_trait]
impl EmotionDetector for HeuristicEmotionDetector {
    async fn detect(&self, path: &Path) -> EmotionResult<EmotionLabel> {
        if !path.exists() {
            return Err(EmotionError::file_not_found(path));
        }

        if !Self::is_wav(path) {
            debug!("Prosody heuristic only decodes WAV, reporting unknown emotion");
            return Ok(EmotionLabel::Unknown);
        }

        let features = Self::extract_features(path)?;
        let label = Self::classify(features);

        debug!(
            "Prosody features: rms={:.4} pitch={:.1}Hz -> {}",
            features.energy_rms, features.pitch_hz, label
        );

        Ok(label)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;
    use std::path::PathBuf;

    /// Write a mono 16-bit WAV sine wave and return its path
    fn write_sine_wav(dir: &Path, name: &str, freq: f32, amplitude: f32) -> PathBuf {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let path = dir.join(name);
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for t in 0..16_000 {
            let value = (TAU * freq * t as f32 / 16_000.0).sin() * amplitude;
            writer.write_sample((value * 32767.0) as i16).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    fn write_silent_wav(dir: &Path, name: &str) -> PathBuf {
        write_sine_wav(dir, name, 440.0, 0.0)
    }

    #[tokio::test]
    async fn test_loud_high_pitch_maps_to_fear() {
        let dir = tempfile::tempdir().unwrap();
        // 440 Hz sine at half amplitude: rms ~0.35, pitch proxy ~440 Hz
        let path = write_sine_wav(dir.path(), "fear.wav", 440.0, 0.5);

        let detector = HeuristicEmotionDetector::new();
        let label = detector.detect(&path).await.unwrap();
        assert_eq!(label, EmotionLabel::Fear);
    }

    #[tokio::test]
    async fn test_loud_low_pitch_maps_to_anger() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sine_wav(dir.path(), "anger.wav", 90.0, 0.5);

        let detector = HeuristicEmotionDetector::new();
        let label = detector.detect(&path).await.unwrap();
        assert_eq!(label, EmotionLabel::Anger);
    }

    #[tokio::test]
    async fn test_moderate_high_pitch_maps_to_happy() {
        let dir = tempfile::tempdir().unwrap();
        // rms of a sine at amplitude 0.1 is ~0.07: above silence, below loud
        let path = write_sine_wav(dir.path(), "happy.wav", 300.0, 0.1);

        let detector = HeuristicEmotionDetector::new();
        let label = detector.detect(&path).await.unwrap();
        assert_eq!(label, EmotionLabel::Happy);
    }

    #[tokio::test]
    async fn test_silence_maps_to_neutral() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_silent_wav(dir.path(), "silence.wav");

        let detector = HeuristicEmotionDetector::new();
        let label = detector.detect(&path).await.unwrap();
        assert_eq!(label, EmotionLabel::Neutral);
    }

    #[tokio::test]
    async fn test_non_wav_reports_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("call.mp3");
        std::fs::write(&path, b"not really audio").unwrap();

        let detector = HeuristicEmotionDetector::new();
        let label = detector.detect(&path).await.unwrap();
        assert_eq!(label, EmotionLabel::Unknown);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let detector = HeuristicEmotionDetector::new();
        let result = detector.detect(Path::new("/nonexistent/call.wav")).await;
        assert!(matches!(result, Err(EmotionError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_corrupt_wav_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.wav");
        std::fs::write(&path, b"RIFFgarbage").unwrap();

        let detector = HeuristicEmotionDetector::new();
        let result = detector.detect(&path).await;
        assert!(matches!(result, Err(EmotionError::Decode(_))));
    }

    #[test]
    fn test_classify_thresholds() {
        let quiet = ProsodyFeatures {
            energy_rms: 0.001,
            pitch_hz: 500.0,
        };
        assert_eq!(
            HeuristicEmotionDetector::classify(quiet),
            EmotionLabel::Neutral
        );

        let moderate_low = ProsodyFeatures {
            energy_rms: 0.05,
            pitch_hz: 100.0,
        };
        assert_eq!(
            HeuristicEmotionDetector::classify(moderate_low),
            EmotionLabel::Neutral
        );

        let loud_low = ProsodyFeatures {
            energy_rms: 0.3,
            pitch_hz: 100.0,
        };
        assert_eq!(
            HeuristicEmotionDetector::classify(loud_low),
            EmotionLabel::Anger
        );
    }

    #[test]
    fn test_detector_name() {
        assert_eq!(HeuristicEmotionDetector::new().name(), "heuristic");
    }
}
