//! Application state management

use callshield_analyzer::{EmotionDetector, KeywordScanner, Transcriber};
use callshield_core::{Config, context_error, context_error::Result};
use image::Luma;
use qrcode::QrCode;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
///
/// Everything in here is immutable after startup; concurrent requests only
/// ever read it.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Directory holding per-request temporary uploads
    pub upload_dir: PathBuf,
    /// Transcription collaborator
    pub transcriber: Arc<dyn Transcriber>,
    /// Emotion detection collaborator
    pub emotion: Arc<dyn EmotionDetector>,
    /// Watchlist scanner
    pub scanner: KeywordScanner,
    /// QR code PNG for the public URL, rendered once at startup
    pub qr_png: Arc<Vec<u8>>,
}

impl AppState {
    /// Create new application state
    ///
    /// # Errors
    ///
    /// Returns an error if the upload directory cannot be created or the
    /// QR code cannot be rendered.
    pub fn new(
        config: Config,
        transcriber: Arc<dyn Transcriber>,
        emotion: Arc<dyn EmotionDetector>,
    ) -> Result<Self> {
        let upload_dir = config.storage.upload_dir.clone();

        // Ensure upload directory exists
        std::fs::create_dir_all(&upload_dir)?;

        let scanner = KeywordScanner::new(config.detection.keywords.clone());
        let qr_png = Arc::new(render_qr_png(&config.public_url())?);

        Ok(Self {
            config,
            upload_dir,
            transcriber,
            emotion,
            scanner,
            qr_png,
        })
    }

    /// Check that the application is properly configured
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<()> {
        // Check that upload directory exists and is writable
        if !self.upload_dir.exists() {
            return Err(context_error!(
                "Upload directory does not exist: {}",
                self.upload_dir.display()
            ));
        }

        // Try to create a test file to verify write permissions
        let test_file = self.upload_dir.join(".write_test");
        std::fs::write(&test_file, "test")?;
        std::fs::remove_file(&test_file)?;

        Ok(())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("upload_dir", &self.upload_dir)
            .field("transcriber", &self.transcriber.name())
            .field("emotion", &self.emotion.name())
            .finish_non_exhaustive()
    }
}

/// Render the application URL as a PNG QR code
fn render_qr_png(url: &str) -> Result<Vec<u8>> {
    let code = QrCode::new(url.as_bytes())
        .map_err(|e| context_error!("Failed to encode QR code: {}", e))?;

    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(240, 240)
        .build();

    let mut png = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut png),
        image::ImageFormat::Png,
    )
    .map_err(|e| context_error!("Failed to render QR PNG: {}", e))?;

    Ok(png)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use callshield_analyzer::{MockEmotionDetector, MockTranscriber};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_test_config(upload_dir: PathBuf) -> Config {
        let mut config = Config::default();
        config.storage.upload_dir = upload_dir;
        config
    }

    fn create_test_state(config: Config) -> AppState {
        AppState::new(
            config,
            Arc::new(MockTranscriber::new()),
            Arc::new(MockEmotionDetector::new()),
        )
        .expect("Failed to create AppState")
    }

    #[test]
    fn test_appstate_new_creates_upload_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let upload_dir = temp_dir.path().join("uploads");
        let state = create_test_state(create_test_config(upload_dir.clone()));

        assert!(upload_dir.exists());
        assert_eq!(state.upload_dir, upload_dir);
    }

    #[test]
    fn test_appstate_builds_scanner_from_config() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = create_test_config(temp_dir.path().join("uploads"));
        config.detection.keywords =
            vec!["gift card".to_string(), "wire transfer".to_string()];

        let state = create_test_state(config);
        assert_eq!(state.scanner.watchlist_len(), 2);
        assert_eq!(
            state.scanner.scan("buy a gift card"),
            vec!["gift card".to_string()]
        );
    }

    #[test]
    fn test_qr_png_has_png_signature() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let state = create_test_state(create_test_config(temp_dir.path().join("uploads")));

        assert!(state.qr_png.len() > 8);
        assert_eq!(&state.qr_png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_validate_success() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let state = create_test_state(create_test_config(temp_dir.path().join("uploads")));

        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_validate_nonexistent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let state = create_test_state(create_test_config(temp_dir.path().join("uploads")));

        std::fs::remove_dir_all(&state.upload_dir).expect("Failed to remove dir");

        let result = state.validate();
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("does not exist"));
    }

    #[test]
    fn test_render_qr_png_various_urls() {
        for url in [
            "http://127.0.0.1:5000/",
            "https://callshield.example/",
            "http://0.0.0.0:8080/",
        ] {
            let png = render_qr_png(url).expect("Failed to render QR");
            assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        }
    }

    #[test]
    fn test_appstate_clone_shares_qr() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let state1 = create_test_state(create_test_config(temp_dir.path().join("uploads")));
        let state2 = state1.clone();

        assert_eq!(state1.upload_dir, state2.upload_dir);
        assert!(Arc::ptr_eq(&state1.qr_png, &state2.qr_png));
    }
}
