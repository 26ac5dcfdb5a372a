//! Configuration management for `CallShield`
//!
//! All configuration is loaded once at process start and treated as
//! immutable afterwards; the running service only ever sees it behind
//! shared application state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upload storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Scam detection configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Externally reachable URL of this service, encoded into the QR code.
    /// Defaults to the bound host and port when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

/// Upload storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where uploads are written for the duration of one request
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Maximum upload size in bytes
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,

    /// Allowed file extensions
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

/// Scam detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Scam-indicator keyword watchlist matched against transcripts
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Transcription backend ("http" or "mock")
    #[serde(default = "default_transcriber")]
    pub transcriber: String,

    /// Speech-to-text sidecar URL, required when `transcriber` is "http"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stt_url: Option<String>,

    /// Transcription request timeout in seconds
    #[serde(default = "default_stt_timeout")]
    pub stt_timeout_seconds: u64,

    /// Emotion detection backend ("heuristic" or "mock")
    #[serde(default = "default_emotion_backend")]
    pub emotion: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("./data/uploads")
}

const fn default_max_upload_size() -> u64 {
    25_000_000 // 25MB
}

fn default_allowed_extensions() -> Vec<String> {
    ["wav", "mp3", "flac", "m4a", "ogg"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_keywords() -> Vec<String> {
    [
        "wire transfer",
        "gift card",
        "social security number",
        "bank account",
        "verification code",
        "bitcoin",
        "arrest warrant",
        "irs",
        "act now",
        "western union",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_transcriber() -> String {
    "mock".to_string()
}

const fn default_stt_timeout() -> u64 {
    120
}

fn default_emotion_backend() -> String {
    "heuristic".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_upload_size: default_max_upload_size(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            transcriber: default_transcriber(),
            stt_url: None,
            stt_timeout_seconds: default_stt_timeout(),
            emotion: default_emotion_backend(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            detection: DetectionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CALLSHIELD").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }

    /// URL encoded into the QR code, falling back to the bound address.
    #[must_use]
    pub fn public_url(&self) -> String {
        self.server.public_url.clone().unwrap_or_else(|| {
            format!("http://{}:{}/", self.server.host, self.server.port)
        })
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.public_url.is_none());

        assert_eq!(config.storage.upload_dir, PathBuf::from("./data/uploads"));
        assert_eq!(config.storage.max_upload_size, 25_000_000);
        assert!(
            config
                .storage
                .allowed_extensions
                .contains(&"wav".to_string())
        );
        assert!(
            config
                .storage
                .allowed_extensions
                .contains(&"mp3".to_string())
        );

        assert!(!config.detection.keywords.is_empty());
        assert_eq!(config.detection.transcriber, "mock");
        assert!(config.detection.stt_url.is_none());
        assert_eq!(config.detection.emotion, "heuristic");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_default_watchlist_entries() {
        let config = Config::default();
        let keywords = &config.detection.keywords;

        assert!(keywords.contains(&"gift card".to_string()));
        assert!(keywords.contains(&"wire transfer".to_string()));
        assert!(keywords.contains(&"social security number".to_string()));
    }

    #[test]
    fn test_public_url_fallback() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 5000;

        assert_eq!(config.public_url(), "http://127.0.0.1:5000/");
    }

    #[test]
    fn test_public_url_explicit() {
        let mut config = Config::default();
        config.server.public_url = Some("https://callshield.example/".to_string());

        assert_eq!(config.public_url(), "https://callshield.example/");
    }

    #[test]
    fn test_config_deserialization_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.detection.stt_timeout_seconds, 120);
        assert!(!config.detection.keywords.is_empty());
    }

    #[test]
    fn test_config_deserialization_partial_override() {
        let config: Config = serde_json::from_str(
            r#"{
                "server": {"port": 3000},
                "detection": {"keywords": ["gift card"], "transcriber": "http",
                              "stt_url": "http://localhost:9000/transcribe"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.detection.keywords, vec!["gift card".to_string()]);
        assert_eq!(config.detection.transcriber, "http");
        assert_eq!(
            config.detection.stt_url.as_deref(),
            Some("http://localhost:9000/transcribe")
        );
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(back.server.host, config.server.host);
        assert_eq!(back.storage.max_upload_size, config.storage.max_upload_size);
        assert_eq!(back.detection.keywords, config.detection.keywords);
    }
}
