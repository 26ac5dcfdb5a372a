//! Filename and upload validation utilities

use crate::{Error, Result};
use std::path::Path;

/// Validate an uploaded filename against the allowed extension set
///
/// Pure predicate: rejects an empty filename, a filename without an
/// extension or without a base name, and any extension (compared
/// case-insensitively) outside the allowed set.
///
/// # Errors
///
/// Returns `Error::Validation` describing the failing check.
pub fn validate_upload_filename(filename: &str, allowed: &[String]) -> Result<()> {
    if filename.is_empty() {
        return Err(Error::Validation {
            field: "filename".to_string(),
            message: "filename is empty".to_string(),
        });
    }

    let path = Path::new(filename);

    let stem_is_empty = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_none_or(str::is_empty);
    if stem_is_empty {
        return Err(Error::Validation {
            field: "filename".to_string(),
            message: "filename has no base name".to_string(),
        });
    }

    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return Err(Error::Validation {
            field: "filename".to_string(),
            message: "filename has no extension".to_string(),
        });
    };

    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(extension)) {
        return Err(Error::Validation {
            field: "filename".to_string(),
            message: format!("extension '{}' is not allowed", extension.to_lowercase()),
        });
    }

    Ok(())
}

/// Generate a collision-resistant storage filename for an upload
///
/// The storage key is a random UUID plus the lowercased extension of the
/// original name; no user-supplied text ever reaches the filesystem path.
#[must_use]
pub fn generate_storage_filename(original: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    let extension = Path::new(original)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or_else(|| "bin".to_string(), str::to_lowercase);

    format!("{uuid}.{extension}")
}

/// Sanitize a filename for safe display or logging
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            // Keep alphanumeric, dots, underscores, and hyphens
            if c.is_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}
