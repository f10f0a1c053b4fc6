//! Error types for annotation document encoding and decoding.

use thiserror::Error;

/// Errors that can occur while reading or writing an annotation document.
#[derive(Error, Debug)]
pub enum FormatError {
    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Required field is missing
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: String,
    },
}

impl FormatError {
    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
