//! Crate-level error type.

use crate::config::ConfigError;
use crate::format::FormatError;
use crate::store::StoreError;

/// Errors from operations that touch the filesystem or decode images.
///
/// Editing operations never fail; they are no-ops when they do not apply.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Metadata store error: {0}")]
    Store(#[from] StoreError),

    #[error("Annotation format error: {0}")]
    Format(#[from] FormatError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No image is open")]
    NoImage,
}

pub type Result<T> = std::result::Result<T, Error>;
