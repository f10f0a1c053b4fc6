//! Encoding and decoding of the annotation document.
//!
//! The document is UTF-8 JSON of the form `{"boxes": [...]}` (see
//! [`document`]). It carries no version field. Decoding is tolerant: extra
//! keys are ignored, and anything unreadable decodes to an empty collection
//! so that opening an image never fails because of its annotations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boxtext::format;
//!
//! let bytes = format::encode(&shapes)?;
//! let restored = format::decode(Some(&bytes));
//! assert_eq!(restored, shapes);
//! ```

pub mod document;
mod error;

#[cfg(test)]
mod tests;

pub use document::{AnnotationDocument, ShapeRecord};
pub use error::FormatError;

use crate::model::ShapeCollection;

/// Serialize a collection to the document bytes, in collection order.
pub fn encode(shapes: &ShapeCollection) -> Result<Vec<u8>, FormatError> {
    let document = AnnotationDocument::from(shapes);
    let bytes = serde_json::to_vec(&document)?;
    log::debug!(
        "Encoded {} shapes into {} bytes",
        document.boxes.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Parse document bytes, reporting why they could not be read.
pub fn try_decode(bytes: &[u8]) -> Result<ShapeCollection, FormatError> {
    let document: AnnotationDocument = serde_json::from_slice(bytes)?;
    Ok(ShapeCollection::from(document))
}

/// Parse document bytes, falling back to an empty collection.
///
/// Absent bytes mean the image has no annotations yet. Malformed JSON or
/// missing required fields are logged and also yield an empty collection.
pub fn decode(bytes: Option<&[u8]>) -> ShapeCollection {
    let Some(bytes) = bytes else {
        log::debug!("No stored annotations, starting empty");
        return ShapeCollection::new();
    };

    match try_decode(bytes) {
        Ok(shapes) => {
            log::info!("Decoded {} stored shapes", shapes.len());
            shapes
        }
        Err(e) => {
            log::warn!("Ignoring unreadable annotations: {}", e);
            ShapeCollection::new()
        }
    }
}

impl ShapeCollection {
    /// See [`encode`].
    pub fn encode(&self) -> Result<Vec<u8>, FormatError> {
        encode(self)
    }

    /// See [`decode`].
    pub fn decode(bytes: Option<&[u8]>) -> ShapeCollection {
        decode(bytes)
    }
}
