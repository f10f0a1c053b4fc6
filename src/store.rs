//! Image metadata storage.
//!
//! Annotations live in a key-value slot attached to the image, keyed by a
//! numeric tag. [`SidecarStore`] keeps that slot in a JSON file next to the
//! image; [`MemoryStore`] keeps it in memory.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Metadata tag holding the annotation document.
pub const ANNOTATION_TAG: u16 = 65000;

/// Errors from reading or writing image metadata.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed metadata in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Value for tag {tag} is not valid UTF-8")]
    InvalidTag { tag: u16 },
}

/// The metadata slot of an image file.
pub trait MetadataStore {
    /// Bytes stored for `path`, or `None` if nothing is stored.
    fn load(&self, path: &Path) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `bytes` for `path`, replacing any previous value.
    fn save(&mut self, path: &Path, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Location of the sidecar file for an image: `<image>.meta.json`.
pub fn sidecar_path(image: &Path) -> PathBuf {
    let mut name = image.as_os_str().to_owned();
    name.push(".meta.json");
    PathBuf::from(name)
}

/// Metadata kept in a JSON sidecar file mapping tags to string values.
///
/// ```json
/// { "65000": "{\"boxes\": []}", "270": "scanned page" }
/// ```
///
/// Saving rewrites only this store's tag and leaves every other tag as it
/// was.
#[derive(Debug, Clone)]
pub struct SidecarStore {
    tag: u16,
}

type TagMap = BTreeMap<u16, String>;

impl SidecarStore {
    /// A store for [`ANNOTATION_TAG`].
    pub fn new() -> Self {
        Self::with_tag(ANNOTATION_TAG)
    }

    pub fn with_tag(tag: u16) -> Self {
        Self { tag }
    }

    pub fn tag(&self) -> u16 {
        self.tag
    }

    fn read_tags(path: &Path) -> Result<Option<TagMap>, StoreError> {
        let json = match std::fs::read(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_slice(&json)
            .map(Some)
            .map_err(|source| StoreError::Json {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Default for SidecarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataStore for SidecarStore {
    fn load(&self, path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
        let sidecar = sidecar_path(path);

        let tags = match Self::read_tags(&sidecar) {
            Ok(Some(tags)) => tags,
            Ok(None) => {
                log::debug!("No metadata sidecar at {:?}", sidecar);
                return Ok(None);
            }
            Err(StoreError::Json { path, source }) => {
                log::warn!("Ignoring unreadable metadata sidecar {:?}: {}", path, source);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(tags.get(&self.tag).map(|value| value.clone().into_bytes()))
    }

    fn save(&mut self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        let sidecar = sidecar_path(path);
        let value = String::from_utf8(bytes.to_vec())
            .map_err(|_| StoreError::InvalidTag { tag: self.tag })?;

        // Refuse to clobber a sidecar we cannot parse
        let mut tags = Self::read_tags(&sidecar)?.unwrap_or_default();
        tags.insert(self.tag, value);

        let json = serde_json::to_vec_pretty(&tags).map_err(|source| StoreError::Json {
            path: sidecar.clone(),
            source,
        })?;
        std::fs::write(&sidecar, json).map_err(|source| StoreError::Io {
            path: sidecar.clone(),
            source,
        })?;

        log::info!(
            "Wrote {} bytes to tag {} in {:?}",
            bytes.len(),
            self.tag,
            sidecar
        );
        Ok(())
    }
}

/// In-memory metadata, for tests and embedding.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tag: u16,
    entries: HashMap<PathBuf, BTreeMap<u16, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tag: ANNOTATION_TAG,
            entries: HashMap::new(),
        }
    }

    /// Seed a raw value under any tag.
    pub fn insert(&mut self, path: impl Into<PathBuf>, tag: u16, bytes: impl Into<Vec<u8>>) {
        self.entries
            .entry(path.into())
            .or_default()
            .insert(tag, bytes.into());
    }

    /// Raw value stored under `tag` for `path`.
    pub fn get(&self, path: &Path, tag: u16) -> Option<&[u8]> {
        self.entries.get(path)?.get(&tag).map(Vec::as_slice)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataStore for MemoryStore {
    fn load(&self, path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.get(path, self.tag).map(<[u8]>::to_vec))
    }

    fn save(&mut self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        self.insert(path, self.tag, bytes);
        Ok(())
    }
}
