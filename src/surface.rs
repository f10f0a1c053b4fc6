//! Image surface: the dimensions of the opened image and of its on-screen
//! display.

use std::fmt;
use std::path::{Path, PathBuf};

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Scale this size to fit inside `bounds`, keeping the aspect ratio.
    ///
    /// The result touches `bounds` on at least one axis. Returns a zero size
    /// when either input is empty.
    pub fn fit_within(self, bounds: Size) -> Size {
        if self.is_empty() || bounds.is_empty() {
            return Size::new(0, 0);
        }

        let sx = bounds.width as f64 / self.width as f64;
        let sy = bounds.height as f64 / self.height as f64;
        let scale = sx.min(sy);

        Size::new(
            ((self.width as f64 * scale).round() as u32).clamp(1, bounds.width),
            ((self.height as f64 * scale).round() as u32).clamp(1, bounds.height),
        )
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// An image opened for annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub size: Size,
}

impl ImageInfo {
    pub fn new(path: impl Into<PathBuf>, size: Size) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Read the image dimensions from its header.
    ///
    /// The format is guessed from the file contents, not the extension.
    pub fn probe(path: &Path) -> Result<Self, image::ImageError> {
        let (width, height) = image::ImageReader::open(path)?
            .with_guessed_format()?
            .into_dimensions()?;
        log::debug!("Probed {:?}: {}x{}", path, width, height);
        Ok(Self::new(path, Size::new(width, height)))
    }
}
