use std::fmt;

use super::AtlasRegion;

/// Error returned by [`TextureAtlas`](super::TextureAtlas) operations.
///
/// `NoSpace` and `MaxSize` are capacity conditions: callers drop the glyph /
/// icon for this frame and carry on. `OutOfMemory` is the only variant that
/// should fail a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtlasError {
    /// No skyline position fits the padded rectangle at the current size.
    NoSpace { width: u32, height: u32 },
    /// Zero-sized reservation request.
    InvalidSize { width: u32, height: u32 },
    /// `set` targeted a region that is not inside the buffer.
    OutOfBounds { region: AtlasRegion, size: u32 },
    /// `set` was given a pixel slice whose length does not match the region.
    PixelLength { expected: usize, actual: usize },
    /// `grow` would exceed the configured maximum side length.
    MaxSize { max_size: u32 },
    /// The pixel buffer could not be allocated.
    OutOfMemory { bytes: usize },
    /// The atlas configuration is unusable.
    InvalidConfig(&'static str),
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::NoSpace { width, height } => {
                write!(f, "no atlas space for a {width}x{height} region")
            }
            AtlasError::InvalidSize { width, height } => {
                write!(f, "invalid atlas region size {width}x{height}")
            }
            AtlasError::OutOfBounds { region, size } => write!(
                f,
                "region {}x{} at ({}, {}) lies outside the {size}x{size} atlas",
                region.width, region.height, region.x, region.y
            ),
            AtlasError::PixelLength { expected, actual } => {
                write!(f, "expected {expected} pixel bytes, got {actual}")
            }
            AtlasError::MaxSize { max_size } => {
                write!(f, "atlas is already at its maximum size ({max_size}x{max_size})")
            }
            AtlasError::OutOfMemory { bytes } => {
                write!(f, "failed to allocate {bytes} bytes for the atlas")
            }
            AtlasError::InvalidConfig(reason) => write!(f, "invalid atlas config: {reason}"),
        }
    }
}

impl std::error::Error for AtlasError {}

impl AtlasError {
    /// True for the fail-soft capacity conditions (`NoSpace`, `MaxSize`).
    #[inline]
    pub fn is_capacity(&self) -> bool {
        matches!(self, AtlasError::NoSpace { .. } | AtlasError::MaxSize { .. })
    }
}
