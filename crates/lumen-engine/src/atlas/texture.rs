use super::skyline::{Skyline, SkylineNode};
use super::{AtlasError, AtlasFormat, AtlasRegion};

/// Construction parameters for a [`TextureAtlas`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AtlasConfig {
    /// Side length of the initial buffer. Must be a power of two.
    pub initial_size: u32,
    /// Hard cap for [`TextureAtlas::grow`]. Must be a power of two `>= initial_size`.
    pub max_size: u32,
    /// Margin added right and below every reservation to stop filtering bleed.
    pub padding: u32,
    pub format: AtlasFormat,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            initial_size: 512,
            max_size: 4096,
            padding: 1,
            format: AtlasFormat::Alpha8,
        }
    }
}

impl AtlasConfig {
    fn validate(&self) -> Result<(), AtlasError> {
        if self.initial_size == 0 || !self.initial_size.is_power_of_two() {
            return Err(AtlasError::InvalidConfig("initial_size must be a non-zero power of two"));
        }
        if !self.max_size.is_power_of_two() {
            return Err(AtlasError::InvalidConfig("max_size must be a power of two"));
        }
        if self.max_size < self.initial_size {
            return Err(AtlasError::InvalidConfig("max_size must be >= initial_size"));
        }
        Ok(())
    }
}

/// Growable square texture atlas backed by a skyline packer.
///
/// The atlas owns a CPU copy of the pixels. Backends upload it (or the dirty part
/// of it) whenever [`generation`](Self::generation) differs from the value they
/// last saw; every mutating call bumps it, reads never do.
///
/// Pixel slices returned by [`pixels`](Self::pixels) borrow the atlas, so they
/// cannot outlive a [`grow`](Self::grow).
#[derive(Debug)]
pub struct TextureAtlas {
    config: AtlasConfig,
    size: u32,
    pixels: Vec<u8>,
    skyline: Skyline,
    generation: u64,
}

impl TextureAtlas {
    pub fn new(config: AtlasConfig) -> Result<Self, AtlasError> {
        config.validate()?;
        let pixels = alloc_zeroed(config.initial_size, config.format)?;
        log::debug!(
            "texture atlas created: {0}x{0} {1:?}, max {2}",
            config.initial_size,
            config.format,
            config.max_size
        );
        Ok(Self {
            size: config.initial_size,
            skyline: Skyline::new(config.initial_size),
            pixels,
            config,
            generation: 0,
        })
    }

    // ── reads ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn max_size(&self) -> u32 {
        self.config.max_size
    }

    #[inline]
    pub fn format(&self) -> AtlasFormat {
        self.config.format
    }

    #[inline]
    pub fn padding(&self) -> u32 {
        self.config.padding
    }

    /// Monotonic change counter. Bumped by every successful mutation.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The whole buffer, `size * size * bytes_per_pixel` bytes, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One row of the buffer, or `None` past the bottom edge.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.size {
            return None;
        }
        let stride = self.stride();
        let start = y as usize * stride;
        self.pixels.get(start..start + stride)
    }

    /// Current skyline, sorted by `x`.
    #[inline]
    pub fn skyline(&self) -> &[SkylineNode] {
        self.skyline.nodes()
    }

    /// Normalized `[u0, v0, u1, v1]` texture coordinates of `region` at the current size.
    ///
    /// Must be recomputed after [`grow`](Self::grow): pixel positions survive a grow,
    /// normalized ones do not.
    pub fn uv_rect(&self, region: AtlasRegion) -> [f32; 4] {
        let s = self.size as f32;
        [
            region.x as f32 / s,
            region.y as f32 / s,
            (region.x + region.width) as f32 / s,
            (region.y + region.height) as f32 / s,
        ]
    }

    // ── mutation ───────────────────────────────────────────────────────────

    /// Reserves a `width × height` region.
    ///
    /// The packer sees the size inflated by [`padding`](Self::padding); the
    /// returned region is the un-padded top-left part. Does not grow the atlas.
    pub fn reserve(&mut self, width: u32, height: u32) -> Result<AtlasRegion, AtlasError> {
        if width == 0 || height == 0 {
            return Err(AtlasError::InvalidSize { width, height });
        }
        let no_space = AtlasError::NoSpace { width, height };
        let padded_w = width.checked_add(self.config.padding).ok_or(no_space.clone())?;
        let padded_h = height.checked_add(self.config.padding).ok_or(no_space.clone())?;

        let (x, y) = self.skyline.pack(padded_w, padded_h).ok_or(no_space)?;
        self.bump();
        Ok(AtlasRegion::new(x, y, width, height))
    }

    /// Copies `pixels` (tightly packed rows of `region.width` pixels) into `region`.
    pub fn set(&mut self, region: AtlasRegion, pixels: &[u8]) -> Result<(), AtlasError> {
        let right = u64::from(region.x) + u64::from(region.width);
        let bottom = u64::from(region.y) + u64::from(region.height);
        if right > u64::from(self.size) || bottom > u64::from(self.size) {
            return Err(AtlasError::OutOfBounds { region, size: self.size });
        }

        let bpp = self.config.format.bytes_per_pixel();
        let src_stride = region.width as usize * bpp;
        let expected = src_stride * region.height as usize;
        if pixels.len() != expected {
            return Err(AtlasError::PixelLength { expected, actual: pixels.len() });
        }

        let dst_stride = self.stride();
        let x_offset = region.x as usize * bpp;
        if src_stride > 0 {
            for (row, src) in pixels.chunks_exact(src_stride).enumerate() {
                let start = (region.y as usize + row) * dst_stride + x_offset;
                self.pixels[start..start + src_stride].copy_from_slice(src);
            }
        }

        self.bump();
        Ok(())
    }

    /// Doubles the side length, keeping existing pixels at the top-left.
    ///
    /// Regions stay valid in pixel space; normalized UVs must be recomputed.
    pub fn grow(&mut self) -> Result<(), AtlasError> {
        let max_size = self.config.max_size;
        let new_size = self
            .size
            .checked_mul(2)
            .filter(|&s| s <= max_size)
            .ok_or(AtlasError::MaxSize { max_size })?;

        let mut next = alloc_zeroed(new_size, self.config.format)?;
        let old_stride = self.stride();
        let new_stride = new_size as usize * self.config.format.bytes_per_pixel();
        for (row, src) in self.pixels.chunks_exact(old_stride).enumerate() {
            let start = row * new_stride;
            next[start..start + old_stride].copy_from_slice(src);
        }

        log::debug!("texture atlas grown: {0}x{0} -> {1}x{1}", self.size, new_size);
        self.pixels = next;
        self.skyline.extend(new_size);
        self.size = new_size;
        self.bump();
        Ok(())
    }

    /// Zeroes the buffer and forgets every reservation. The size is kept.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
        self.skyline.reset(self.size);
        self.bump();
    }

    /// Reserves space for `pixels`, growing as needed, and uploads them.
    ///
    /// Growth stops at `max_size`; a request that still does not fit returns
    /// [`AtlasError::NoSpace`]. A request whose padded size exceeds `max_size`
    /// fails before growing and leaves the atlas unchanged. Otherwise the atlas
    /// may have grown by the time `NoSpace` is returned.
    pub fn allocate(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<AtlasRegion, AtlasError> {
        let expected = width as usize * height as usize * self.config.format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(AtlasError::PixelLength { expected, actual: pixels.len() });
        }

        let max_size = u64::from(self.config.max_size);
        let padding = u64::from(self.config.padding);
        if u64::from(width) + padding > max_size || u64::from(height) + padding > max_size {
            log::warn!(
                "{width}x{height} region can never fit a {max_size}x{max_size} texture atlas"
            );
            return Err(AtlasError::NoSpace { width, height });
        }

        loop {
            match self.reserve(width, height) {
                Ok(region) => {
                    self.set(region, pixels)?;
                    return Ok(region);
                }
                Err(AtlasError::NoSpace { .. }) if self.size < self.config.max_size => {
                    self.grow()?;
                }
                Err(err) => {
                    if err.is_capacity() {
                        log::warn!(
                            "texture atlas is full ({0}x{0}); dropping {1}x{2} region",
                            self.size,
                            width,
                            height
                        );
                    }
                    return Err(err);
                }
            }
        }
    }

    #[inline]
    fn stride(&self) -> usize {
        self.size as usize * self.config.format.bytes_per_pixel()
    }

    #[inline]
    fn bump(&mut self) {
        self.generation += 1;
    }
}

fn alloc_zeroed(size: u32, format: AtlasFormat) -> Result<Vec<u8>, AtlasError> {
    let bytes = (size as usize)
        .checked_mul(size as usize)
        .and_then(|n| n.checked_mul(format.bytes_per_pixel()))
        .ok_or(AtlasError::OutOfMemory { bytes: usize::MAX })?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(bytes)
        .map_err(|_| AtlasError::OutOfMemory { bytes })?;
    pixels.resize(bytes, 0);
    Ok(pixels)
}
