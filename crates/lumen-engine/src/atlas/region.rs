use bytemuck::{Pod, Zeroable};

/// Pixel-space rectangle inside a [`TextureAtlas`](super::TextureAtlas).
///
/// Regions are returned without their padding margin.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct AtlasRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasRegion {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Grows the region right and down by `padding`, matching how the packer
    /// reserves space.
    #[inline]
    pub const fn padded(self, padding: u32) -> Self {
        Self::new(self.x, self.y, self.width + padding, self.height + padding)
    }

    /// True if the two regions share at least one pixel.
    #[inline]
    pub fn intersects(self, other: AtlasRegion) -> bool {
        let (ax1, ay1) = (u64::from(self.x) + u64::from(self.width), u64::from(self.y) + u64::from(self.height));
        let (bx1, by1) = (u64::from(other.x) + u64::from(other.width), u64::from(other.y) + u64::from(other.height));
        u64::from(self.x) < bx1
            && u64::from(other.x) < ax1
            && u64::from(self.y) < by1
            && u64::from(other.y) < ay1
    }
}

/// Pixel format of an atlas buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum AtlasFormat {
    /// One coverage byte per pixel (monochrome glyphs, icon masks).
    #[default]
    Alpha8,
    /// Four bytes per pixel, RGBA (color emoji, images).
    Rgba8,
}

impl AtlasFormat {
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            AtlasFormat::Alpha8 => 1,
            AtlasFormat::Rgba8 => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_regions_do_not_intersect() {
        let a = AtlasRegion::new(0, 0, 10, 10);
        assert!(!a.intersects(AtlasRegion::new(10, 0, 5, 5)));
        assert!(!a.intersects(AtlasRegion::new(0, 10, 5, 5)));
    }

    #[test]
    fn overlapping_regions_intersect() {
        let a = AtlasRegion::new(0, 0, 10, 10);
        assert!(a.intersects(AtlasRegion::new(9, 9, 5, 5)));
        assert!(AtlasRegion::new(2, 2, 1, 1).intersects(a));
    }

    #[test]
    fn padded_extends_right_and_down() {
        assert_eq!(AtlasRegion::new(4, 5, 6, 7).padded(1), AtlasRegion::new(4, 5, 7, 8));
    }
}
