/// Framebuffer size in logical pixels.
///
/// Backends multiply by the display scale factor to get physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Physical framebuffer size at `scale`, at least 1×1.
    #[inline]
    pub fn physical_size(self, scale: f32) -> (u32, u32) {
        ((self.width * scale).max(1.0) as u32, (self.height * scale).max(1.0) as u32)
    }

    /// The whole viewport as a logical rect at the origin.
    #[inline]
    pub fn bounds(self) -> crate::coords::Rect {
        crate::coords::Rect::new(0.0, 0.0, self.width, self.height)
    }
}
