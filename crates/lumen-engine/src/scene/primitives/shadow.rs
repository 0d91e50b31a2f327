use bytemuck::{Pod, Zeroable};

use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawOrder, Scene, SceneError};

use super::primitive;

/// Blurred rounded-rect drop shadow.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Shadow {
    pub order: DrawOrder,
    /// Gaussian blur radius in logical pixels.
    pub blur_radius: f32,
    pub bounds: Rect,
    pub corner_radii: CornerRadii,
    pub color: Color,
    pub clip: Rect,
}

primitive!(Shadow, Shadow, shadows);

impl Shadow {
    #[inline]
    pub fn new(bounds: Rect, corner_radii: CornerRadii, blur_radius: f32, color: Color) -> Self {
        Self {
            order: 0,
            blur_radius,
            bounds,
            corner_radii,
            color,
            clip: Rect::UNBOUNDED,
        }
    }

    /// Area the blurred shadow can touch: `bounds` grown by the blur radius.
    #[inline]
    pub fn paint_bounds(&self) -> Rect {
        let b = self.bounds.normalized();
        let r = self.blur_radius.max(0.0);
        Rect::new(b.origin.x - r, b.origin.y - r, b.size.x + 2.0 * r, b.size.y + 2.0 * r)
    }
}

impl Scene {
    /// Records a drop shadow.
    #[inline]
    pub fn insert_shadow(&mut self, shadow: Shadow) -> Result<DrawOrder, SceneError> {
        self.insert(shadow)
    }
}
