use bytemuck::{Pod, Zeroable};

use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawOrder, PrimitiveKind, Scene, SceneError};

use super::primitive;
use super::shadow::Shadow;

/// Filled, optionally rounded and bordered rectangle.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Quad {
    pub order: DrawOrder,
    /// Border stroke width in logical pixels, drawn inside `bounds`. `0` = none.
    pub border_width: f32,
    pub bounds: Rect,
    pub corner_radii: CornerRadii,
    pub background: Color,
    pub border_color: Color,
    pub clip: Rect,
}

primitive!(Quad, Quad, quads);

impl Quad {
    #[inline]
    pub fn new(bounds: Rect, background: Color) -> Self {
        Self {
            order: 0,
            border_width: 0.0,
            bounds,
            corner_radii: CornerRadii::zero(),
            background,
            border_color: Color::transparent(),
            clip: Rect::UNBOUNDED,
        }
    }

    #[inline]
    pub fn with_corner_radii(mut self, corner_radii: CornerRadii) -> Self {
        self.corner_radii = corner_radii;
        self
    }

    #[inline]
    pub fn with_border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width.max(0.0);
        self.border_color = color;
        self
    }
}

impl Scene {
    /// Records a quad.
    #[inline]
    pub fn insert_quad(&mut self, quad: Quad) -> Result<DrawOrder, SceneError> {
        self.insert(quad)
    }

    /// Records a solid, square-cornered rectangle.
    #[inline]
    pub fn insert_solid_quad(&mut self, bounds: Rect, color: Color) -> Result<DrawOrder, SceneError> {
        self.insert(Quad::new(bounds, color))
    }

    /// Records a rounded rectangle with a border.
    #[inline]
    pub fn insert_bordered_quad(
        &mut self,
        bounds: Rect,
        corner_radii: CornerRadii,
        background: Color,
        border_width: f32,
        border_color: Color,
    ) -> Result<DrawOrder, SceneError> {
        self.insert(
            Quad::new(bounds, background)
                .with_corner_radii(corner_radii)
                .with_border(border_width, border_color),
        )
    }

    /// Records a drop shadow immediately followed by the quad casting it.
    ///
    /// The shadow shares the quad's corner radii and sits at `bounds + offset`.
    /// If the quad has no room the shadow is not recorded either. A full shadow
    /// sequence only drops the shadow. Returns the quad's order token.
    pub fn insert_shadowed_quad(
        &mut self,
        quad: Quad,
        offset: Vec2,
        blur_radius: f32,
        shadow_color: Color,
    ) -> Result<DrawOrder, SceneError> {
        self.check_capacity(PrimitiveKind::Quad)?;

        let bounds = Rect::from_origin_size(quad.bounds.origin + offset, quad.bounds.size);
        let shadow = Shadow::new(bounds, quad.corner_radii, blur_radius, shadow_color);
        // A shadow dropped for capacity is cosmetic; the drop is already counted and logged.
        if let Err(err @ SceneError::OutOfMemory { .. }) = self.insert(shadow) {
            return Err(err);
        }
        self.insert(quad)
    }
}
