use bytemuck::{Pod, Zeroable};

use crate::atlas::AtlasRegion;
use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawOrder, Scene, SceneError};

use super::primitive;

/// Rasterized vector icon. The atlas holds coverage; `color` tints it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SvgTile {
    pub order: DrawOrder,
    pub bounds: Rect,
    pub tile: AtlasRegion,
    pub color: Color,
    pub clip: Rect,
}

primitive!(SvgTile, SvgTile, svg_tiles);

impl SvgTile {
    #[inline]
    pub fn new(bounds: Rect, tile: AtlasRegion, color: Color) -> Self {
        Self { order: 0, bounds, tile, color, clip: Rect::UNBOUNDED }
    }
}

/// Decoded RGBA image drawn from the atlas.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ImageTile {
    pub order: DrawOrder,
    /// Non-zero to desaturate in the shader.
    pub grayscale: u32,
    pub bounds: Rect,
    pub corner_radii: CornerRadii,
    pub tile: AtlasRegion,
    pub opacity: f32,
    pub clip: Rect,
}

primitive!(ImageTile, ImageTile, image_tiles);

impl ImageTile {
    #[inline]
    pub fn new(bounds: Rect, tile: AtlasRegion) -> Self {
        Self {
            order: 0,
            grayscale: 0,
            bounds,
            corner_radii: CornerRadii::zero(),
            tile,
            opacity: 1.0,
            clip: Rect::UNBOUNDED,
        }
    }

    #[inline]
    pub fn with_corner_radii(mut self, corner_radii: CornerRadii) -> Self {
        self.corner_radii = corner_radii;
        self
    }

    #[inline]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn grayscale(mut self, on: bool) -> Self {
        self.grayscale = u32::from(on);
        self
    }
}

impl Scene {
    /// Records an icon tile.
    #[inline]
    pub fn insert_svg_tile(&mut self, tile: SvgTile) -> Result<DrawOrder, SceneError> {
        self.insert(tile)
    }

    /// Records an image tile.
    #[inline]
    pub fn insert_image_tile(&mut self, tile: ImageTile) -> Result<DrawOrder, SceneError> {
        self.insert(tile)
    }
}
