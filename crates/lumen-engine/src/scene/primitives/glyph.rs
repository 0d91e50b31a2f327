use bytemuck::{Pod, Zeroable};

use crate::atlas::AtlasRegion;
use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawOrder, Scene, SceneError};

use super::primitive;

/// Monochrome glyph sampled from the atlas and tinted with `color`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Glyph {
    pub order: DrawOrder,
    /// Font-specific glyph index, kept for debugging and cache bookkeeping.
    pub glyph_id: u32,
    /// Destination rect in logical pixels.
    pub bounds: Rect,
    /// Cached rasterization in the atlas.
    pub tile: AtlasRegion,
    pub color: Color,
    pub clip: Rect,
}

primitive!(Glyph, Glyph, glyphs);

impl Glyph {
    #[inline]
    pub fn new(glyph_id: u32, bounds: Rect, tile: AtlasRegion, color: Color) -> Self {
        Self { order: 0, glyph_id, bounds, tile, color, clip: Rect::UNBOUNDED }
    }

    /// Positions a glyph from shaping metrics.
    ///
    /// - `pen` is the pen position on the baseline
    /// - `bearing` is the bitmap's left-side bearing and its ascent above the baseline
    /// - `scale` converts atlas pixels to logical pixels (`1 / raster scale`)
    pub fn at_baseline(
        glyph_id: u32,
        pen: Vec2,
        bearing: Vec2,
        tile: AtlasRegion,
        scale: f32,
        color: Color,
    ) -> Self {
        let size = Vec2::new(tile.width as f32, tile.height as f32) * scale;
        let origin = Vec2::new(pen.x + bearing.x, pen.y - bearing.y);
        Self::new(glyph_id, Rect::from_origin_size(origin, size), tile, color)
    }
}

impl Scene {
    /// Records a glyph.
    #[inline]
    pub fn insert_glyph(&mut self, glyph: Glyph) -> Result<DrawOrder, SceneError> {
        self.insert(glyph)
    }

    /// Records a run of glyphs in order.
    ///
    /// Stops at the first glyph that does not fit and returns how many were
    /// recorded; the rest of the run is dropped.
    pub fn insert_glyph_run<I>(&mut self, glyphs: I) -> usize
    where
        I: IntoIterator<Item = Glyph>,
    {
        let mut recorded = 0;
        for glyph in glyphs {
            if self.insert(glyph).is_err() {
                break;
            }
            recorded += 1;
        }
        recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_baseline_applies_bearing() {
        let g = Glyph::at_baseline(
            7,
            Vec2::new(100.0, 50.0),
            Vec2::new(2.0, 12.0),
            AtlasRegion::new(0, 0, 10, 14),
            1.0,
            Color::white(),
        );
        assert_eq!(g.bounds, Rect::new(102.0, 38.0, 10.0, 14.0));
    }

    #[test]
    fn at_baseline_scales_bitmap() {
        let g = Glyph::at_baseline(
            1,
            Vec2::zero(),
            Vec2::zero(),
            AtlasRegion::new(0, 0, 20, 40),
            0.5,
            Color::white(),
        );
        assert_eq!(g.bounds.size, Vec2::new(10.0, 20.0));
    }
}
