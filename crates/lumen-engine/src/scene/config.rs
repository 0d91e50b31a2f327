use super::PrimitiveKind;

/// Per-kind capacity limits for a [`Scene`](super::Scene).
///
/// Limits mirror the fixed instance buffers a backend allocates, so a frame can
/// never require a GPU buffer resize mid-submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneConfig {
    pub max_shadows: usize,
    pub max_quads: usize,
    pub max_glyphs: usize,
    pub max_svg_tiles: usize,
    pub max_image_tiles: usize,
    pub max_paths: usize,
    pub max_polylines: usize,
    pub max_point_clouds: usize,

    /// Reserve every sequence's full capacity at construction.
    ///
    /// When false, sequences grow on demand up to their limit.
    pub preallocate: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_shadows: 8 * 1024,
            max_quads: 64 * 1024,
            max_glyphs: 64 * 1024,
            max_svg_tiles: 8 * 1024,
            max_image_tiles: 4 * 1024,
            max_paths: 8 * 1024,
            max_polylines: 4 * 1024,
            max_point_clouds: 1024,
            preallocate: false,
        }
    }
}

impl SceneConfig {
    /// The same `limit` for every kind, without preallocation.
    pub fn uniform(limit: usize) -> Self {
        Self {
            max_shadows: limit,
            max_quads: limit,
            max_glyphs: limit,
            max_svg_tiles: limit,
            max_image_tiles: limit,
            max_paths: limit,
            max_polylines: limit,
            max_point_clouds: limit,
            preallocate: false,
        }
    }

    #[inline]
    pub fn limit(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Shadow => self.max_shadows,
            PrimitiveKind::Quad => self.max_quads,
            PrimitiveKind::Glyph => self.max_glyphs,
            PrimitiveKind::SvgTile => self.max_svg_tiles,
            PrimitiveKind::ImageTile => self.max_image_tiles,
            PrimitiveKind::Path => self.max_paths,
            PrimitiveKind::Polyline => self.max_polylines,
            PrimitiveKind::PointCloud => self.max_point_clouds,
        }
    }
}
