use std::fmt;

/// Number of primitive kinds a [`Scene`](super::Scene) stores.
pub const KIND_COUNT: usize = 8;

/// Discriminant of the eight primitive types.
///
/// Each kind maps to one backend pipeline, which is why batches never mix kinds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveKind {
    Shadow,
    Quad,
    Glyph,
    SvgTile,
    ImageTile,
    Path,
    Polyline,
    PointCloud,
}

impl PrimitiveKind {
    /// Every kind, in storage order.
    pub const ALL: [PrimitiveKind; KIND_COUNT] = [
        PrimitiveKind::Shadow,
        PrimitiveKind::Quad,
        PrimitiveKind::Glyph,
        PrimitiveKind::SvgTile,
        PrimitiveKind::ImageTile,
        PrimitiveKind::Path,
        PrimitiveKind::Polyline,
        PrimitiveKind::PointCloud,
    ];

    /// Paint order between primitives that carry the same order token, first
    /// painted first. A shadow always lands under the quad it belongs to.
    pub const PAINT_PRIORITY: [PrimitiveKind; KIND_COUNT] = [
        PrimitiveKind::Shadow,
        PrimitiveKind::Quad,
        PrimitiveKind::Path,
        PrimitiveKind::Polyline,
        PrimitiveKind::PointCloud,
        PrimitiveKind::Glyph,
        PrimitiveKind::SvgTile,
        PrimitiveKind::ImageTile,
    ];

    /// Dense index into per-kind arrays (position in [`ALL`](Self::ALL)).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PrimitiveKind::Shadow => 0,
            PrimitiveKind::Quad => 1,
            PrimitiveKind::Glyph => 2,
            PrimitiveKind::SvgTile => 3,
            PrimitiveKind::ImageTile => 4,
            PrimitiveKind::Path => 5,
            PrimitiveKind::Polyline => 6,
            PrimitiveKind::PointCloud => 7,
        }
    }

    /// Tie-break rank (position in [`PAINT_PRIORITY`](Self::PAINT_PRIORITY)).
    #[inline]
    pub const fn priority(self) -> u8 {
        match self {
            PrimitiveKind::Shadow => 0,
            PrimitiveKind::Quad => 1,
            PrimitiveKind::Path => 2,
            PrimitiveKind::Polyline => 3,
            PrimitiveKind::PointCloud => 4,
            PrimitiveKind::Glyph => 5,
            PrimitiveKind::SvgTile => 6,
            PrimitiveKind::ImageTile => 7,
        }
    }

    /// True for kinds whose geometry lives in the [`MeshPool`](crate::mesh::MeshPool).
    #[inline]
    pub const fn uses_mesh(self) -> bool {
        matches!(self, PrimitiveKind::Path | PrimitiveKind::Polyline | PrimitiveKind::PointCloud)
    }

    /// True for kinds that sample the [`TextureAtlas`](crate::atlas::TextureAtlas).
    #[inline]
    pub const fn uses_atlas(self) -> bool {
        matches!(self, PrimitiveKind::Glyph | PrimitiveKind::SvgTile | PrimitiveKind::ImageTile)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Shadow => "shadow",
            PrimitiveKind::Quad => "quad",
            PrimitiveKind::Glyph => "glyph",
            PrimitiveKind::SvgTile => "svg tile",
            PrimitiveKind::ImageTile => "image tile",
            PrimitiveKind::Path => "path",
            PrimitiveKind::Polyline => "polyline",
            PrimitiveKind::PointCloud => "point cloud",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
