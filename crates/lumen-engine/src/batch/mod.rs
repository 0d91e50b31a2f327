//! Batching: replays a finished [`Scene`](crate::scene::Scene) as same-kind runs
//! in paint order.
//!
//! Each [`Batch`] maps to one backend draw call (one pipeline, one instance
//! range). Concatenating every batch's primitives reproduces the scene's global
//! order exactly.

mod iter;

use std::ops::Range;

use crate::scene::{
    DrawOrder, Glyph, ImageTile, PathInstance, PointCloud, Polyline, PrimitiveKind, Quad, Shadow,
    SvgTile,
};

pub use iter::BatchIterator;

/// Borrowed instances of a single kind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PrimitiveSlice<'a> {
    Shadows(&'a [Shadow]),
    Quads(&'a [Quad]),
    Glyphs(&'a [Glyph]),
    SvgTiles(&'a [SvgTile]),
    ImageTiles(&'a [ImageTile]),
    Paths(&'a [PathInstance]),
    Polylines(&'a [Polyline]),
    PointClouds(&'a [PointCloud]),
}

impl PrimitiveSlice<'_> {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveSlice::Shadows(_) => PrimitiveKind::Shadow,
            PrimitiveSlice::Quads(_) => PrimitiveKind::Quad,
            PrimitiveSlice::Glyphs(_) => PrimitiveKind::Glyph,
            PrimitiveSlice::SvgTiles(_) => PrimitiveKind::SvgTile,
            PrimitiveSlice::ImageTiles(_) => PrimitiveKind::ImageTile,
            PrimitiveSlice::Paths(_) => PrimitiveKind::Path,
            PrimitiveSlice::Polylines(_) => PrimitiveKind::Polyline,
            PrimitiveSlice::PointClouds(_) => PrimitiveKind::PointCloud,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PrimitiveSlice::Shadows(s) => s.len(),
            PrimitiveSlice::Quads(s) => s.len(),
            PrimitiveSlice::Glyphs(s) => s.len(),
            PrimitiveSlice::SvgTiles(s) => s.len(),
            PrimitiveSlice::ImageTiles(s) => s.len(),
            PrimitiveSlice::Paths(s) => s.len(),
            PrimitiveSlice::Polylines(s) => s.len(),
            PrimitiveSlice::PointClouds(s) => s.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw instance bytes for the Pod kinds; `None` for mesh-backed kinds,
    /// which backends expand from the [`MeshPool`](crate::mesh::MeshPool).
    pub fn instance_bytes(&self) -> Option<&[u8]> {
        match self {
            PrimitiveSlice::Shadows(s) => Some(bytemuck::cast_slice(s)),
            PrimitiveSlice::Quads(s) => Some(bytemuck::cast_slice(s)),
            PrimitiveSlice::Glyphs(s) => Some(bytemuck::cast_slice(s)),
            PrimitiveSlice::SvgTiles(s) => Some(bytemuck::cast_slice(s)),
            PrimitiveSlice::ImageTiles(s) => Some(bytemuck::cast_slice(s)),
            PrimitiveSlice::Paths(_) | PrimitiveSlice::Polylines(_) | PrimitiveSlice::PointClouds(_) => None,
        }
    }

    /// Order tokens of the borrowed instances, in sequence.
    pub fn orders(&self) -> Vec<DrawOrder> {
        use crate::scene::Primitive;

        fn collect<P: Primitive>(s: &[P]) -> Vec<DrawOrder> {
            s.iter().map(|p| p.order()).collect()
        }

        match self {
            PrimitiveSlice::Shadows(s) => collect(s),
            PrimitiveSlice::Quads(s) => collect(s),
            PrimitiveSlice::Glyphs(s) => collect(s),
            PrimitiveSlice::SvgTiles(s) => collect(s),
            PrimitiveSlice::ImageTiles(s) => collect(s),
            PrimitiveSlice::Paths(s) => collect(s),
            PrimitiveSlice::Polylines(s) => collect(s),
            PrimitiveSlice::PointClouds(s) => collect(s),
        }
    }
}

/// A maximal run of consecutive same-kind primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<'a> {
    pub kind: PrimitiveKind,
    /// Index range into the scene's sequence for `kind`.
    pub range: Range<usize>,
    pub primitives: PrimitiveSlice<'a>,
}

impl Batch<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
