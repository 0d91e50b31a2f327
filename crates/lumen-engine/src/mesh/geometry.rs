use crate::coords::{Rect, Vec2};

/// Triangulated (or point-list) geometry in mesh space.
///
/// `indices` holds triangles as index triples into `vertices`. Point-list meshes
/// used by polylines and point clouds leave it empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec2>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() % 3 == 0, "index count must be a multiple of 3");
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "index out of range"
        );
        Self { vertices, indices }
    }

    /// Fan-triangulates a convex polygon given in winding order.
    ///
    /// Fewer than three points produce a mesh with vertices but no triangles.
    pub fn from_convex_polygon(points: &[Vec2]) -> Self {
        let n = points.len() as u32;
        let indices = (1..n.saturating_sub(1)).flat_map(|i| [0, i, i + 1]).collect();
        Self { vertices: points.to_vec(), indices }
    }

    /// Point list with no triangles, for polylines and point clouds.
    pub fn from_points(points: &[Vec2]) -> Self {
        Self { vertices: points.to_vec(), indices: Vec::new() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn view(&self) -> MeshView<'_> {
        MeshView { vertices: &self.vertices, indices: &self.indices }
    }
}

/// Borrowed vertex/index slices of a stored [`Mesh`].
///
/// [`MeshView::EMPTY`] stands in for stale or unknown references; backends draw
/// nothing for it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshView<'a> {
    pub vertices: &'a [Vec2],
    pub indices: &'a [u32],
}

impl MeshView<'static> {
    pub const EMPTY: Self = MeshView { vertices: &[], indices: &[] };
}

impl MeshView<'_> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Bounds of all vertices, or `None` for an empty view.
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.vertices.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Some(Rect::from_origin_size(min, max - min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 2.0),
            Vec2::new(0.0, 2.0),
        ]
    }

    #[test]
    fn fan_triangulates_convex_polygon() {
        let mesh = Mesh::from_convex_polygon(&square());
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.view().triangle_count(), 2);
    }

    #[test]
    fn degenerate_polygon_has_no_triangles() {
        let mesh = Mesh::from_convex_polygon(&square()[..2]);
        assert!(mesh.indices.is_empty());
        assert_eq!(Mesh::from_convex_polygon(&[]).indices.len(), 0);
    }

    #[test]
    fn bounds_cover_vertices() {
        let mesh = Mesh::from_points(&square());
        assert_eq!(mesh.view().bounds(), Some(Rect::new(0.0, 0.0, 4.0, 2.0)));
        assert_eq!(MeshView::EMPTY.bounds(), None);
    }
}
