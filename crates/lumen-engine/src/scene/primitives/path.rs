use crate::coords::{Rect, Transform2D};
use crate::mesh::{MeshPool, MeshRef};
use crate::paint::{Color, Paint, PathFill};
use crate::scene::{DrawOrder, Scene, SceneError};

use super::primitive;

/// Filled vector path. Geometry is a triangulated mesh in the [`MeshPool`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathInstance {
    pub order: DrawOrder,
    pub mesh: MeshRef,
    /// Mesh space → logical pixels.
    pub transform: Transform2D,
    pub fill: PathFill,
    pub clip: Rect,
}

primitive!(PathInstance, Path, paths);

impl PathInstance {
    #[inline]
    pub fn new(mesh: MeshRef, transform: Transform2D, paint: &Paint) -> Self {
        Self { order: 0, mesh, transform, fill: paint.resolve(), clip: Rect::UNBOUNDED }
    }

    /// Screen-space bounds of the referenced mesh, or `None` if the ref is stale.
    pub fn bounds(&self, meshes: &MeshPool) -> Option<Rect> {
        mesh_bounds(meshes, self.mesh, self.transform)
    }
}

/// Stroked line strip through the mesh's vertices (indices are ignored).
///
/// Backends expand each segment to a `width`-wide quad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Polyline {
    pub order: DrawOrder,
    pub mesh: MeshRef,
    pub transform: Transform2D,
    pub color: Color,
    /// Stroke width in logical pixels (not scaled by `transform`).
    pub width: f32,
    /// Connect the last vertex back to the first.
    pub closed: bool,
    pub clip: Rect,
}

primitive!(Polyline, Polyline, polylines);

impl Polyline {
    #[inline]
    pub fn new(mesh: MeshRef, transform: Transform2D, color: Color, width: f32) -> Self {
        Self {
            order: 0,
            mesh,
            transform,
            color,
            width: width.max(0.0),
            closed: false,
            clip: Rect::UNBOUNDED,
        }
    }

    #[inline]
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    pub fn bounds(&self, meshes: &MeshPool) -> Option<Rect> {
        let b = mesh_bounds(meshes, self.mesh, self.transform)?;
        let h = self.width * 0.5;
        Some(Rect::new(b.origin.x - h, b.origin.y - h, b.size.x + self.width, b.size.y + self.width))
    }
}

/// One square point per mesh vertex (indices are ignored).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointCloud {
    pub order: DrawOrder,
    pub mesh: MeshRef,
    pub transform: Transform2D,
    pub color: Color,
    /// Point side length in logical pixels.
    pub point_size: f32,
    pub clip: Rect,
}

primitive!(PointCloud, PointCloud, point_clouds);

impl PointCloud {
    #[inline]
    pub fn new(mesh: MeshRef, transform: Transform2D, color: Color, point_size: f32) -> Self {
        Self {
            order: 0,
            mesh,
            transform,
            color,
            point_size: point_size.max(0.0),
            clip: Rect::UNBOUNDED,
        }
    }
}

fn mesh_bounds(meshes: &MeshPool, mesh: MeshRef, transform: Transform2D) -> Option<Rect> {
    meshes.get_mesh(mesh).bounds().map(|b| transform.map_rect(b))
}

impl Scene {
    /// Records a filled path.
    #[inline]
    pub fn insert_path(&mut self, path: PathInstance) -> Result<DrawOrder, SceneError> {
        self.insert(path)
    }

    /// Records a polyline.
    #[inline]
    pub fn insert_polyline(&mut self, polyline: Polyline) -> Result<DrawOrder, SceneError> {
        self.insert(polyline)
    }

    /// Records a point cloud.
    #[inline]
    pub fn insert_point_cloud(&mut self, points: PointCloud) -> Result<DrawOrder, SceneError> {
        self.insert(points)
    }
}
