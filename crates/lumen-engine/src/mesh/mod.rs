//! Pooled mesh storage for vector-path primitives.
//!
//! Path, polyline and point-cloud primitives carry a [`MeshRef`] instead of their
//! geometry, so they stay small and cheap to copy and batch. Backends resolve the
//! reference with [`MeshPool::get_mesh`] at submission time.

mod geometry;
mod pool;

pub use geometry::{Mesh, MeshView};
pub use pool::{MeshPool, MeshRef};
