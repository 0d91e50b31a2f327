//! Lumen engine crate.
//!
//! Backend-agnostic 2D rendering core: records a frame of typed primitives,
//! replays it as paint-ordered batches, and owns the glyph/icon texture atlas
//! and the path mesh pool that those batches reference.

pub mod atlas;
pub mod batch;
pub mod coords;
pub mod logging;
pub mod mesh;
pub mod paint;
pub mod render;
pub mod scene;
