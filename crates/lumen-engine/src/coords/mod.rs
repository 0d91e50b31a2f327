//! Coordinate and geometry types shared by the scene, atlas and backends.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Backends convert to physical pixels / NDC themselves.

mod corner_radii;
mod rect;
mod transform;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use transform::Transform2D;
pub use vec2::Vec2;
pub use viewport::Viewport;
