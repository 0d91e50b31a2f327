//! Scene (per-frame primitive store).
//!
//! Responsibilities:
//! - record typed primitives into one sequence per kind
//! - stamp every primitive with a strictly increasing order token
//! - bake the effective clip rect into each primitive at insertion
//! - hand the recorded frame to [`batches`](Scene::batches) for submission
//!
//! Each primitive type lives in its own file under `scene::primitives`,
//! together with its `insert_*` helpers.

mod config;
mod error;
mod kind;
mod list;
mod primitives;

pub use config::SceneConfig;
pub use error::SceneError;
pub use kind::{KIND_COUNT, PrimitiveKind};
pub use list::Scene;
pub use primitives::glyph::Glyph;
pub use primitives::path::{PathInstance, PointCloud, Polyline};
pub use primitives::quad::Quad;
pub use primitives::shadow::Shadow;
pub use primitives::tile::{ImageTile, SvgTile};
pub use primitives::{DrawOrder, Primitive};
