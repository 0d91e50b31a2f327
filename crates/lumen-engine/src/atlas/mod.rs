//! Texture atlas for cached glyphs, rasterized icons and decoded images.
//!
//! Responsibilities:
//! - pack rectangles into one growable square buffer (skyline heuristic)
//! - keep a CPU copy of the pixels for backends to upload
//! - expose a generation counter so backends can tell when to re-upload

mod error;
mod region;
mod skyline;
mod texture;

pub use error::AtlasError;
pub use region::{AtlasFormat, AtlasRegion};
pub use skyline::SkylineNode;
pub use texture::{AtlasConfig, TextureAtlas};
