//! Backend capability seam.
//!
//! The engine never talks to a GPU API. A concrete backend implements
//! [`RenderBackend`] once; [`submit_scene`] drives it with a finished scene's
//! batch stream.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down)
//! - backends convert baked clips with [`clip_to_scissor`]

mod backend;
mod scissor;

pub use backend::{FrameStats, RenderBackend, submit_scene};
pub use scissor::{ScissorRect, clip_to_scissor};
