//! Backend that logs every draw call instead of talking to a GPU.

use anyhow::{Result, ensure};
use lumen_engine::atlas::TextureAtlas;
use lumen_engine::batch::{Batch, PrimitiveSlice};
use lumen_engine::coords::{Rect, Viewport};
use lumen_engine::mesh::MeshPool;
use lumen_engine::render::{RenderBackend, clip_to_scissor};
use lumen_engine::scene::Primitive;

pub struct LogBackend {
    viewport: Viewport,
    scale: f32,
    bound_generation: Option<u64>,
    pub draw_calls: usize,
    pub culled: usize,
}

impl LogBackend {
    pub fn new(viewport: Viewport, scale: f32) -> Self {
        Self { viewport, scale, bound_generation: None, draw_calls: 0, culled: 0 }
    }

    /// Clip shared by the whole batch, or `None` if clips differ between instances.
    fn shared_clip(primitives: &PrimitiveSlice<'_>) -> Option<Rect> {
        fn shared<P: Primitive>(s: &[P]) -> Option<Rect> {
            let first = s.first()?.clip();
            s.iter().all(|p| p.clip() == first).then_some(first)
        }

        match primitives {
            PrimitiveSlice::Shadows(s) => shared(s),
            PrimitiveSlice::Quads(s) => shared(s),
            PrimitiveSlice::Glyphs(s) => shared(s),
            PrimitiveSlice::SvgTiles(s) => shared(s),
            PrimitiveSlice::ImageTiles(s) => shared(s),
            PrimitiveSlice::Paths(s) => shared(s),
            PrimitiveSlice::Polylines(s) => shared(s),
            PrimitiveSlice::PointClouds(s) => shared(s),
        }
    }
}

impl RenderBackend for LogBackend {
    type Error = anyhow::Error;

    fn bound_generation(&self) -> Option<u64> {
        self.bound_generation
    }

    fn bind_texture(&mut self, atlas: &TextureAtlas) -> Result<()> {
        ensure!(!atlas.pixels().is_empty(), "atlas has no pixel storage");
        log::info!(
            "upload atlas {0}x{0} {1:?} (generation {2})",
            atlas.size(),
            atlas.format(),
            atlas.generation()
        );
        self.bound_generation = Some(atlas.generation());
        Ok(())
    }

    fn submit_batch(&mut self, batch: &Batch<'_>, meshes: &MeshPool) -> Result<()> {
        let scissor = Self::shared_clip(&batch.primitives)
            .map(|clip| clip_to_scissor(clip, self.viewport, self.scale));
        if let Some(None) = scissor {
            self.culled += 1;
            log::debug!("skip {} x{} (clipped out)", batch.kind, batch.len());
            return Ok(());
        }

        let triangles: usize = match batch.primitives {
            PrimitiveSlice::Paths(paths) => {
                paths.iter().map(|p| meshes.get_mesh(p.mesh).triangle_count()).sum()
            }
            _ => 0,
        };

        match batch.primitives.instance_bytes() {
            Some(bytes) => log::info!(
                "draw {} x{} [{}..{}) {} instance bytes, scissor {:?}",
                batch.kind,
                batch.len(),
                batch.range.start,
                batch.range.end,
                bytes.len(),
                scissor.flatten()
            ),
            None => log::info!(
                "draw {} x{} [{}..{}) {} triangles, scissor {:?}",
                batch.kind,
                batch.len(),
                batch.range.start,
                batch.range.end,
                triangles,
                scissor.flatten()
            ),
        }
        self.draw_calls += 1;
        Ok(())
    }
}
