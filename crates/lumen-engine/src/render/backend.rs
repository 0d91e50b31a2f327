use crate::atlas::TextureAtlas;
use crate::batch::Batch;
use crate::mesh::MeshPool;
use crate::scene::{KIND_COUNT, PrimitiveKind, Scene};

/// A concrete GPU backend.
///
/// Implemented once per backend. The engine hands over batches in paint order
/// and never inspects backend state beyond the bound atlas generation.
pub trait RenderBackend {
    type Error;

    /// Generation of the atlas contents currently uploaded, if any.
    fn bound_generation(&self) -> Option<u64>;

    /// Uploads (or re-uploads) the atlas pixels and binds them for sampling.
    ///
    /// After success, [`bound_generation`](Self::bound_generation) must report
    /// `atlas.generation()`.
    fn bind_texture(&mut self, atlas: &TextureAtlas) -> Result<(), Self::Error>;

    /// Issues one draw call for `batch`. Mesh-backed kinds read their geometry from `meshes`.
    fn submit_batch(&mut self, batch: &Batch<'_>, meshes: &MeshPool) -> Result<(), Self::Error>;
}

/// Counters for one submitted frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub batches: usize,
    pub primitives: usize,
    pub batches_per_kind: [usize; KIND_COUNT],
    /// True if the atlas was (re)bound this frame.
    pub texture_bound: bool,
}

impl FrameStats {
    #[inline]
    pub fn batches_of(&self, kind: PrimitiveKind) -> usize {
        self.batches_per_kind[kind.index()]
    }
}

/// Submits every batch of `scene` to `backend` in paint order.
///
/// The atlas is bound first, and only if its generation differs from what the
/// backend last bound. Stops at the first backend error.
pub fn submit_scene<B: RenderBackend>(
    scene: &Scene,
    atlas: &TextureAtlas,
    meshes: &MeshPool,
    backend: &mut B,
) -> Result<FrameStats, B::Error> {
    let mut stats = FrameStats::default();

    if backend.bound_generation() != Some(atlas.generation()) {
        backend.bind_texture(atlas)?;
        stats.texture_bound = true;
    }

    for batch in scene.batches() {
        backend.submit_batch(&batch, meshes)?;
        stats.batches += 1;
        stats.primitives += batch.len();
        stats.batches_per_kind[batch.kind.index()] += 1;
    }

    log::trace!(
        "submitted {} primitives in {} batches (atlas rebound: {})",
        stats.primitives,
        stats.batches,
        stats.texture_bound
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::{AtlasConfig, AtlasRegion};
    use crate::coords::Rect;
    use crate::paint::Color;
    use crate::scene::Glyph;

    #[derive(Default)]
    struct Recorder {
        bound: Option<u64>,
        binds: usize,
        log: Vec<(PrimitiveKind, Vec<u32>)>,
        fail_after: Option<usize>,
    }

    impl RenderBackend for Recorder {
        type Error = &'static str;

        fn bound_generation(&self) -> Option<u64> {
            self.bound
        }

        fn bind_texture(&mut self, atlas: &TextureAtlas) -> Result<(), Self::Error> {
            self.bound = Some(atlas.generation());
            self.binds += 1;
            Ok(())
        }

        fn submit_batch(&mut self, batch: &Batch<'_>, _meshes: &MeshPool) -> Result<(), Self::Error> {
            if self.fail_after == Some(self.log.len()) {
                return Err("device lost");
            }
            self.log.push((batch.kind, batch.primitives.orders()));
            Ok(())
        }
    }

    fn scene() -> Scene {
        let mut scene = Scene::new();
        let r = Rect::new(0.0, 0.0, 8.0, 8.0);
        scene.insert_solid_quad(r, Color::white()).unwrap();
        scene.insert_solid_quad(r, Color::white()).unwrap();
        scene
            .insert_glyph(Glyph::new(3, r, AtlasRegion::new(0, 0, 8, 8), Color::black()))
            .unwrap();
        scene.finish();
        scene
    }

    // ── submission ────────────────────────────────────────────────────────

    #[test]
    fn submits_batches_in_order() {
        let atlas = TextureAtlas::new(AtlasConfig::default()).unwrap();
        let meshes = MeshPool::new();
        let mut backend = Recorder::default();

        let stats = submit_scene(&scene(), &atlas, &meshes, &mut backend).unwrap();
        assert_eq!(
            backend.log,
            vec![(PrimitiveKind::Quad, vec![0, 1]), (PrimitiveKind::Glyph, vec![2])]
        );
        assert_eq!(stats.batches, 2);
        assert_eq!(stats.primitives, 3);
        assert_eq!(stats.batches_of(PrimitiveKind::Quad), 1);
    }

    #[test]
    fn backend_error_stops_submission() {
        let atlas = TextureAtlas::new(AtlasConfig::default()).unwrap();
        let mut backend = Recorder { fail_after: Some(1), ..Recorder::default() };

        let result = submit_scene(&scene(), &atlas, &MeshPool::new(), &mut backend);
        assert_eq!(result, Err("device lost"));
        assert_eq!(backend.log.len(), 1);
    }

    // ── texture binding ───────────────────────────────────────────────────

    #[test]
    fn binds_only_on_generation_change() {
        let mut atlas = TextureAtlas::new(AtlasConfig::default()).unwrap();
        let meshes = MeshPool::new();
        let scene = scene();
        let mut backend = Recorder::default();

        assert!(submit_scene(&scene, &atlas, &meshes, &mut backend).unwrap().texture_bound);
        assert!(!submit_scene(&scene, &atlas, &meshes, &mut backend).unwrap().texture_bound);
        assert_eq!(backend.binds, 1);

        atlas.allocate(4, 4, &[255; 16]).unwrap();
        assert!(submit_scene(&scene, &atlas, &meshes, &mut backend).unwrap().texture_bound);
        assert_eq!(backend.binds, 2);
        assert_eq!(backend.bound, Some(atlas.generation()));
    }
}
