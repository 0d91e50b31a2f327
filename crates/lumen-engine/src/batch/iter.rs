use std::iter::FusedIterator;
use std::ops::Range;

use crate::scene::{DrawOrder, KIND_COUNT, PrimitiveKind, Scene};

use super::{Batch, PrimitiveSlice};

/// Merge key: order token first, kind priority on ties.
type Key = (DrawOrder, u8);

/// k-way merge over the scene's per-kind sequences.
///
/// Each step picks the kind whose next pending primitive has the smallest key,
/// then extends the run while that kind's next key stays below every other
/// kind's next key. O(primitives + batches × kinds).
#[derive(Debug, Clone)]
pub struct BatchIterator<'a> {
    scene: &'a Scene,
    cursors: [usize; KIND_COUNT],
}

impl<'a> BatchIterator<'a> {
    pub(crate) fn new(scene: &'a Scene) -> Self {
        Self { scene, cursors: [0; KIND_COUNT] }
    }

    fn order_at(&self, kind: PrimitiveKind, i: usize) -> Option<DrawOrder> {
        let lists = &self.scene.lists;
        match kind {
            PrimitiveKind::Shadow => lists.shadows.get(i).map(|p| p.order),
            PrimitiveKind::Quad => lists.quads.get(i).map(|p| p.order),
            PrimitiveKind::Glyph => lists.glyphs.get(i).map(|p| p.order),
            PrimitiveKind::SvgTile => lists.svg_tiles.get(i).map(|p| p.order),
            PrimitiveKind::ImageTile => lists.image_tiles.get(i).map(|p| p.order),
            PrimitiveKind::Path => lists.paths.get(i).map(|p| p.order),
            PrimitiveKind::Polyline => lists.polylines.get(i).map(|p| p.order),
            PrimitiveKind::PointCloud => lists.point_clouds.get(i).map(|p| p.order),
        }
    }

    #[inline]
    fn peek(&self, kind: PrimitiveKind) -> Option<Key> {
        self.order_at(kind, self.cursors[kind.index()])
            .map(|order| (order, kind.priority()))
    }

    fn slice(&self, kind: PrimitiveKind, range: Range<usize>) -> PrimitiveSlice<'a> {
        let lists = &self.scene.lists;
        match kind {
            PrimitiveKind::Shadow => PrimitiveSlice::Shadows(&lists.shadows[range]),
            PrimitiveKind::Quad => PrimitiveSlice::Quads(&lists.quads[range]),
            PrimitiveKind::Glyph => PrimitiveSlice::Glyphs(&lists.glyphs[range]),
            PrimitiveKind::SvgTile => PrimitiveSlice::SvgTiles(&lists.svg_tiles[range]),
            PrimitiveKind::ImageTile => PrimitiveSlice::ImageTiles(&lists.image_tiles[range]),
            PrimitiveKind::Path => PrimitiveSlice::Paths(&lists.paths[range]),
            PrimitiveKind::Polyline => PrimitiveSlice::Polylines(&lists.polylines[range]),
            PrimitiveKind::PointCloud => PrimitiveSlice::PointClouds(&lists.point_clouds[range]),
        }
    }

    fn remaining(&self) -> usize {
        PrimitiveKind::ALL
            .iter()
            .map(|&kind| self.scene.len_of(kind) - self.cursors[kind.index()])
            .sum()
    }
}

impl<'a> Iterator for BatchIterator<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut keys = [None; KIND_COUNT];
        for kind in PrimitiveKind::ALL {
            keys[kind.index()] = self.peek(kind);
        }

        let (kind, _) = PrimitiveKind::ALL
            .iter()
            .filter_map(|&kind| keys[kind.index()].map(|key| (kind, key)))
            .min_by_key(|&(_, key)| key)?;

        // Smallest pending key among the other kinds; the run stops before it.
        let bound = PrimitiveKind::ALL
            .iter()
            .filter(|&&other| other != kind)
            .filter_map(|&other| keys[other.index()])
            .min();

        let start = self.cursors[kind.index()];
        let mut end = start + 1;
        while let Some(order) = self.order_at(kind, end) {
            if bound.is_some_and(|bound| (order, kind.priority()) >= bound) {
                break;
            }
            end += 1;
        }
        self.cursors[kind.index()] = end;

        Some(Batch { kind, range: start..end, primitives: self.slice(kind, start..end) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining.min(1), Some(remaining))
    }
}

impl FusedIterator for BatchIterator<'_> {}

#[cfg(test)]
mod tests {
    use crate::atlas::AtlasRegion;
    use crate::coords::{CornerRadii, Rect, Transform2D};
    use crate::mesh::MeshRef;
    use crate::paint::{Color, Paint};
    use crate::scene::{
        Glyph, ImageTile, PathInstance, PointCloud, Polyline, PrimitiveKind, Quad, Scene, Shadow, SvgTile,
    };

    fn r(x: f32) -> Rect {
        Rect::new(x, 0.0, 10.0, 10.0)
    }

    fn quad() -> Quad {
        Quad::new(r(0.0), Color::white())
    }

    fn shadow() -> Shadow {
        Shadow::new(r(0.0), CornerRadii::zero(), 4.0, Color::black())
    }

    fn glyph() -> Glyph {
        Glyph::new(0, r(0.0), AtlasRegion::new(0, 0, 8, 8), Color::white())
    }

    fn summary(scene: &Scene) -> Vec<(PrimitiveKind, Vec<u32>)> {
        scene.batches().map(|b| (b.kind, b.primitives.orders())).collect()
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn order_beats_coalescing() {
        let mut scene = Scene::new();
        scene.insert_shadow(shadow()).unwrap();
        scene.insert_quad(quad()).unwrap();
        scene.insert_glyph(glyph()).unwrap();
        scene.insert_quad(quad()).unwrap();
        scene.finish();

        assert_eq!(
            summary(&scene),
            vec![
                (PrimitiveKind::Shadow, vec![0]),
                (PrimitiveKind::Quad, vec![1]),
                (PrimitiveKind::Glyph, vec![2]),
                (PrimitiveKind::Quad, vec![3]),
            ]
        );
    }

    #[test]
    fn consecutive_same_kind_coalesces() {
        let mut scene = Scene::new();
        for _ in 0..3 {
            scene.insert_quad(quad()).unwrap();
        }
        scene.insert_glyph(glyph()).unwrap();
        scene.finish();

        let batches: Vec<_> = scene.batches().collect();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].kind, PrimitiveKind::Quad);
        assert_eq!(batches[0].range, 0..3);
        assert_eq!(batches[0].primitives.orders(), vec![0, 1, 2]);
        assert_eq!(batches[1].kind, PrimitiveKind::Glyph);
        assert_eq!(batches[1].range, 0..1);
    }

    // ── properties ────────────────────────────────────────────────────────

    #[test]
    fn empty_scene_has_no_batches() {
        let mut scene = Scene::new();
        assert_eq!(scene.batches().count(), 0);

        scene.insert_quad(quad()).unwrap();
        scene.clear();
        assert_eq!(scene.batches().next(), None);
    }

    #[test]
    fn concatenation_reproduces_global_order() {
        let mut scene = Scene::new();
        let mesh = MeshRef::default();
        let paint = Paint::solid(Color::black());
        // Deterministic interleaving of every kind, with clips pushed in between.
        for i in 0..200u32 {
            if i % 37 == 0 {
                scene.push_clip(Rect::new(0.0, 0.0, 100.0 + i as f32, 100.0));
            }
            let _ = match (i * 7 + i / 3) % 8 {
                0 => scene.insert_shadow(shadow()),
                1 | 2 => scene.insert_quad(quad()),
                3 => scene.insert_glyph(glyph()),
                4 => scene.insert_svg_tile(SvgTile::new(r(0.0), AtlasRegion::default(), Color::white())),
                5 => scene.insert_image_tile(ImageTile::new(r(0.0), AtlasRegion::default())),
                6 => scene.insert_path(PathInstance::new(mesh, Transform2D::IDENTITY, &paint)),
                _ if i % 2 == 0 => scene.insert_polyline(Polyline::new(mesh, Transform2D::IDENTITY, Color::black(), 1.0)),
                _ => scene.insert_point_cloud(PointCloud::new(mesh, Transform2D::IDENTITY, Color::black(), 2.0)),
            }
            .unwrap();
            if i % 37 == 20 {
                scene.pop_clip();
            }
        }
        while scene.clip_depth() > 0 {
            scene.pop_clip();
        }
        scene.finish();

        let mut orders = Vec::new();
        let mut previous: Option<PrimitiveKind> = None;
        let mut total = 0;
        for batch in scene.batches() {
            assert!(!batch.is_empty());
            assert_eq!(batch.primitives.len(), batch.len());
            assert_eq!(batch.primitives.kind(), batch.kind);
            // Maximal runs: adjacent batches never share a kind.
            assert_ne!(previous, Some(batch.kind));
            previous = Some(batch.kind);
            total += batch.len();
            orders.extend(batch.primitives.orders());
        }

        assert_eq!(total, scene.len());
        assert_eq!(orders, (0..200).collect::<Vec<u32>>());
    }

    #[test]
    fn ranges_cover_each_sequence_once() {
        let mut scene = Scene::new();
        scene.insert_quad(quad()).unwrap();
        scene.insert_glyph(glyph()).unwrap();
        scene.insert_glyph(glyph()).unwrap();
        scene.insert_quad(quad()).unwrap();
        scene.insert_quad(quad()).unwrap();

        let quads: Vec<_> = scene
            .batches()
            .filter(|b| b.kind == PrimitiveKind::Quad)
            .map(|b| b.range)
            .collect();
        assert_eq!(quads, vec![0..1, 1..3]);
    }

    #[test]
    fn pod_batches_expose_instance_bytes() {
        let mut scene = Scene::new();
        scene.insert_quad(quad()).unwrap();
        scene.insert_quad(quad()).unwrap();
        scene
            .insert_path(PathInstance::new(MeshRef::default(), Transform2D::IDENTITY, &Paint::solid(Color::black())))
            .unwrap();

        let batches: Vec<_> = scene.batches().collect();
        let bytes = batches[0].primitives.instance_bytes().unwrap();
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<Quad>());
        assert!(batches[1].primitives.instance_bytes().is_none());
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut scene = Scene::new();
        scene.insert_quad(quad()).unwrap();
        let mut it = scene.batches();
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    // ── tie-break ─────────────────────────────────────────────────────────

    #[test]
    fn equal_orders_follow_paint_priority() {
        let mut scene = Scene::new();
        let mesh = MeshRef::default();
        scene.insert_with_order(SvgTile::new(r(0.0), AtlasRegion::default(), Color::white()), 5);
        scene.insert_with_order(glyph(), 5);
        scene.insert_with_order(PathInstance::new(mesh, Transform2D::IDENTITY, &Paint::solid(Color::black())), 5);
        scene.insert_with_order(quad(), 5);
        scene.insert_with_order(shadow(), 5);

        let kinds: Vec<_> = scene.batches().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PrimitiveKind::Shadow,
                PrimitiveKind::Quad,
                PrimitiveKind::Path,
                PrimitiveKind::Glyph,
                PrimitiveKind::SvgTile,
            ]
        );
    }

    #[test]
    fn tie_splits_a_run() {
        let mut scene = Scene::new();
        scene.insert_with_order(quad(), 0);
        scene.insert_with_order(quad(), 1);
        scene.insert_with_order(shadow(), 1);

        let kinds: Vec<_> = scene.batches().map(|b| (b.kind, b.range)).collect();
        assert_eq!(
            kinds,
            vec![
                (PrimitiveKind::Quad, 0..1),
                (PrimitiveKind::Shadow, 0..1),
                (PrimitiveKind::Quad, 1..2),
            ]
        );
    }
}
