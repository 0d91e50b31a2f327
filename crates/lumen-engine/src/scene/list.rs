use crate::batch::BatchIterator;
use crate::coords::Rect;

use super::primitives::{Store, glyph::Glyph, path::{PathInstance, PointCloud, Polyline}};
use super::primitives::{quad::Quad, shadow::Shadow, tile::{ImageTile, SvgTile}};
use super::{DrawOrder, KIND_COUNT, PrimitiveKind, SceneConfig, SceneError};

/// One sequence per primitive kind, each sorted by order token.
#[derive(Debug, Default)]
pub(crate) struct PrimitiveLists {
    pub(crate) shadows: Vec<Shadow>,
    pub(crate) quads: Vec<Quad>,
    pub(crate) glyphs: Vec<Glyph>,
    pub(crate) svg_tiles: Vec<SvgTile>,
    pub(crate) image_tiles: Vec<ImageTile>,
    pub(crate) paths: Vec<PathInstance>,
    pub(crate) polylines: Vec<Polyline>,
    pub(crate) point_clouds: Vec<PointCloud>,
}

impl PrimitiveLists {
    fn len_of(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Shadow => self.shadows.len(),
            PrimitiveKind::Quad => self.quads.len(),
            PrimitiveKind::Glyph => self.glyphs.len(),
            PrimitiveKind::SvgTile => self.svg_tiles.len(),
            PrimitiveKind::ImageTile => self.image_tiles.len(),
            PrimitiveKind::Path => self.paths.len(),
            PrimitiveKind::Polyline => self.polylines.len(),
            PrimitiveKind::PointCloud => self.point_clouds.len(),
        }
    }

    fn clear(&mut self) {
        self.shadows.clear();
        self.quads.clear();
        self.glyphs.clear();
        self.svg_tiles.clear();
        self.image_tiles.clear();
        self.paths.clear();
        self.polylines.clear();
        self.point_clouds.clear();
    }

    fn reserve(&mut self, config: &SceneConfig) -> Result<(), SceneError> {
        fn exact<T>(list: &mut Vec<T>, kind: PrimitiveKind, n: usize) -> Result<(), SceneError> {
            list.try_reserve_exact(n)
                .map_err(|_| SceneError::OutOfMemory { kind, requested: n })
        }

        exact(&mut self.shadows, PrimitiveKind::Shadow, config.max_shadows)?;
        exact(&mut self.quads, PrimitiveKind::Quad, config.max_quads)?;
        exact(&mut self.glyphs, PrimitiveKind::Glyph, config.max_glyphs)?;
        exact(&mut self.svg_tiles, PrimitiveKind::SvgTile, config.max_svg_tiles)?;
        exact(&mut self.image_tiles, PrimitiveKind::ImageTile, config.max_image_tiles)?;
        exact(&mut self.paths, PrimitiveKind::Path, config.max_paths)?;
        exact(&mut self.polylines, PrimitiveKind::Polyline, config.max_polylines)?;
        exact(&mut self.point_clouds, PrimitiveKind::PointCloud, config.max_point_clouds)
    }
}

/// Recorded primitives for one frame.
///
/// Performance characteristics:
/// - every `insert_*` is O(1) and never reallocates past the configured limit
/// - `clear()` keeps allocated capacity, so a warmed scene records without allocating
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// primitives to a rect. Clips are intersected with the current parent, so
/// nested scroll containers work correctly. The effective clip is baked into
/// each primitive when it is inserted.
///
/// ```
/// # use lumen_engine::coords::Rect;
/// # use lumen_engine::paint::Color;
/// # use lumen_engine::scene::Scene;
/// # let mut scene = Scene::new();
/// # let scroll_container_rect = Rect::new(0.0, 0.0, 100.0, 100.0);
/// scene.push_clip(scroll_container_rect);
/// let _ = scene.insert_solid_quad(Rect::new(10.0, 10.0, 20.0, 20.0), Color::white());
/// scene.pop_clip();
/// ```
#[derive(Debug)]
pub struct Scene {
    pub(crate) lists: PrimitiveLists,
    config: SceneConfig,
    next_order: DrawOrder,

    /// Stack of active clip rects.
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,

    dropped: [u32; KIND_COUNT],
    finished: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates a scene with default limits.
    ///
    /// Sequences grow on demand, never past their limit. Growth uses fallible
    /// reservation, so allocation failure surfaces as [`SceneError::OutOfMemory`]
    /// from the insert that needed it. Use [`with_config`](Self::with_config) with
    /// `preallocate` to size everything once up front.
    pub fn new() -> Self {
        Self {
            lists: PrimitiveLists::default(),
            config: SceneConfig::default(),
            next_order: 0,
            clip_stack: Vec::new(),
            dropped: [0; KIND_COUNT],
            finished: false,
        }
    }

    /// Creates a scene with explicit limits, reserving them up front when
    /// `config.preallocate` is set.
    pub fn with_config(config: SceneConfig) -> Result<Self, SceneError> {
        let mut lists = PrimitiveLists::default();
        if config.preallocate {
            lists.reserve(&config)?;
        }
        Ok(Self { lists, config, ..Self::new() })
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    /// Empties every sequence and the clip stack. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.lists.clear();
        self.next_order = 0;
        self.clip_stack.clear();
        self.dropped = [0; KIND_COUNT];
        self.finished = false;
    }

    /// Marks the end of recording for this frame.
    ///
    /// Does no work; it documents the hand-off to batching. Debug builds check
    /// that every `push_clip` was matched.
    #[inline]
    pub fn finish(&mut self) {
        debug_assert!(self.clip_stack.is_empty(), "finish called with {} unmatched push_clip", self.clip_stack.len());
        self.finished = true;
    }

    /// Iterates the recorded primitives as paint-ordered, same-kind batches.
    #[inline]
    pub fn batches(&self) -> BatchIterator<'_> {
        BatchIterator::new(self)
    }

    // ── recording ─────────────────────────────────────────────────────────

    pub(crate) fn insert<P: Store>(&mut self, mut primitive: P) -> Result<DrawOrder, SceneError> {
        debug_assert!(!self.finished, "insert after Scene::finish");
        self.check_capacity(P::KIND)?;

        let limit = self.config.limit(P::KIND);
        let clip = self.current_clip();
        let list = P::list_mut(&mut self.lists);
        if list.len() == list.capacity() {
            // Double up to the limit; never reserve past it.
            let additional = list.len().max(4).min(limit - list.len());
            list.try_reserve_exact(additional)
                .map_err(|_| SceneError::OutOfMemory { kind: P::KIND, requested: additional })?;
        }

        let order = self.next_order;
        self.next_order += 1;
        primitive.stamp(order, clip);
        list.push(primitive);
        Ok(order)
    }

    /// Fails (and counts a drop) if `kind` is at its limit.
    pub(crate) fn check_capacity(&mut self, kind: PrimitiveKind) -> Result<(), SceneError> {
        let limit = self.config.limit(kind);
        if self.lists.len_of(kind) < limit {
            return Ok(());
        }

        let dropped = &mut self.dropped[kind.index()];
        if *dropped == 0 {
            log::warn!("scene {kind} capacity ({limit}) exceeded; dropping primitives this frame");
        }
        *dropped = dropped.saturating_add(1);
        Err(SceneError::CapacityExceeded { kind, limit })
    }

    /// Begins a clip region. Everything inserted until the matching
    /// [`pop_clip`](Self::pop_clip) is clipped to `rect` intersected with every
    /// enclosing clip.
    ///
    /// A clip that does not overlap its parent becomes zero-area, so backends cull
    /// the primitives inside it.
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect.normalized(),
            Some(&parent) => rect.clip_to(parent),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip region started by [`push_clip`](Self::push_clip).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// The clip the next inserted primitive will receive.
    #[inline]
    pub fn current_clip(&self) -> Rect {
        self.clip_stack.last().copied().unwrap_or(Rect::UNBOUNDED)
    }

    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    // ── reads ─────────────────────────────────────────────────────────────

    /// Total primitives recorded this frame.
    pub fn len(&self) -> usize {
        PrimitiveKind::ALL.iter().map(|&k| self.lists.len_of(k)).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn len_of(&self, kind: PrimitiveKind) -> usize {
        self.lists.len_of(kind)
    }

    /// Primitives of `kind` dropped this frame for lack of capacity.
    #[inline]
    pub fn dropped(&self, kind: PrimitiveKind) -> u32 {
        self.dropped[kind.index()]
    }

    #[inline]
    pub fn shadows(&self) -> &[Shadow] {
        &self.lists.shadows
    }

    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.lists.quads
    }

    #[inline]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.lists.glyphs
    }

    #[inline]
    pub fn svg_tiles(&self) -> &[SvgTile] {
        &self.lists.svg_tiles
    }

    #[inline]
    pub fn image_tiles(&self) -> &[ImageTile] {
        &self.lists.image_tiles
    }

    #[inline]
    pub fn paths(&self) -> &[PathInstance] {
        &self.lists.paths
    }

    #[inline]
    pub fn polylines(&self) -> &[Polyline] {
        &self.lists.polylines
    }

    #[inline]
    pub fn point_clouds(&self) -> &[PointCloud] {
        &self.lists.point_clouds
    }

    /// Records `primitive` with a caller-chosen order token, bypassing the counter.
    #[cfg(test)]
    pub(crate) fn insert_with_order<P: Store>(&mut self, mut primitive: P, order: DrawOrder) {
        primitive.stamp(order, self.current_clip());
        P::list_mut(&mut self.lists).push(primitive);
    }
}
