/// One segment of the skyline: the occupied height over `[x, x + width)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SkylineNode {
    pub x: u32,
    pub y: u32,
    pub width: u32,
}

impl SkylineNode {
    #[inline]
    const fn end(self) -> u32 {
        self.x + self.width
    }
}

/// Skyline bin packer over a square bin of side `size`.
///
/// Invariant: `nodes` is sorted by `x`, gap-free, and covers `[0, size)`.
#[derive(Debug, Clone)]
pub(crate) struct Skyline {
    nodes: Vec<SkylineNode>,
    size: u32,
}

impl Skyline {
    pub(crate) fn new(size: u32) -> Self {
        let mut skyline = Self { nodes: Vec::new(), size };
        skyline.reset(size);
        skyline
    }

    /// Drops every placement: one full-width node at height 0.
    pub(crate) fn reset(&mut self, size: u32) {
        self.size = size;
        self.nodes.clear();
        self.nodes.push(SkylineNode { x: 0, y: 0, width: size });
    }

    #[inline]
    pub(crate) fn nodes(&self) -> &[SkylineNode] {
        &self.nodes
    }

    /// Places a `w × h` rectangle and returns its top-left corner.
    ///
    /// Chooses the lowest landing height, then the narrowest starting node.
    /// Returns `None` (and leaves the skyline untouched) if nothing fits.
    pub(crate) fn pack(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        let (index, y) = self.find(w, h)?;
        let x = self.nodes[index].x;
        self.place(index, x, y, w, h);
        Some((x, y))
    }

    /// Widens the bin to `new_size`, opening a `y = 0` strip on the right.
    pub(crate) fn extend(&mut self, new_size: u32) {
        debug_assert!(new_size >= self.size);
        let added = new_size - self.size;
        if added == 0 {
            return;
        }
        match self.nodes.last_mut() {
            Some(last) if last.y == 0 => last.width += added,
            _ => self.nodes.push(SkylineNode { x: self.size, y: 0, width: added }),
        }
        self.size = new_size;
    }

    fn find(&self, w: u32, h: u32) -> Option<(usize, u32)> {
        let mut best: Option<(usize, u32)> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            let Some(y) = self.fit(i, w, h) else { continue };
            let better = match best {
                None => true,
                Some((bi, by)) => y < by || (y == by && node.width < self.nodes[bi].width),
            };
            if better {
                best = Some((i, y));
            }
        }
        best
    }

    /// Landing height for a `w × h` rectangle whose left edge sits at node `index`.
    fn fit(&self, index: usize, w: u32, h: u32) -> Option<u32> {
        let x = self.nodes[index].x;
        if x.checked_add(w)? > self.size {
            return None;
        }

        let mut remaining = w;
        let mut y = 0;
        for node in &self.nodes[index..] {
            if remaining == 0 {
                break;
            }
            y = y.max(node.y);
            if y.checked_add(h)? > self.size {
                return None;
            }
            remaining = remaining.saturating_sub(node.width);
        }
        Some(y)
    }

    fn place(&mut self, index: usize, x: u32, y: u32, w: u32, h: u32) {
        self.nodes.insert(index, SkylineNode { x, y: y + h, width: w });

        // Trim nodes now shadowed by the new one.
        let mut i = index + 1;
        while i < self.nodes.len() {
            let prev_end = self.nodes[i - 1].end();
            let node = &mut self.nodes[i];
            if node.x >= prev_end {
                break;
            }
            let shrink = prev_end - node.x;
            if node.width <= shrink {
                self.nodes.remove(i);
                continue;
            }
            node.x += shrink;
            node.width -= shrink;
            break;
        }

        self.merge();
    }

    fn merge(&mut self) {
        let mut i = 0;
        while i + 1 < self.nodes.len() {
            if self.nodes[i].y == self.nodes[i + 1].y {
                self.nodes[i].width += self.nodes[i + 1].width;
                self.nodes.remove(i + 1);
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(skyline: &Skyline) {
        let mut x = 0;
        for node in skyline.nodes() {
            assert_eq!(node.x, x, "gap or overlap at x={x}: {:?}", skyline.nodes());
            assert!(node.width > 0);
            x = node.end();
        }
        assert_eq!(x, skyline.size);
    }

    #[test]
    fn fresh_skyline_is_one_node() {
        let s = Skyline::new(64);
        assert_eq!(s.nodes(), &[SkylineNode { x: 0, y: 0, width: 64 }]);
    }

    #[test]
    fn packs_left_to_right_along_the_floor() {
        let mut s = Skyline::new(64);
        assert_eq!(s.pack(16, 8), Some((0, 0)));
        assert_eq!(s.pack(16, 8), Some((16, 0)));
        // Both placements have equal height, so they merge into one node.
        assert_eq!(s.nodes()[0], SkylineNode { x: 0, y: 8, width: 32 });
        assert_covers(&s);
    }

    #[test]
    fn prefers_lowest_landing_height() {
        let mut s = Skyline::new(64);
        s.pack(32, 30).unwrap();
        s.pack(16, 10).unwrap();
        // Remaining floor at x=48 is lower than either placement.
        assert_eq!(s.pack(16, 4), Some((48, 0)));
        assert_covers(&s);
    }

    #[test]
    fn spans_multiple_nodes_using_max_height() {
        let mut s = Skyline::new(64);
        s.pack(16, 10).unwrap();
        s.pack(16, 20).unwrap();
        s.pack(32, 5).unwrap();
        // Full width: must sit on the tallest node.
        assert_eq!(s.pack(64, 4), Some((0, 20)));
        assert_eq!(s.nodes(), &[SkylineNode { x: 0, y: 24, width: 64 }]);
    }

    #[test]
    fn rejects_oversized() {
        let mut s = Skyline::new(32);
        assert_eq!(s.pack(33, 1), None);
        assert_eq!(s.pack(1, 33), None);
        assert_eq!(s.pack(u32::MAX, 1), None);
        assert_eq!(s.nodes().len(), 1);
    }

    #[test]
    fn extend_widens_floor_node() {
        let mut s = Skyline::new(32);
        s.extend(64);
        assert_eq!(s.nodes(), &[SkylineNode { x: 0, y: 0, width: 64 }]);
    }

    #[test]
    fn extend_adds_node_after_raised_tail() {
        let mut s = Skyline::new(32);
        s.pack(32, 4).unwrap();
        s.extend(64);
        assert_eq!(
            s.nodes(),
            &[
                SkylineNode { x: 0, y: 4, width: 32 },
                SkylineNode { x: 32, y: 0, width: 32 },
            ]
        );
        assert_covers(&s);
    }

    #[test]
    fn random_sequence_keeps_coverage() {
        let mut s = Skyline::new(256);
        let mut state = 0x2545_f491_u32;
        for _ in 0..400 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let w = 1 + (state >> 16) % 40;
            let h = 1 + (state >> 8) % 40;
            let _ = s.pack(w, h);
            assert_covers(&s);
        }
    }
}
