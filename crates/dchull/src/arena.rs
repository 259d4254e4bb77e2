//! Point arena with clockwise / counter-clockwise neighbor links.
//!
//! Purpose
//! - Every input point lives at a stable index (`PointId`) for the whole build.
//!   Links are `Option<PointId>`, so merges rewrite neighbors freely without
//!   aliasing between nested recursive calls.
//! - A hull cycle is implicit: follow `cw` until the start comes back. `ccw` is
//!   the inverse relation. A point outside every cycle has both links `None`.
//!
//! The arena also carries the renderer-facing state (`highlight`) and a couple
//! of helpers a viewer needs (`pick`, `bounds`).

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Stable index of a point inside a `HullArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// One point plus its hull links.
#[derive(Clone, Debug)]
pub struct Node {
    pub pos: Vector2<f64>,
    pub(crate) cw: Option<PointId>,
    pub(crate) ccw: Option<PointId>,
    /// Debug aid for viewers; no algorithmic meaning.
    pub highlight: bool,
}

impl Node {
    fn new(pos: Vector2<f64>) -> Self {
        Self {
            pos,
            cw: None,
            ccw: None,
            highlight: false,
        }
    }
    #[inline]
    pub fn cw(&self) -> Option<PointId> {
        self.cw
    }
    #[inline]
    pub fn ccw(&self) -> Option<PointId> {
        self.ccw
    }
}

/// Lexicographic (x, then y) order used for sorting and extreme-point tie-breaks.
#[inline]
pub fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Sort points in place by (x, y).
pub fn sort_points(points: &mut [Vector2<f64>]) {
    points.sort_by(lex_cmp);
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds {
    pub fn of(points: impl IntoIterator<Item = Vector2<f64>>) -> Option<Bounds> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Bounds {
            min: first,
            max: first,
        };
        for p in it {
            b.min = b.min.inf(&p);
            b.max = b.max.sup(&p);
        }
        Some(b)
    }
    #[inline]
    pub fn extent(&self) -> Vector2<f64> {
        self.max - self.min
    }
    /// Grow each side by `frac` of the extent along that axis.
    pub fn padded(&self, frac: f64) -> Bounds {
        let pad = self.extent() * frac;
        Bounds {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

/// Backing store for all points of one hull computation.
#[derive(Clone, Debug, Default)]
pub struct HullArena {
    nodes: Vec<Node>,
}

impl HullArena {
    /// Wrap points in the given order. The builder requires (x, y) order.
    pub fn new(points: impl IntoIterator<Item = Vector2<f64>>) -> Self {
        Self {
            nodes: points.into_iter().map(Node::new).collect(),
        }
    }

    /// Sort by (x, y) first, then wrap.
    pub fn from_unsorted(points: impl IntoIterator<Item = Vector2<f64>>) -> Self {
        let mut pts: Vec<Vector2<f64>> = points.into_iter().collect();
        sort_points(&mut pts);
        Self::new(pts)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    #[inline]
    pub fn node(&self, id: PointId) -> &Node {
        &self.nodes[id.0]
    }
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    #[inline]
    pub fn pos(&self, id: PointId) -> Vector2<f64> {
        self.nodes[id.0].pos
    }
    #[inline]
    pub fn cw(&self, id: PointId) -> Option<PointId> {
        self.nodes[id.0].cw
    }
    #[inline]
    pub fn ccw(&self, id: PointId) -> Option<PointId> {
        self.nodes[id.0].ccw
    }
    #[inline]
    pub fn is_linked(&self, id: PointId) -> bool {
        let n = &self.nodes[id.0];
        n.cw.is_some() || n.ccw.is_some()
    }
    pub fn ids(&self) -> impl Iterator<Item = PointId> {
        (0..self.nodes.len()).map(PointId)
    }

    /// Make `b` the clockwise successor of `a` (and `a` the ccw successor of `b`).
    #[inline]
    pub(crate) fn link(&mut self, a: PointId, b: PointId) {
        self.nodes[a.0].cw = Some(b);
        self.nodes[b.0].ccw = Some(a);
    }

    #[inline]
    pub(crate) fn unlink(&mut self, id: PointId) {
        let n = &mut self.nodes[id.0];
        n.cw = None;
        n.ccw = None;
    }

    /// Drop every link (fresh rebuild on the same arena).
    pub fn clear_links(&mut self) {
        for n in &mut self.nodes {
            n.cw = None;
            n.ccw = None;
        }
    }

    /// Clockwise traversal starting at `start` (yields `start` first).
    pub fn cycle_cw(&self, start: PointId) -> Cycle<'_> {
        Cycle::new(self, start, Dir::Cw)
    }

    /// Counter-clockwise traversal starting at `start` (yields `start` first).
    pub fn cycle_ccw(&self, start: PointId) -> Cycle<'_> {
        Cycle::new(self, start, Dir::Ccw)
    }

    /// Length of the cycle through `start`, or `None` if following `cw` does
    /// not close, or `ccw` is not its inverse somewhere along the way.
    pub fn cycle_len(&self, start: PointId) -> Option<usize> {
        let mut cur = start;
        let mut count = 0usize;
        loop {
            let next = self.cw(cur)?;
            if self.ccw(next) != Some(cur) {
                return None;
            }
            count += 1;
            cur = next;
            if cur == start {
                return Some(count);
            }
            if count > self.nodes.len() {
                return None;
            }
        }
    }

    /// Check the global link invariant: every point is either unlinked or on a
    /// closed cycle whose `ccw` links invert its `cw` links.
    pub fn links_consistent(&self) -> bool {
        self.ids().all(|id| match (self.cw(id), self.ccw(id)) {
            (None, None) => true,
            (Some(_), Some(_)) => self.cycle_len(id).is_some(),
            _ => false,
        })
    }

    pub fn set_highlight(&mut self, id: PointId, on: bool) {
        self.nodes[id.0].highlight = on;
    }
    pub fn toggle_highlight(&mut self, id: PointId) -> bool {
        let n = &mut self.nodes[id.0];
        n.highlight = !n.highlight;
        n.highlight
    }
    pub fn clear_highlights(&mut self) {
        for n in &mut self.nodes {
            n.highlight = false;
        }
    }

    /// Nearest point to `(x, y)` strictly within `radius`, if any.
    pub fn pick(&self, x: f64, y: f64, radius: f64) -> Option<PointId> {
        let q = Vector2::new(x, y);
        let mut best: Option<(PointId, f64)> = None;
        for (i, n) in self.nodes.iter().enumerate() {
            let d = (n.pos - q).norm();
            if d < radius && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((PointId(i), d));
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.nodes.iter().map(|n| n.pos))
    }
}

#[derive(Clone, Copy, Debug)]
enum Dir {
    Cw,
    Ccw,
}

/// Iterator over one hull cycle. Stops when the start comes back, when a link
/// is missing, or after `arena.len()` items.
pub struct Cycle<'a> {
    arena: &'a HullArena,
    start: PointId,
    next: Option<PointId>,
    dir: Dir,
    remaining: usize,
}

impl<'a> Cycle<'a> {
    fn new(arena: &'a HullArena, start: PointId, dir: Dir) -> Self {
        Self {
            arena,
            start,
            next: Some(start),
            dir,
            remaining: arena.len(),
        }
    }
}

impl Iterator for Cycle<'_> {
    type Item = PointId;

    fn next(&mut self) -> Option<PointId> {
        if self.remaining == 0 {
            return None;
        }
        let cur = self.next?;
        self.remaining -= 1;
        let succ = match self.dir {
            Dir::Cw => self.arena.cw(cur),
            Dir::Ccw => self.arena.ccw(cur),
        };
        let start = self.start;
        self.next = succ.filter(|&s| s != start);
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn triangle() -> HullArena {
        let mut a = HullArena::new([vector![0.0, 0.0], vector![1.0, 2.0], vector![2.0, 0.0]]);
        a.link(PointId(0), PointId(1));
        a.link(PointId(1), PointId(2));
        a.link(PointId(2), PointId(0));
        a
    }

    #[test]
    fn from_unsorted_orders_by_x_then_y() {
        let a = HullArena::from_unsorted([
            vector![2.0, 1.0],
            vector![0.0, 5.0],
            vector![2.0, -1.0],
            vector![0.0, 1.0],
        ]);
        let xs: Vec<(f64, f64)> = a.nodes().iter().map(|n| (n.pos.x, n.pos.y)).collect();
        assert_eq!(xs, vec![(0.0, 1.0), (0.0, 5.0), (2.0, -1.0), (2.0, 1.0)]);
    }

    #[test]
    fn cycle_iterators_are_reverses() {
        let a = triangle();
        let cw: Vec<_> = a.cycle_cw(PointId(0)).collect();
        let ccw: Vec<_> = a.cycle_ccw(PointId(0)).collect();
        assert_eq!(cw, vec![PointId(0), PointId(1), PointId(2)]);
        assert_eq!(ccw, vec![PointId(0), PointId(2), PointId(1)]);
        assert_eq!(a.cycle_len(PointId(1)), Some(3));
        assert!(a.links_consistent());
    }

    #[test]
    fn half_linked_point_breaks_consistency() {
        let mut a = triangle();
        a.nodes[1].ccw = None;
        assert!(!a.links_consistent());
        a.unlink(PointId(1));
        // 0 -> 1 is now a dangling cw link.
        assert_eq!(a.cycle_len(PointId(0)), None);
    }

    #[test]
    fn unlinked_point_yields_only_itself() {
        let a = HullArena::new([vector![0.0, 0.0]]);
        let it: Vec<_> = a.cycle_cw(PointId(0)).collect();
        assert_eq!(it, vec![PointId(0)]);
        assert_eq!(a.cycle_len(PointId(0)), None);
        assert!(a.links_consistent());
    }

    #[test]
    fn pick_nearest_within_radius() {
        let mut a = triangle();
        assert_eq!(a.pick(0.9, 1.9, 0.5), Some(PointId(1)));
        assert_eq!(a.pick(5.0, 5.0, 0.5), None);
        assert!(a.toggle_highlight(PointId(1)));
        assert!(!a.toggle_highlight(PointId(1)));
        a.set_highlight(PointId(2), true);
        a.clear_highlights();
        assert!(a.nodes().iter().all(|n| !n.highlight));
    }

    #[test]
    fn bounds_and_padding() {
        let a = triangle();
        let b = a.bounds().unwrap();
        assert_eq!(b.min, vector![0.0, 0.0]);
        assert_eq!(b.max, vector![2.0, 2.0]);
        let p = b.padded(0.1);
        assert!((p.min.x + 0.2).abs() < 1e-12 && (p.max.y - 2.2).abs() < 1e-12);
        assert!(HullArena::default().bounds().is_none());
    }
}
