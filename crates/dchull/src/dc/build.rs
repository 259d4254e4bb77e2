//! Recursive splitter and the public build entry points.

use std::ops::Range;

use nalgebra::Vector2;
use tracing::debug;

use crate::arena::{lex_cmp, Cycle, HullArena, PointId};
use crate::cfg::HullCfg;
use crate::error::HullError;
use crate::orient::{turn, Turn};

use super::base::link_base;
use super::merge::{merge_hulls, MergeOutcome};
use super::SubHull;

/// Final hull of a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hull {
    /// Lexicographically smallest hull vertex; clockwise traversal starts here.
    pub start: PointId,
    pub len: usize,
    /// Every point removed from a cycle during the build, in discovery order.
    pub discarded: Vec<PointId>,
    pub merges: usize,
}

impl Hull {
    /// Hull vertices in clockwise order, starting at `start`.
    pub fn vertices<'a>(&self, arena: &'a HullArena) -> Cycle<'a> {
        arena.cycle_cw(self.start)
    }

    pub fn positions(&self, arena: &HullArena) -> Vec<Vector2<f64>> {
        self.vertices(arena).map(|id| arena.pos(id)).collect()
    }
}

/// State handed to the merge observer after every merge.
pub struct MergeTrace<'a> {
    /// Recursion depth of the merging call (0 is the final merge).
    pub depth: usize,
    /// Arena index range covered by the merged cycle.
    pub range: Range<usize>,
    pub outcome: &'a MergeOutcome,
    /// Merged cycle, clockwise from its lexicographic min.
    pub cycle: &'a [PointId],
    pub arena: &'a HullArena,
}

type Observer<'o> = Box<dyn FnMut(&MergeTrace<'_>) + 'o>;

/// Divide-and-conquer hull builder.
///
/// ```
/// use dchull::{HullArena, HullBuilder, HullCfg};
/// use nalgebra::vector;
///
/// let mut arena = HullArena::from_unsorted([
///     vector![0.0, 0.0],
///     vector![4.0, 0.0],
///     vector![4.0, 4.0],
///     vector![0.0, 4.0],
///     vector![2.0, 2.0],
/// ]);
/// let mut merges = 0;
/// let hull = HullBuilder::new(HullCfg::default())
///     .with_observer(|_trace| merges += 1)
///     .build(&mut arena)
///     .unwrap();
/// assert_eq!(hull.len, 4);
/// assert_eq!(merges, 1);
/// ```
pub struct HullBuilder<'o> {
    cfg: HullCfg,
    observer: Option<Observer<'o>>,
}

struct Built {
    hull: SubHull,
    discarded: Vec<PointId>,
    merges: usize,
}

impl<'o> HullBuilder<'o> {
    pub fn new(cfg: HullCfg) -> Self {
        Self {
            cfg,
            observer: None,
        }
    }

    /// Call `f` after every merge with the merged cycle.
    pub fn with_observer(mut self, f: impl FnMut(&MergeTrace<'_>) + 'o) -> Self {
        self.observer = Some(Box::new(f));
        self
    }

    /// Build the hull of all arena points. Existing links are cleared first.
    ///
    /// Pre: arena points are sorted by (x, y) and finite.
    /// Post: hull vertices form one clockwise cycle; all other points are unlinked.
    pub fn build(&mut self, arena: &mut HullArena) -> Result<Hull, HullError> {
        check_input(arena)?;
        arena.clear_links();
        let built = self.build_range(arena, 0..arena.len(), 0)?;
        debug!(
            points = arena.len(),
            hull = built.hull.len,
            discarded = built.discarded.len(),
            merges = built.merges,
            "hull built"
        );
        Ok(Hull {
            start: built.hull.min,
            len: built.hull.len,
            discarded: built.discarded,
            merges: built.merges,
        })
    }

    fn build_range(
        &mut self,
        arena: &mut HullArena,
        range: Range<usize>,
        depth: usize,
    ) -> Result<Built, HullError> {
        if range.len() <= 3 {
            let ids: Vec<PointId> = range.map(PointId).collect();
            let base = link_base(arena, &ids, self.cfg.collinear)?;
            return Ok(Built {
                hull: base.hull,
                discarded: base.excluded,
                merges: 0,
            });
        }
        let mid = range.start + range.len() / 2;
        let left = self.build_range(arena, range.start..mid, depth + 1)?;
        let right = self.build_range(arena, mid..range.end, depth + 1)?;
        let outcome = merge_hulls(arena, left.hull, right.hull, self.cfg.walk_cap)?;
        debug!(
            depth,
            lo = range.start,
            hi = range.end,
            upper = ?(outcome.upper.left.0, outcome.upper.right.0),
            lower = ?(outcome.lower.left.0, outcome.lower.right.0),
            discarded = outcome.discarded.len(),
            "merged"
        );
        if let Some(observe) = self.observer.as_mut() {
            let cycle: Vec<PointId> = arena.cycle_cw(outcome.hull.min).collect();
            observe(&MergeTrace {
                depth,
                range: range.clone(),
                outcome: &outcome,
                cycle: &cycle,
                arena,
            });
        }
        let mut discarded = left.discarded;
        discarded.extend(right.discarded);
        discarded.extend_from_slice(&outcome.discarded);
        Ok(Built {
            hull: outcome.hull,
            discarded,
            merges: left.merges + right.merges + 1,
        })
    }
}

/// Build with default configuration.
pub fn build_hull(arena: &mut HullArena) -> Result<Hull, HullError> {
    build_hull_with(arena, HullCfg::default())
}

pub fn build_hull_with(arena: &mut HullArena, cfg: HullCfg) -> Result<Hull, HullError> {
    HullBuilder::new(cfg).build(arena)
}

/// True if no three consecutive vertices of the cycle through `start` turn left.
pub fn is_clockwise_convex(arena: &HullArena, start: PointId) -> bool {
    let cycle: Vec<PointId> = arena.cycle_cw(start).collect();
    let n = cycle.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| {
        let a = arena.pos(cycle[i]);
        let b = arena.pos(cycle[(i + 1) % n]);
        let c = arena.pos(cycle[(i + 2) % n]);
        turn(a, b, c) != Turn::Left
    })
}

fn check_input(arena: &HullArena) -> Result<(), HullError> {
    if arena.is_empty() {
        return Err(HullError::EmptyInput);
    }
    let nodes = arena.nodes();
    for (index, n) in nodes.iter().enumerate() {
        if !(n.pos.x.is_finite() && n.pos.y.is_finite()) {
            return Err(HullError::NonFinite { index });
        }
        if index > 0 && lex_cmp(&nodes[index - 1].pos, &n.pos).is_gt() {
            return Err(HullError::Unsorted { index });
        }
    }
    Ok(())
}
