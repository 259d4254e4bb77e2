//! Tangent merge of two lexicographically separated clockwise cycles.
//!
//! Both tangents come from one walk routine parameterized by `Pass`:
//! - `Upper` walks the upper chains: the left candidate moves ccw from the
//!   left max toward the left min, the right candidate moves cw from the right
//!   min toward the right max.
//! - `Lower` walks the lower chains: left moves cw, right moves ccw, same ends.
//!
//! A candidate moves on unless the turn strictly confirms a hull corner
//! (`Right` on the upper chain, `Left` on the lower chain). Along a chain the
//! (x, y) order puts a collinear candidate between its neighbor and the
//! opposite candidate, so a passed point is never a strict hull vertex.
//!
//! Both passes read the untouched input cycles. Links are rewritten only once
//! both tangents are known.

use std::fmt;

use tracing::trace;

use crate::arena::{HullArena, PointId};
use crate::cfg::WalkCap;
use crate::error::HullError;
use crate::orient::{turn, Turn};

use super::SubHull;

/// Which tangent a walk is searching for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pass {
    Upper,
    Lower,
}

impl Pass {
    /// Turn that keeps a candidate in place: a strict corner of this chain.
    #[inline]
    pub fn corner(self) -> Turn {
        match self {
            Pass::Upper => Turn::Right,
            Pass::Lower => Turn::Left,
        }
    }

    #[inline]
    fn left_step(self, arena: &HullArena, id: PointId) -> Option<PointId> {
        match self {
            Pass::Upper => arena.ccw(id),
            Pass::Lower => arena.cw(id),
        }
    }

    #[inline]
    fn right_step(self, arena: &HullArena, id: PointId) -> Option<PointId> {
        match self {
            Pass::Upper => arena.cw(id),
            Pass::Lower => arena.ccw(id),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Upper => f.write_str("upper"),
            Pass::Lower => f.write_str("lower"),
        }
    }
}

/// Tangent edge between the left and the right cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    pub left: PointId,
    pub right: PointId,
}

/// Result of one merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    pub hull: SubHull,
    pub upper: Tangent,
    pub lower: Tangent,
    /// Points that were on an input cycle and are now interior (already unlinked).
    pub discarded: Vec<PointId>,
}

/// Merge `left` and `right` into one clockwise cycle.
///
/// Pre: both are closed clockwise cycles without collinear consecutive
/// vertices, and every member of `left` sorts (x, y)-before every member of
/// `right`. The merged cycle keeps `left.min` and `right.max` as extremes.
pub fn merge_hulls(
    arena: &mut HullArena,
    left: SubHull,
    right: SubHull,
    cap: WalkCap,
) -> Result<MergeOutcome, HullError> {
    let start = Tangent {
        left: left.max,
        right: right.min,
    };
    // Two coincident single points: nothing to walk, keep the left one.
    if left.len == 1 && right.len == 1 && arena.pos(left.min) == arena.pos(right.min) {
        arena.unlink(right.min);
        return Ok(MergeOutcome {
            hull: left,
            upper: start,
            lower: start,
            discarded: vec![right.min],
        });
    }
    let max_steps = cap.steps(left.len, right.len);
    let upper = walk(arena, start, Pass::Upper, max_steps, left, right)?;
    let lower = walk(arena, start, Pass::Lower, max_steps, left, right)?;

    // Left arc from the upper to the lower tangent point faces the right cycle;
    // right arc from the lower to the upper tangent point faces the left cycle.
    // Equal endpoints on one side can only be that side's outer extreme.
    let mut discarded = arc_between(arena, upper.left, lower.left);
    discarded.extend(arc_between(arena, lower.right, upper.right));

    arena.link(upper.left, upper.right);
    arena.link(lower.right, lower.left);
    for &id in &discarded {
        arena.unlink(id);
    }

    let hull = SubHull {
        min: left.min,
        max: right.max,
        len: (left.len + right.len).saturating_sub(discarded.len()),
    };
    Ok(MergeOutcome {
        hull,
        upper,
        lower,
        discarded,
    })
}

/// Walk one chain pair. The left candidate stops at `left.min`, the right one
/// at `right.max`.
fn walk(
    arena: &HullArena,
    start: Tangent,
    pass: Pass,
    max_steps: usize,
    left: SubHull,
    right: SubHull,
) -> Result<Tangent, HullError> {
    let corner = pass.corner();
    let (mut l, mut r) = (start.left, start.right);
    let mut steps = 0usize;
    loop {
        let mut moved = false;
        if l != left.min {
            let l_next = pass
                .left_step(arena, l)
                .ok_or(HullError::BrokenCycle { at: l })?;
            if turn(arena.pos(l_next), arena.pos(l), arena.pos(r)) != corner {
                l = l_next;
                moved = true;
            }
        }
        if !moved && r != right.max {
            let r_next = pass
                .right_step(arena, r)
                .ok_or(HullError::BrokenCycle { at: r })?;
            if turn(arena.pos(l), arena.pos(r), arena.pos(r_next)) != corner {
                r = r_next;
                moved = true;
            }
        }
        if !moved {
            return Ok(Tangent { left: l, right: r });
        }
        steps += 1;
        trace!(%pass, steps, l = l.0, r = r.0, "tangent step");
        if steps > max_steps {
            return Err(HullError::TangentWalkNonTermination {
                pass,
                steps,
                at: (l, r),
                left: arena.cycle_cw(left.min).collect(),
                right: arena.cycle_cw(right.min).collect(),
            });
        }
    }
}

/// Members strictly between `from` and `to` following `cw`. When
/// `from == to` this is every other member of the cycle.
fn arc_between(arena: &HullArena, from: PointId, to: PointId) -> Vec<PointId> {
    let mut out = Vec::new();
    let mut cur = arena.cw(from);
    while let Some(c) = cur {
        if c == to || c == from || out.len() >= arena.len() {
            break;
        }
        out.push(c);
        cur = arena.cw(c);
    }
    out
}
