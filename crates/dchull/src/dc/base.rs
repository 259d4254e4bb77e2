//! Base case: link at most three sorted points into one clockwise cycle.

use crate::arena::{lex_cmp, HullArena, PointId};
use crate::cfg::CollinearPolicy;
use crate::error::HullError;
use crate::orient::{turn, Turn};

use super::SubHull;

/// Result of linking one base-case subset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseCase {
    pub hull: SubHull,
    /// Points left off the cycle by `CollinearPolicy::Exclude`.
    pub excluded: Vec<PointId>,
}

/// Link `ids` (1..=3 points, (x, y)-sorted) into a closed cycle.
///
/// Ring position `i` gets `cw = ring[(i+1) % n]` and `ccw = ring[(i+n-1) % n]`.
/// One point links to itself, two points form a 2-cycle. A triangle is linked
/// in sorted order when that order turns right, otherwise as `p0, p2, p1`, so
/// the cycle is always clockwise.
pub fn link_base(
    arena: &mut HullArena,
    ids: &[PointId],
    policy: CollinearPolicy,
) -> Result<BaseCase, HullError> {
    if ids.is_empty() {
        return Err(HullError::EmptyInput);
    }
    debug_assert!(ids.len() <= 3, "base case takes at most three points");
    let mut ring: Vec<PointId> = ids.to_vec();
    let mut excluded = Vec::new();
    match ring.len() {
        2 if policy == CollinearPolicy::Exclude && coincide(arena, ring[0], ring[1]) => {
            excluded.extend(ring.pop());
        }
        3 => match turn(arena.pos(ring[0]), arena.pos(ring[1]), arena.pos(ring[2])) {
            Turn::Right => {}
            Turn::Left => ring.swap(1, 2),
            Turn::Collinear => match policy {
                CollinearPolicy::Reject => {
                    return Err(HullError::DegenerateBaseCase {
                        points: ring.iter().map(|&id| (id, arena.pos(id))).collect(),
                    });
                }
                CollinearPolicy::Exclude => {
                    // Sorted and collinear: the middle point lies on the outer segment.
                    excluded.push(ring.remove(1));
                    if coincide(arena, ring[0], ring[1]) {
                        excluded.extend(ring.pop());
                    }
                }
            },
        },
        _ => {}
    }

    let n = ring.len();
    for i in 0..n {
        arena.link(ring[i], ring[(i + 1) % n]);
    }
    for &id in &excluded {
        arena.unlink(id);
    }

    let by_pos = |a: &PointId, b: &PointId| lex_cmp(&arena.pos(*a), &arena.pos(*b)).then(a.cmp(b));
    let min = ring.iter().copied().min_by(&by_pos).unwrap_or(ring[0]);
    let max = ring.iter().copied().max_by(&by_pos).unwrap_or(ring[0]);
    Ok(BaseCase {
        hull: SubHull { min, max, len: n },
        excluded,
    })
}

#[inline]
fn coincide(arena: &HullArena, a: PointId, b: PointId) -> bool {
    arena.pos(a) == arena.pos(b)
}
