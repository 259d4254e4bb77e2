//! Divide-and-conquer hull construction.
//!
//! Purpose
//! - Split an (x, y)-sorted point arena by index, link ≤3-point subsets into
//!   trivial clockwise cycles, and merge neighboring cycles through their upper
//!   and lower tangents.
//!
//! Layout
//! - `base.rs`: trivial cycles and the collinear policy.
//! - `merge.rs`: the tangent walk (one routine for both passes) and relinking.
//! - `build.rs`: the recursive splitter, input checks, and the merge observer.
//!
//! Invariants between calls
//! - A `SubHull` names the lexicographic min and max members of a closed
//!   clockwise cycle plus its length. No three consecutive members are
//!   collinear. Every arena point is either on exactly one such cycle or fully
//!   unlinked.
//! - Points dropped by a merge are unlinked before the merge returns.

mod base;
mod build;
mod merge;

pub use base::{link_base, BaseCase};
pub use build::{build_hull, build_hull_with, is_clockwise_convex, Hull, HullBuilder, MergeTrace};
pub use merge::{merge_hulls, MergeOutcome, Pass, Tangent};

use crate::arena::PointId;

/// Handle to one closed clockwise cycle in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubHull {
    /// Lexicographically smallest member.
    pub min: PointId,
    /// Lexicographically largest member.
    pub max: PointId,
    pub len: usize,
}
