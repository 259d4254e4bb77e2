//! Hull construction configuration.
//!
//! Policy
//! - Defaults are the hardened behavior: collinear base-case triples are
//!   pruned, and every tangent walk is capped by the sizes of the two input
//!   cycles. Callers only override these to surface degeneracies as errors or
//!   to exercise the cap in tests.

/// What the base case does with three collinear (or coincident) points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollinearPolicy {
    /// Drop the middle point from the cycle and report it as discarded.
    #[default]
    Exclude,
    /// Abort with `HullError::DegenerateBaseCase`.
    Reject,
}

/// Upper bound on the number of steps of one tangent pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalkCap {
    /// `len(left) + len(right) + 1`: enough for any pass over convex inputs.
    #[default]
    Auto,
    Fixed(usize),
}

impl WalkCap {
    #[inline]
    pub fn steps(self, left_len: usize, right_len: usize) -> usize {
        match self {
            WalkCap::Auto => left_len + right_len + 1,
            WalkCap::Fixed(n) => n,
        }
    }
}

/// Builder configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    pub collinear: CollinearPolicy,
    pub walk_cap: WalkCap,
}
