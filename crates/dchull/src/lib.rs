//! Divide-and-conquer planar convex hull.
//!
//! Points live in a [`HullArena`] sorted lexicographically by `(x, y)`. Each
//! point carries optional clockwise and counter-clockwise neighbor links; after
//! a build, the linked points form one clockwise cycle (the hull) and every
//! other point is unlinked.
//!
//! Layout
//! - `orient`: the orientation predicate.
//! - `arena`: point storage, links, cycle traversal, picking and highlights.
//! - `dc`: base cases, the tangent-walk merge, and the recursive builder.
//! - `reference`: monotone-chain oracle used by tests and `check`.
//! - `io`, `rand`, `snapshot`: point files, seeded clouds, renderer view.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod arena;
pub mod cfg;
pub mod dc;
pub mod error;
pub mod io;
pub mod orient;
pub mod rand;
pub mod reference;
pub mod snapshot;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use arena::{Bounds, HullArena, PointId};
pub use cfg::{CollinearPolicy, HullCfg, WalkCap};
pub use dc::{build_hull, build_hull_with, Hull, HullBuilder, MergeTrace};
pub use error::HullError;
pub use nalgebra::Vector2 as Vec2;
pub use orient::{turn, Turn};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arena::{lex_cmp, sort_points, Bounds, HullArena, PointId};
    pub use crate::cfg::{CollinearPolicy, HullCfg, WalkCap};
    pub use crate::dc::{
        build_hull, build_hull_with, is_clockwise_convex, Hull, HullBuilder, MergeOutcome,
        MergeTrace, Pass, Tangent,
    };
    pub use crate::error::HullError;
    pub use crate::orient::{det, turn, Turn};
    pub use crate::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::reference::{convex_hull_ccw, convex_hull_cw};
    pub use crate::snapshot::Snapshot;
    pub use nalgebra::Vector2 as Vec2;
}
