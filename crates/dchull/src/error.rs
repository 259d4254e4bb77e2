//! Errors surfaced by hull construction.

use std::fmt;

use nalgebra::Vector2;

use crate::arena::PointId;
use crate::dc::Pass;

/// Errors of the divide-and-conquer builder.
///
/// Input contract violations (`EmptyInput`, `NonFinite`, `Unsorted`) are
/// detected before any link is written. The remaining variants abort a build
/// midway; the arena is left in a partially linked state.
#[derive(Debug, Clone, PartialEq)]
pub enum HullError {
    EmptyInput,
    /// Coordinate at this arena index is NaN or infinite.
    NonFinite { index: usize },
    /// Point at `index` sorts before its predecessor under (x, y).
    Unsorted { index: usize },
    /// Three collinear points reached the base case under `CollinearPolicy::Reject`.
    DegenerateBaseCase {
        points: Vec<(PointId, Vector2<f64>)>,
    },
    /// A walk reached a point with a missing neighbor link.
    BrokenCycle { at: PointId },
    /// A tangent pass exceeded its step cap.
    TangentWalkNonTermination {
        pass: Pass,
        steps: usize,
        at: (PointId, PointId),
        left: Vec<PointId>,
        right: Vec<PointId>,
    },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "no points to build a hull from"),
            HullError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            HullError::Unsorted { index } => write!(
                f,
                "points are not sorted by (x, y): point {index} precedes its predecessor"
            ),
            HullError::DegenerateBaseCase { points } => {
                write!(f, "base case points are collinear:")?;
                for (id, p) in points {
                    write!(f, " {}=({}, {})", id.0, p.x, p.y)?;
                }
                Ok(())
            }
            HullError::BrokenCycle { at } => {
                write!(f, "point {} is not on a closed hull cycle", at.0)
            }
            HullError::TangentWalkNonTermination {
                pass,
                steps,
                at,
                left,
                right,
            } => write!(
                f,
                "{pass} tangent walk did not settle after {steps} steps at ({}, {}) \
                 (left cycle has {} points, right cycle has {})",
                at.0 .0,
                at.1 .0,
                left.len(),
                right.len()
            ),
        }
    }
}

impl std::error::Error for HullError {}
