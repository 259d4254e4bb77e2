//! Read-only view of the arena for renderers and JSON output.
//!
//! Per point: coordinates, clockwise and counter-clockwise neighbor (by arena
//! index), and the highlight flag. Renderers draw an arrow to each present
//! neighbor, one color per direction.

use serde::{Deserialize, Serialize};

use crate::arena::HullArena;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointView {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub cw: Option<usize>,
    pub ccw: Option<usize>,
    pub highlight: bool,
}

/// Direction of a drawn neighbor edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Cw,
    Ccw,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub points: Vec<PointView>,
}

impl Snapshot {
    pub fn of(arena: &HullArena) -> Self {
        let points = arena
            .nodes()
            .iter()
            .enumerate()
            .map(|(id, n)| PointView {
                id,
                x: n.pos.x,
                y: n.pos.y,
                cw: n.cw().map(|p| p.0),
                ccw: n.ccw().map(|p| p.0),
                highlight: n.highlight,
            })
            .collect();
        Self { points }
    }

    /// Every directed neighbor edge `(from, to, kind)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, EdgeKind)> + '_ {
        self.points.iter().flat_map(|p| {
            let cw = p.cw.map(|to| (p.id, to, EdgeKind::Cw));
            let ccw = p.ccw.map(|to| (p.id, to, EdgeKind::Ccw));
            cw.into_iter().chain(ccw)
        })
    }
}
