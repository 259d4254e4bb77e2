//! SVG rendering of an arena snapshot.
//!
//! Every point is a circle; a red arrow points to each clockwise neighbor and a
//! blue arrow to each counter-clockwise neighbor. Highlighted points are filled
//! yellow. The viewport is the bounding box padded by 10% per side; the point
//! radius is 1% of the larger extent.

use std::fmt::Write as _;

use dchull::snapshot::{EdgeKind, Snapshot};
use dchull::Bounds;
use nalgebra::Vector2;

/// Output width in pixels; height follows the aspect ratio.
const CANVAS: f64 = 800.0;
const PAD: f64 = 0.1;
const RADIUS_FRAC: f64 = 0.01;

/// Marker radius in world units for the given point bounds.
pub fn point_radius(bounds: &Bounds) -> f64 {
    let ext = bounds.extent();
    let r = ext.x.max(ext.y) * RADIUS_FRAC;
    if r > 0.0 {
        r
    } else {
        RADIUS_FRAC
    }
}

pub fn render(snap: &Snapshot) -> String {
    let Some(raw) = Bounds::of(snap.points.iter().map(|p| Vector2::new(p.x, p.y))) else {
        return format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS}\" height=\"{CANVAS}\"/>\n"
        );
    };
    let r = point_radius(&raw);
    let mut view = raw.padded(PAD);
    // Zero extent along an axis: open a window of one radius per side.
    for k in 0..2 {
        if view.max[k] - view.min[k] <= 0.0 {
            view.min[k] -= r * 10.0;
            view.max[k] += r * 10.0;
        }
    }
    let ext = view.extent();
    let scale = CANVAS / ext.x.max(ext.y);
    let (w, h) = (ext.x * scale, ext.y * scale);
    // World y grows upward, SVG y grows downward.
    let to_px = |x: f64, y: f64| ((x - view.min.x) * scale, (view.max.y - y) * scale);
    let rp = r * scale;

    let mut s = String::new();
    let _ = writeln!(
        s,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.1}\" height=\"{h:.1}\" viewBox=\"0 0 {w:.3} {h:.3}\">"
    );
    s.push_str("<defs>\n");
    for (id, color) in [("cw", "red"), ("ccw", "blue")] {
        let _ = writeln!(
            s,
            "<marker id=\"{id}\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"6\" markerHeight=\"6\" orient=\"auto\"><path d=\"M0,0 L10,5 L0,10 z\" fill=\"{color}\"/></marker>"
        );
    }
    s.push_str("</defs>\n<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    for (from, to, kind) in snap.edges() {
        let (a, b) = (&snap.points[from], &snap.points[to]);
        let (x1, y1) = to_px(a.x, a.y);
        let (x2, y2) = to_px(b.x, b.y);
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= 2.0 * rp {
            continue;
        }
        // Stop at the target's rim so the head stays visible.
        let (ux, uy) = (dx / len, dy / len);
        let (ex, ey) = (x2 - ux * rp, y2 - uy * rp);
        let (color, marker) = match kind {
            EdgeKind::Cw => ("red", "cw"),
            EdgeKind::Ccw => ("blue", "ccw"),
        };
        let _ = writeln!(
            s,
            "<line x1=\"{x1:.3}\" y1=\"{y1:.3}\" x2=\"{ex:.3}\" y2=\"{ey:.3}\" stroke=\"{color}\" stroke-width=\"1.5\" marker-end=\"url(#{marker})\"/>"
        );
    }
    for p in &snap.points {
        let (cx, cy) = to_px(p.x, p.y);
        let fill = if p.highlight { "yellow" } else { "white" };
        let _ = writeln!(
            s,
            "<circle cx=\"{cx:.3}\" cy=\"{cy:.3}\" r=\"{rp:.3}\" fill=\"{fill}\" stroke=\"black\"><title>{} ({}, {})</title></circle>",
            p.id, p.x, p.y
        );
    }
    s.push_str("</svg>\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use dchull::{build_hull, HullArena, PointId};

    fn square() -> HullArena {
        HullArena::from_unsorted([
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(4.0, 4.0),
            Vector2::new(0.0, 4.0),
            Vector2::new(2.0, 2.0),
        ])
    }

    #[test]
    fn draws_points_and_both_arrow_colors() {
        let mut arena = square();
        build_hull(&mut arena).unwrap();
        arena.set_highlight(PointId(0), true);
        let svg = render(&Snapshot::of(&arena));
        assert_eq!(svg.matches("<circle").count(), 5);
        assert_eq!(svg.matches("stroke=\"red\"").count(), 4);
        assert_eq!(svg.matches("stroke=\"blue\"").count(), 4);
        assert_eq!(svg.matches("fill=\"yellow\"").count(), 1);
    }

    #[test]
    fn radius_is_one_percent_of_larger_extent() {
        let b = Bounds {
            min: Vector2::new(0.0, 0.0),
            max: Vector2::new(200.0, 50.0),
        };
        assert!((point_radius(&b) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_point_and_empty_render() {
        let svg = render(&Snapshot::of(&HullArena::new([Vector2::new(1.0, 1.0)])));
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(!svg.contains("NaN") && !svg.contains("inf"));
        assert!(render(&Snapshot::default()).starts_with("<svg"));
    }
}
