//! Reference hull: Andrew's monotone chain.
//!
//! Independent of the arena and the tangent walk; used as the oracle by tests
//! and the CLI `check` command. Collinear boundary points are dropped
//! (strict turns only) and exact duplicates collapse to one vertex.

use nalgebra::Vector2;

use crate::arena::lex_cmp;

/// Hull in counter-clockwise order starting at the lexicographic minimum.
/// Fewer than two distinct points yield the distinct points themselves.
pub fn convex_hull_ccw(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Same hull, clockwise from the lexicographic minimum (the builder's order).
pub fn convex_hull_cw(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut hull = convex_hull_ccw(points);
    if hull.len() > 2 {
        hull[1..].reverse();
    }
    hull
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn square_with_center_and_edge_point() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![2.0, 2.0],
            vector![2.0, 0.0],
        ];
        let ccw = convex_hull_ccw(&pts);
        assert_eq!(
            ccw,
            vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![4.0, 4.0], vector![0.0, 4.0]]
        );
        let cw = convex_hull_cw(&pts);
        assert_eq!(
            cw,
            vec![vector![0.0, 0.0], vector![0.0, 4.0], vector![4.0, 4.0], vector![4.0, 0.0]]
        );
    }

    #[test]
    fn duplicates_and_tiny_inputs() {
        let p = vector![1.0, 1.0];
        assert_eq!(convex_hull_ccw(&[p, p, p]), vec![p]);
        assert!(convex_hull_ccw(&[]).is_empty());
    }
}
