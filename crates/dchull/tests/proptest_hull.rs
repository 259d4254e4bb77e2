//! Property-based tests for the divide-and-conquer hull.
//!
//! Covers:
//! - agreement with the monotone-chain reference on random clouds
//! - link structure after a build (one closed cycle, everything else unlinked)
//! - the same agreement on small integer grids (x-ties, collinear runs, repeats)
//! - orientation predicate antisymmetry

#![forbid(unsafe_code)]

use dchull::prelude::*;
use nalgebra::Vector2;
use proptest::prelude::*;

/// Strategy for generating finite `f64` coordinates in a reasonable range.
fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point() -> impl Strategy<Value = Vector2<f64>> {
    (finite_coordinate(), finite_coordinate()).prop_map(|(x, y)| Vector2::new(x, y))
}

/// Integer lattice point; small sides make ties and collinear triples common.
fn grid_point(side: i32) -> impl Strategy<Value = Vector2<f64>> {
    (0..side, 0..side).prop_map(|(x, y)| Vector2::new(x as f64, y as f64))
}

/// Integer coordinates keep `det` exact, so signs are reliable.
fn exact_point() -> impl Strategy<Value = Vector2<f64>> {
    (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Vector2::new(x as f64, y as f64))
}

proptest! {
    /// Property: the built hull equals the reference hull, vertex by vertex.
    #[test]
    fn prop_hull_matches_reference(points in prop::collection::vec(point(), 1..200)) {
        let mut arena = HullArena::from_unsorted(points.iter().copied());
        let hull = build_hull(&mut arena).unwrap();
        prop_assert_eq!(hull.positions(&arena), convex_hull_cw(&points));
        prop_assert_eq!(hull.len, arena.cycle_len(hull.start).unwrap());
        prop_assert!(is_clockwise_convex(&arena, hull.start));
    }

    /// Property: after a build only hull vertices are linked, and links are mutual.
    #[test]
    fn prop_links_form_one_cycle(points in prop::collection::vec(point(), 3..150)) {
        let mut arena = HullArena::from_unsorted(points);
        let hull = build_hull(&mut arena).unwrap();
        prop_assert!(arena.links_consistent());
        let linked = arena.ids().filter(|&id| arena.is_linked(id)).count();
        prop_assert_eq!(linked, hull.len);
        prop_assert_eq!(linked + hull.discarded.len(), arena.len());
        for id in &hull.discarded {
            prop_assert!(!arena.is_linked(*id));
        }
    }

    /// Property: counter-clockwise traversal is the clockwise one reversed.
    #[test]
    fn prop_ccw_reverses_cw(points in prop::collection::vec(point(), 3..100)) {
        let mut arena = HullArena::from_unsorted(points);
        let hull = build_hull(&mut arena).unwrap();
        let cw: Vec<PointId> = arena.cycle_cw(hull.start).collect();
        let mut ccw: Vec<PointId> = arena.cycle_ccw(hull.start).collect();
        ccw[1..].reverse();
        prop_assert_eq!(cw, ccw);
    }

    /// Property: on integer grids the hull still equals the reference, with or
    /// without repeated points.
    #[test]
    fn prop_grid_hull_matches_reference(
        side in 2i32..12,
        raw in prop::collection::vec(grid_point(12), 1..120),
    ) {
        let points: Vec<Vector2<f64>> = raw
            .into_iter()
            .map(|p| Vector2::new(p.x % side as f64, p.y % side as f64))
            .collect();
        let mut arena = HullArena::from_unsorted(points.iter().copied());
        let hull = build_hull(&mut arena).unwrap();
        prop_assert_eq!(hull.positions(&arena), convex_hull_cw(&points));
        prop_assert!(is_clockwise_convex(&arena, hull.start));
        prop_assert!(arena.links_consistent());
        prop_assert_eq!(hull.len + hull.discarded.len(), arena.len());
    }

    /// Property: reversing the triple flips the turn; `Collinear` stays fixed.
    #[test]
    fn prop_turn_reversal_flips(a in exact_point(), b in exact_point(), c in exact_point()) {
        prop_assert_eq!(turn(c, b, a), turn(a, b, c).flip());
        let cross = (b - a).perp(&(c - a));
        prop_assert_eq!(turn(a, b, c) == Turn::Collinear, cross == 0.0);
    }

    /// Property: swapping the first two arguments flips the turn.
    #[test]
    fn prop_turn_antisymmetric(a in point(), b in point(), c in point()) {
        prop_assert_eq!(turn(b, a, c), turn(a, b, c).flip());
        prop_assert_eq!(det(b, a, c), -det(a, b, c));
    }
}
