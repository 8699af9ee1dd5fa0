// Copyright 2025 Lars Brubaker
//! Property-based tests for the divide-and-conquer triangulation.
//!
//! Random clouds check the empty-circumcircle property and Euler's formula.
//! Small integer lattices are full of collinear and cocircular subsets and
//! check that the mesh stays structurally sound on exact ties.

mod helpers;

use helpers::{dedup_points, euler_counts, find_delaunay_violation};
use proptest::prelude::*;
use quad_delaunay::{triangulate, Point};

/// Strategy for generating finite f64 coordinates.
fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point_cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(
        (finite_coordinate(), finite_coordinate()).prop_map(Point::from),
        3..40,
    )
}

fn lattice_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(
        (-4i32..=4, -4i32..=4).prop_map(|(x, y)| Point::new(x as f64, y as f64)),
        3..30,
    )
}

fn vertex_count(points: &[Point], used: impl Iterator<Item = Point>) -> usize {
    let used: Vec<Point> = used.collect();
    points.iter().filter(|p| used.contains(p)).count()
}

proptest! {
    /// Property: no input point lies strictly inside any triangle's circumcircle.
    #[test]
    fn prop_empty_circumcircle(points in point_cloud()) {
        let t = triangulate(&points);
        prop_assert!(t.validate().is_ok());
        let violation = find_delaunay_violation(&t);
        prop_assert!(violation.is_none(), "violation: {:?}", violation);
    }

    /// Property: edge and triangle counts follow Euler's formula.
    #[test]
    fn prop_euler_counts(points in point_cloud()) {
        let unique = dedup_points(&points);
        let t = triangulate(&points);
        prop_assert_eq!(t.points().len(), unique.len());
        if t.triangle_count() > 0 {
            let h = t.convex_hull().len();
            let (edges, triangles) = euler_counts(unique.len(), h);
            prop_assert_eq!(t.edge_count(), edges);
            prop_assert_eq!(t.triangle_count(), triangles);
            prop_assert_eq!(t.voronoi_vertex_count(), triangles);
        }
    }

    /// Property: shuffling the input does not change the edge set.
    #[test]
    fn prop_order_independent(points in point_cloud(), shift in 0usize..40) {
        let mut rotated = points.clone();
        let len = rotated.len();
        rotated.rotate_left(shift % len);
        prop_assert_eq!(
            helpers::undirected_edges(&triangulate(&points)),
            helpers::undirected_edges(&triangulate(&rotated))
        );
    }

    /// Property: lattice inputs keep a consistent mesh that touches every point.
    #[test]
    fn prop_lattice_is_sound(points in lattice_points()) {
        let t = triangulate(&points);
        prop_assert!(t.validate().is_ok());
        if !t.is_empty() {
            let used = t.delaunay_edges().flat_map(|e| [e.origin, e.destination]);
            prop_assert_eq!(vertex_count(t.points(), used), t.points().len());
        }
        for tri in t.triangles() {
            prop_assert!(Point::counter_clock_wise(tri[0], tri[1], tri[2]));
        }
    }
}
