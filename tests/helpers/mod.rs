// Copyright 2025 Lars Brubaker
// Shared test utilities for quad-delaunay tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use quad_delaunay::{Point, Triangulation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Undirected edge keyed by the bit patterns of its endpoints, smaller first.
pub type EdgeKey = [(u64, u64); 2];

pub fn point_key(p: Point) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

pub fn edge_key(a: Point, b: Point) -> EdgeKey {
    let (ka, kb) = (point_key(a), point_key(b));
    if ka <= kb {
        [ka, kb]
    } else {
        [kb, ka]
    }
}

/// Undirected live edges of a triangulation.
pub fn undirected_edges(t: &Triangulation) -> BTreeSet<EdgeKey> {
    t.delaunay_edges()
        .map(|e| edge_key(e.origin, e.destination))
        .collect()
}

/// `n` uniformly distributed points in `[-extent, extent)²`.
pub fn random_points(seed: u64, n: usize, extent: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
            )
        })
        .collect()
}

/// Exact-duplicate-free copy of `points`, first occurrence wins.
pub fn dedup_points(points: &[Point]) -> Vec<Point> {
    let mut seen = BTreeSet::new();
    points
        .iter()
        .copied()
        .filter(|&p| seen.insert(point_key(p)))
        .collect()
}

/// Returns the first input point strictly inside the circumcircle of a
/// triangle, with a relative tolerance so round-off on near-cocircular points
/// is not reported.
pub fn find_delaunay_violation(t: &Triangulation) -> Option<([Point; 3], Point)> {
    for tri in t.triangles() {
        // Work relative to one corner so far-off clouds keep their precision.
        let o = tri[0];
        let local = |p: Point| Point::new(p.x - o.x, p.y - o.y);
        let center = Point::circumcenter(Point::default(), local(tri[1]), local(tri[2]));
        let r2 = center.distance_squared(Point::default());
        for &p in t.points() {
            if tri.contains(&p) {
                continue;
            }
            if center.distance_squared(local(p)) < r2 * (1.0 - 1e-9) {
                return Some((tri, p));
            }
        }
    }
    None
}

/// Euler's formula for a triangulation of `n` points with `h` boundary
/// vertices: (edges, triangles).
pub fn euler_counts(n: usize, h: usize) -> (usize, usize) {
    (3 * n - 3 - h, 2 * n - 2 - h)
}

pub fn assert_close(actual: Point, expected: Point, tolerance: f64) {
    let scale = 1.0_f64.max(expected.x.abs()).max(expected.y.abs());
    assert!(
        (actual.x - expected.x).abs() <= tolerance * scale
            && (actual.y - expected.y).abs() <= tolerance * scale,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
