// Copyright 2025 Lars Brubaker
// License: MIT
//
// Public entry points: the Triangulator builder, the `triangulate` shortcut
// and the Triangulation result.
//
// Pipeline: validate input -> sort (x desc, y desc) -> dedup -> divide and
// conquer -> Voronoi pass.

mod divide;
mod output;

pub use output::{Edge, EdgeIter};

use std::cmp::Ordering;

use crate::edge::EdgeIdx;
use crate::error::DelaunayError;
use crate::geom::Point;
use crate::mesh::QuadEdgeMesh;

// ─────────────────────────────── Public types ──────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangulationOption {
    /// Compute circumcenters for the dual graph. On by default.
    VoronoiDiagram,
    /// Skip points with NaN or infinite coordinates (logging a warning)
    /// instead of failing. Off by default.
    DropNonFinite,
}

/// Delaunay triangulation of a point set together with its Voronoi dual.
///
/// Owns every quad-edge record created during construction, deleted ones
/// included. Edge views borrow from it and cannot outlive it.
#[derive(Debug, Default)]
pub struct Triangulation {
    mesh: QuadEdgeMesh,
    points: Vec<Point>,
    hull_edge: Option<EdgeIdx>,
    voronoi_vertices: usize,
}

impl Triangulation {
    /// Run the full pipeline on points that are already known to be finite.
    fn build(mut points: Vec<Point>, compute_voronoi: bool) -> Triangulation {
        let input_len = points.len();
        sort_points(&mut points);
        points.dedup();
        log::debug!(
            "triangulating {} points ({} duplicates removed)",
            points.len(),
            input_len - points.len()
        );

        if points.len() < 3 {
            return Triangulation {
                points,
                ..Default::default()
            };
        }

        // Capacity hint from Euler's formula. Quads deleted during merges may
        // push the arena past it.
        let mut mesh = QuadEdgeMesh::with_capacity(3 * points.len());
        let (ldo, _rdo) = mesh.divide(&points, 0, points.len());

        let voronoi_vertices = if compute_voronoi {
            mesh.build_voronoi(ldo)
        } else {
            0
        };

        log::debug!(
            "triangulation has {} edges ({} allocated), {} voronoi vertices",
            mesh.live_handles().count(),
            mesh.len(),
            voronoi_vertices
        );

        Triangulation {
            mesh,
            points,
            hull_edge: Some(ldo),
            voronoi_vertices,
        }
    }

    /// The underlying quad-edge mesh, for navigation by handle.
    pub fn mesh(&self) -> &QuadEdgeMesh {
        &self.mesh
    }

    /// The triangulated vertex set: input points sorted by x then y
    /// (both descending) with exact duplicates removed.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// True if fewer than three distinct points were supplied.
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Counter-clockwise convex hull edge out of the first sorted point.
    pub fn hull_edge(&self) -> Option<EdgeIdx> {
        self.hull_edge
    }

    /// The Delaunay edges: the primary record of every quad ever allocated,
    /// including quads deleted during merges (see [`Edge::deleted`]).
    pub fn primary_edges(&self) -> EdgeIter<'_> {
        EdgeIter::new(&self.mesh, 0)
    }

    /// The Voronoi edges: the dual record of every quad ever allocated.
    /// Each runs from the circumcenter right of its primal edge to the one on
    /// the left; a side facing the unbounded face is [`Point::INFINITE`].
    pub fn dual_edges(&self) -> EdgeIter<'_> {
        EdgeIter::new(&self.mesh, 1)
    }

    /// Primary edges still in the triangulation.
    pub fn delaunay_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.primary_edges().filter(|e| !e.deleted)
    }

    /// Dual edges of live quads. May include edges with an infinite endpoint.
    pub fn voronoi_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.dual_edges().filter(|e| !e.deleted)
    }

    /// Number of edges in the triangulation.
    pub fn edge_count(&self) -> usize {
        self.mesh.live_handles().count()
    }

    /// Number of finite Voronoi vertices assigned by the dual pass.
    pub fn voronoi_vertex_count(&self) -> usize {
        self.voronoi_vertices
    }

    /// Check the structural invariants of the underlying mesh.
    pub fn validate(&self) -> Result<(), DelaunayError> {
        self.mesh.validate()
    }
}

// ─────────────────────────── Triangulator ──────────────────────────────────────

/// Collects points and options, then builds a [`Triangulation`].
#[derive(Clone, Debug)]
pub struct Triangulator {
    points: Vec<Point>,
    compute_voronoi: bool,
    drop_non_finite: bool,
}

impl Triangulator {
    pub fn new() -> Self {
        Triangulator {
            points: Vec::new(),
            compute_voronoi: true,
            drop_non_finite: false,
        }
    }

    pub fn set_option(&mut self, option: TriangulationOption, value: bool) {
        match option {
            TriangulationOption::VoronoiDiagram => self.compute_voronoi = value,
            TriangulationOption::DropNonFinite => self.drop_non_finite = value,
        }
    }

    pub fn add_point(&mut self, point: impl Into<Point>) {
        self.points.push(point.into());
    }

    pub fn add_points<P: Into<Point>>(&mut self, points: impl IntoIterator<Item = P>) {
        self.points.extend(points.into_iter().map(Into::into));
    }

    /// Number of points added so far, duplicates included.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Triangulate the collected points.
    ///
    /// Fails on the first NaN or infinite coordinate unless
    /// [`TriangulationOption::DropNonFinite`] is set. Fewer than three
    /// distinct points give an empty triangulation, not an error.
    pub fn triangulate(&self) -> Result<Triangulation, DelaunayError> {
        let points = if self.drop_non_finite {
            finite_points(&self.points)
        } else {
            if let Some((index, p)) = self.points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
                return Err(DelaunayError::NonFiniteCoordinate {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }
            self.points.clone()
        };
        Ok(Triangulation::build(points, self.compute_voronoi))
    }
}

impl Default for Triangulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Triangulate `points` and compute the Voronoi dual.
///
/// Points with non-finite coordinates are skipped with a warning. Fewer than
/// three distinct points give an empty result.
///
/// ```
/// use quad_delaunay::triangulate;
///
/// let t = triangulate(&[(0.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]);
/// assert_eq!(t.delaunay_edges().count(), 3);
/// assert_eq!(t.voronoi_vertex_count(), 1);
/// ```
pub fn triangulate<P: Into<Point> + Copy>(points: &[P]) -> Triangulation {
    let points: Vec<Point> = points.iter().map(|&p| p.into()).collect();
    Triangulation::build(finite_points(&points), true)
}

fn finite_points(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .enumerate()
        .filter_map(|(index, &p)| {
            if p.is_finite() {
                Some(p)
            } else {
                log::warn!(
                    "dropping point {} with non-finite coordinates ({}, {})",
                    index,
                    p.x,
                    p.y
                );
                None
            }
        })
        .collect()
}

/// Lexicographic order, x descending then y descending. Only called on
/// finite points, so `partial_cmp` always succeeds; it also ranks -0.0 equal
/// to 0.0 so that `dedup` sees them as neighbours.
fn sort_points(points: &mut [Point]) {
    points.sort_by(|a, b| {
        b.x.partial_cmp(&a.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal))
    });
}
