// Copyright 2025 Lars Brubaker
// License: MIT
//
// Read-only views over a finished triangulation.

use super::Triangulation;
use crate::edge::{handle, sym, EdgeIdx};
use crate::geom::Point;
use crate::mesh::QuadEdgeMesh;

/// One directed edge of the Delaunay triangulation or the Voronoi diagram.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    /// Handle of the record inside [`Triangulation::mesh`].
    pub id: EdgeIdx,
    pub origin: Point,
    pub destination: Point,
    /// The quad was removed during a merge. Deleted edges keep their last
    /// coordinates but are no longer part of either graph.
    pub deleted: bool,
}

impl Edge {
    /// Both endpoints are finite. Voronoi edges bordering the unbounded face
    /// have one endpoint at [`Point::INFINITE`].
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.destination.is_finite()
    }
}

/// Iterator over one record collection of a mesh, in allocation order.
pub struct EdgeIter<'a> {
    mesh: &'a QuadEdgeMesh,
    rotation: u32,
    next: usize,
}

impl<'a> EdgeIter<'a> {
    pub(crate) fn new(mesh: &'a QuadEdgeMesh, rotation: u32) -> Self {
        Self {
            mesh,
            rotation,
            next: 0,
        }
    }
}

impl<'a> Iterator for EdgeIter<'a> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        if self.next >= self.mesh.len() {
            return None;
        }
        let id = handle(self.next, self.rotation);
        self.next += 1;
        Some(Edge {
            id,
            origin: self.mesh.origin(id),
            destination: self.mesh.destination(id),
            deleted: self.mesh.is_deleted(id),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.mesh.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for EdgeIter<'a> {}

impl Triangulation {
    /// Every triangle of the triangulation, vertices in counter-clockwise
    /// order. Each triangle is reported once.
    pub fn triangles(&self) -> Vec<[Point; 3]> {
        let mut out = Vec::new();
        for e in self.mesh.live_handles() {
            for side in [e, sym(e)] {
                let Some(tri) = self.mesh.left_triangle(side) else {
                    continue;
                };
                // Report from the lowest handle only.
                if tri.iter().all(|&t| side <= t) {
                    out.push(tri.map(|t| self.mesh.origin(t)));
                }
            }
        }
        out
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles().len()
    }

    /// True if any face is a triangle. Stops at the first one found.
    pub(crate) fn has_triangle(&self) -> bool {
        self.mesh.live_handles().any(|e| {
            self.mesh.left_triangle(e).is_some() || self.mesh.left_triangle(sym(e)).is_some()
        })
    }

    /// Convex hull vertices in counter-clockwise order.
    ///
    /// Points lying on a hull edge are included. For a fully collinear input
    /// only the two extreme points are returned.
    pub fn convex_hull(&self) -> Vec<Point> {
        let Some(seed) = self.hull_edge else {
            return Vec::new();
        };
        if !self.has_triangle() {
            return match (self.points.first(), self.points.last()) {
                (Some(&first), Some(&last)) => vec![first, last],
                _ => Vec::new(),
            };
        }

        // The seed has the interior on its left, so sym(seed) walks the
        // unbounded face clockwise.
        let start = sym(seed);
        let mut hull = Vec::new();
        let mut e = start;
        loop {
            hull.push(self.mesh.origin(e));
            e = self.mesh.lnext(e);
            if e == start {
                break;
            }
        }
        hull.reverse();
        hull
    }
}
