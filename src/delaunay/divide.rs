// Copyright 2025 Lars Brubaker
// License: MIT
//
// Recursive divide-and-conquer Delaunay construction (Guibas/Stolfi §9).
//
// Input points must be sorted lexicographically by x descending, then y
// descending, with duplicates removed. The order is load-bearing: the
// "left" half of every split lies entirely on one side of the "right" half.
// Sorting descending mirrors the classic ascending sort through a 180°
// rotation, which leaves every orientation and in-circle test unchanged.

use crate::edge::{sym, EdgeIdx};
use crate::geom::Point;
use crate::mesh::QuadEdgeMesh;

impl QuadEdgeMesh {
    /// Triangulate `points[start..start + length]`.
    ///
    /// Returns `(ldo, rdo)`: the counter-clockwise convex hull edge out of the
    /// first point of the range, and the clockwise convex hull edge out of the
    /// last point of the range.
    pub(crate) fn divide(&mut self, points: &[Point], start: usize, length: usize) -> (EdgeIdx, EdgeIdx) {
        debug_assert!(length >= 2, "divide needs at least two points");
        match length {
            2 => {
                let a = self.make_edge(points[start], points[start + 1]);
                (a, sym(a))
            }
            3 => self.build_triangle(points[start], points[start + 1], points[start + 2]),
            _ => {
                let half = length / 2;
                let (ldo, ldi) = self.divide(points, start, half);
                let (rdi, rdo) = self.divide(points, start + half, length - half);
                self.merge(ldo, ldi, rdi, rdo)
            }
        }
    }

    /// Base case for three points. A collinear triple yields the two-edge
    /// path with no closing edge.
    fn build_triangle(&mut self, p1: Point, p2: Point, p3: Point) -> (EdgeIdx, EdgeIdx) {
        let a = self.make_edge(p1, p2);
        let b = self.make_edge(p2, p3);
        self.splice(sym(a), b);

        if Point::counter_clock_wise(p1, p2, p3) {
            self.connect(b, a);
            (a, sym(b))
        } else if Point::counter_clock_wise(p1, p3, p2) {
            let c = self.connect(b, a);
            (sym(c), c)
        } else {
            (a, sym(b))
        }
    }

    /// Walk the inner hull edges of both halves down to the lower common
    /// tangent. Each step moves monotonically around one convex hull, so the
    /// loop terminates.
    fn lower_common_tangent(&self, mut ldi: EdgeIdx, mut rdi: EdgeIdx) -> (EdgeIdx, EdgeIdx) {
        loop {
            if self.is_point_on_left(ldi, self.origin(rdi)) {
                ldi = self.lnext(ldi);
            } else if self.is_point_on_right(rdi, self.origin(ldi)) {
                rdi = self.rprev(rdi);
            } else {
                return (ldi, rdi);
            }
        }
    }

    /// A merge candidate is usable only while its destination lies strictly
    /// right of the current base edge.
    #[inline]
    fn is_valid_candidate(&self, base: EdgeIdx, cand: EdgeIdx) -> bool {
        self.is_point_on_right(base, self.destination(cand))
    }

    /// Stitch two adjacent sub-triangulations together, bottom to top.
    fn merge(
        &mut self,
        mut ldo: EdgeIdx,
        ldi: EdgeIdx,
        rdi: EdgeIdx,
        mut rdo: EdgeIdx,
    ) -> (EdgeIdx, EdgeIdx) {
        let (ldi, rdi) = self.lower_common_tangent(ldi, rdi);

        // First cross edge, from rdi.Org to ldi.Org.
        let mut base = self.connect(sym(rdi), ldi);
        if self.origin(ldi) == self.origin(ldo) {
            ldo = sym(base);
        }
        if self.origin(rdi) == self.origin(rdo) {
            rdo = base;
        }

        loop {
            // Left candidate: counter-clockwise around base.Dst.
            let mut lcand = self.onext(sym(base));
            if self.is_valid_candidate(base, lcand) {
                while Point::in_circle(
                    self.destination(base),
                    self.origin(base),
                    self.destination(lcand),
                    self.destination(self.onext(lcand)),
                ) {
                    let next = self.onext(lcand);
                    log::trace!("merge: deleting left candidate {}", lcand);
                    self.delete_edge(lcand);
                    lcand = next;
                }
            }

            // Right candidate: clockwise around base.Org.
            let mut rcand = self.oprev(base);
            if self.is_valid_candidate(base, rcand) {
                while Point::in_circle(
                    self.destination(base),
                    self.origin(base),
                    self.destination(rcand),
                    self.destination(self.oprev(rcand)),
                ) {
                    let next = self.oprev(rcand);
                    log::trace!("merge: deleting right candidate {}", rcand);
                    self.delete_edge(rcand);
                    rcand = next;
                }
            }

            let lvalid = self.is_valid_candidate(base, lcand);
            let rvalid = self.is_valid_candidate(base, rcand);

            // Base is the upper common tangent.
            if !lvalid && !rvalid {
                break;
            }

            // Connect to the candidate whose circumcircle is empty of the other.
            // An exact cocircular tie keeps the left candidate.
            let pick_right = !lvalid
                || (rvalid
                    && Point::in_circle(
                        self.destination(lcand),
                        self.origin(lcand),
                        self.origin(rcand),
                        self.destination(rcand),
                    ));
            base = if pick_right {
                self.connect(rcand, sym(base))
            } else {
                self.connect(sym(base), sym(lcand))
            };
        }

        (ldo, rdo)
    }
}
