// Copyright 2025 Lars Brubaker
// Voronoi dual construction for QuadEdgeMesh.

use super::QuadEdgeMesh;
use crate::edge::{inv_rot, sym, EdgeIdx, EdgeState};
use crate::geom::Point;

impl QuadEdgeMesh {
    /// Assign Voronoi vertices to the dual records of a finished triangulation.
    ///
    /// Walks every live edge reachable from `start` with an explicit stack.
    /// Both faces of a visited edge are examined; each counter-clockwise
    /// triangle gets its circumcenter stored as the origin of the `inv_rot`
    /// record of its three edges, which together form the dual orbit of that
    /// face. Dual records of the unbounded face keep [`Point::INFINITE`].
    ///
    /// Visited primal records move from Initialized to Processed. Returns the
    /// number of Voronoi vertices assigned.
    pub fn build_voronoi(&mut self, start: EdgeIdx) -> usize {
        let mut assigned = 0;
        let mut stack: Vec<EdgeIdx> = vec![start];

        while let Some(e) = stack.pop() {
            if self.state(e) != EdgeState::Initialized {
                continue;
            }

            for side in [e, sym(e)] {
                if self.assign_circumcenter(side) {
                    assigned += 1;
                }
            }

            self.set_state(e, EdgeState::Processed);
            self.set_state(sym(e), EdgeState::Processed);

            // Both ends: the sym is now Processed and will never be popped, so
            // its orbit has to be continued from here.
            for next in [self.onext(e), self.onext(sym(e))] {
                if self.state(next) == EdgeState::Initialized {
                    stack.push(next);
                }
            }
        }

        log::debug!("voronoi pass assigned {} vertices", assigned);
        assigned
    }

    /// Store the circumcenter of `e`'s left triangle on the three dual records
    /// leaving it. Returns false if the face is not a triangle or was already
    /// resolved.
    fn assign_circumcenter(&mut self, e: EdgeIdx) -> bool {
        if self.state(inv_rot(e)) == EdgeState::Initialized {
            return false;
        }
        let Some(tri) = self.left_triangle(e) else {
            return false;
        };

        let center = Point::circumcenter(
            self.origin(tri[0]),
            self.origin(tri[1]),
            self.origin(tri[2]),
        );
        for edge in tri {
            let dual = inv_rot(edge);
            self.set_origin(dual, center);
            self.set_state(dual, EdgeState::Initialized);
        }
        true
    }
}
