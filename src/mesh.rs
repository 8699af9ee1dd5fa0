// Copyright 2025 Lars Brubaker
// License: MIT
//
// Quad-edge mesh (Guibas/Stolfi, "Primitives for the Manipulation of General
// Subdivisions and the Computation of Voronoi Diagrams").
//
// Design:
//   - Records are stored in four arenas, one per rotation: primary, dual,
//     primary_sym, dual_sym. Quad q owns slot q of every arena.
//   - Handles are u32: (quad << 2) | rotation. See `edge.rs`.
//   - Records are never freed individually. `delete_edge` unlinks a quad and
//     tags it Deleted; all memory goes away when the mesh is dropped, so a
//     handle stays valid for the whole life of its mesh.
//   - Moving forward around an orbit or face ("next") is counter-clockwise,
//     moving backward ("prev") is clockwise.

mod voronoi;

use crate::edge::{
    handle, inv_rot, is_primal, quad, rot, rotation, sym, EdgeIdx, EdgeState, QuadEdge,
};
use crate::error::DelaunayError;
use crate::geom::Point;

/// Owning arena of quad-edge records.
#[derive(Debug, Default)]
pub struct QuadEdgeMesh {
    primary: Vec<QuadEdge>,
    dual: Vec<QuadEdge>,
    primary_sym: Vec<QuadEdge>,
    dual_sym: Vec<QuadEdge>,
}

impl QuadEdgeMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `edges` quadruples.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            primary: Vec::with_capacity(edges),
            dual: Vec::with_capacity(edges),
            primary_sym: Vec::with_capacity(edges),
            dual_sym: Vec::with_capacity(edges),
        }
    }

    /// Number of allocated quadruples, deleted ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// All records of one rotation, indexed by quad.
    pub fn collection(&self, rotation: u32) -> &[QuadEdge] {
        match rotation & 3 {
            0 => &self.primary,
            1 => &self.dual,
            2 => &self.primary_sym,
            _ => &self.dual_sym,
        }
    }

    #[inline]
    pub fn record(&self, e: EdgeIdx) -> &QuadEdge {
        &self.collection(rotation(e))[quad(e)]
    }

    #[inline]
    fn record_mut(&mut self, e: EdgeIdx) -> &mut QuadEdge {
        let q = quad(e);
        match rotation(e) {
            0 => &mut self.primary[q],
            1 => &mut self.dual[q],
            2 => &mut self.primary_sym[q],
            _ => &mut self.dual_sym[q],
        }
    }

    /// Handles of the primary record of every quad, deleted ones included.
    pub fn primary_handles(&self) -> impl Iterator<Item = EdgeIdx> {
        (0..self.len()).map(|q| handle(q, 0))
    }

    /// Handles of the primary record of every quad still in the topology.
    pub fn live_handles(&self) -> impl Iterator<Item = EdgeIdx> + '_ {
        self.primary_handles().filter(move |&e| !self.is_deleted(e))
    }

    // ──────────────────────────── Record access ──────────────────────────────

    #[inline]
    pub fn origin(&self, e: EdgeIdx) -> Point {
        self.record(e).origin
    }

    /// Destination of `e` (= origin of its sym).
    #[inline]
    pub fn destination(&self, e: EdgeIdx) -> Point {
        self.record(sym(e)).origin
    }

    #[inline]
    pub fn state(&self, e: EdgeIdx) -> EdgeState {
        self.record(e).state
    }

    #[inline]
    pub(crate) fn set_state(&mut self, e: EdgeIdx, state: EdgeState) {
        self.record_mut(e).state = state;
    }

    #[inline]
    pub(crate) fn set_origin(&mut self, e: EdgeIdx, origin: Point) {
        self.record_mut(e).origin = origin;
    }

    /// True if the primal edge of `e`'s quad was removed from the topology.
    #[inline]
    pub fn is_deleted(&self, e: EdgeIdx) -> bool {
        self.primary[quad(e)].state == EdgeState::Deleted
    }

    // ──────────────────────────── Navigation ─────────────────────────────────

    /// Onext: next edge counter-clockwise around the origin.
    #[inline]
    pub fn onext(&self, e: EdgeIdx) -> EdgeIdx {
        self.record(e).onext
    }

    /// Oprev: next edge clockwise around the origin. Rot->Onext->Rot
    #[inline]
    pub fn oprev(&self, e: EdgeIdx) -> EdgeIdx {
        rot(self.onext(rot(e)))
    }

    /// Lnext: next edge counter-clockwise around the left face. InvRot->Onext->Rot
    #[inline]
    pub fn lnext(&self, e: EdgeIdx) -> EdgeIdx {
        rot(self.onext(inv_rot(e)))
    }

    /// Lprev: previous edge around the left face. Onext->Sym
    #[inline]
    pub fn lprev(&self, e: EdgeIdx) -> EdgeIdx {
        sym(self.onext(e))
    }

    /// Rnext: next edge counter-clockwise around the right face. Rot->Onext->InvRot
    #[inline]
    pub fn rnext(&self, e: EdgeIdx) -> EdgeIdx {
        inv_rot(self.onext(rot(e)))
    }

    /// Rprev: previous edge around the right face. Sym->Onext
    #[inline]
    pub fn rprev(&self, e: EdgeIdx) -> EdgeIdx {
        self.onext(sym(e))
    }

    /// True if `p` lies strictly to the right of `e`.
    #[inline]
    pub fn is_point_on_right(&self, e: EdgeIdx, p: Point) -> bool {
        Point::counter_clock_wise(p, self.destination(e), self.origin(e))
    }

    /// True if `p` lies strictly to the left of `e`.
    #[inline]
    pub fn is_point_on_left(&self, e: EdgeIdx, p: Point) -> bool {
        Point::counter_clock_wise(p, self.origin(e), self.destination(e))
    }

    /// The three edges bounding the left face of `e`, if that face is a
    /// counter-clockwise triangle. The unbounded face of a triangle-shaped
    /// mesh is also a 3-cycle but turns clockwise, so it is rejected here.
    pub fn left_triangle(&self, e: EdgeIdx) -> Option<[EdgeIdx; 3]> {
        let b = self.lnext(e);
        let c = self.lnext(b);
        if self.lnext(c) != e {
            return None;
        }
        if Point::counter_clock_wise(self.origin(e), self.origin(b), self.origin(c)) {
            Some([e, b, c])
        } else {
            None
        }
    }

    // ──────────────────────── Topological operators ──────────────────────────

    /// MakeEdge: allocates a new quadruple from `origin` to `destination`.
    ///
    /// The primal records become singleton orbits, the two dual records an
    /// orbit of each other (the edge separates a single face from itself).
    /// Returns the primary record.
    pub fn make_edge(&mut self, origin: Point, destination: Point) -> EdgeIdx {
        let q = self.len();
        let e = handle(q, 0);

        self.primary.push(QuadEdge {
            origin,
            onext: e,
            state: EdgeState::Initialized,
        });
        self.dual.push(QuadEdge {
            origin: Point::INFINITE,
            onext: handle(q, 3),
            state: EdgeState::Deleted,
        });
        self.primary_sym.push(QuadEdge {
            origin: destination,
            onext: handle(q, 2),
            state: EdgeState::Initialized,
        });
        self.dual_sym.push(QuadEdge {
            origin: Point::INFINITE,
            onext: handle(q, 1),
            state: EdgeState::Deleted,
        });

        e
    }

    /// Splice: the only operator that changes orbit connectivity.
    ///
    /// Exchanges `a.Onext` with `b.Onext`, and the Onext of their dual images.
    ///   1. if the orbits of `a` and `b` are distinct, they are joined into one;
    ///   2. if they are the same orbit, it is split in two;
    ///   3. if they are the same orbit taken with opposite orientation, a
    ///      segment of it is reversed.
    /// Splice is its own inverse.
    pub fn splice(&mut self, a: EdgeIdx, b: EdgeIdx) {
        let alpha = rot(self.onext(a));
        let beta = rot(self.onext(b));

        let a_onext = self.onext(a);
        let b_onext = self.onext(b);
        let alpha_onext = self.onext(alpha);
        let beta_onext = self.onext(beta);

        self.record_mut(a).onext = b_onext;
        self.record_mut(b).onext = a_onext;
        self.record_mut(alpha).onext = beta_onext;
        self.record_mut(beta).onext = alpha_onext;
    }

    /// DeleteEdge: detaches `e` from both endpoint orbits and tags the quad
    /// Deleted. The records stay allocated so every outstanding handle remains
    /// valid.
    pub fn delete_edge(&mut self, e: EdgeIdx) {
        let e_sym = sym(e);
        let e_oprev = self.oprev(e);
        self.splice(e, e_oprev);
        let sym_oprev = self.oprev(e_sym);
        self.splice(e_sym, sym_oprev);

        self.set_state(e, EdgeState::Deleted);
        self.set_state(e_sym, EdgeState::Deleted);
    }

    /// Connect: adds an edge from `a.Dst` to `b.Org` such that `a`, the new
    /// edge and `b` share the same left face. Returns the new edge.
    pub fn connect(&mut self, a: EdgeIdx, b: EdgeIdx) -> EdgeIdx {
        let e = self.make_edge(self.destination(a), self.origin(b));
        let a_lnext = self.lnext(a);
        self.splice(e, a_lnext);
        self.splice(sym(e), b);
        e
    }

    // ──────────────────────────── Validation ─────────────────────────────────

    /// Checks the structural invariants of every record:
    /// links stay inside the arena, every orbit is circular
    /// (`oprev(onext(e)) == e`), and the live primal records of an orbit
    /// share one origin.
    pub fn validate(&self) -> Result<(), DelaunayError> {
        let total = (self.len() * 4) as EdgeIdx;
        for e in 0..total {
            let next = self.onext(e);
            if next >= total {
                return Err(DelaunayError::DanglingLink { edge: e, next });
            }
            if self.oprev(next) != e {
                return Err(DelaunayError::BrokenOrbit { edge: e });
            }
            if is_primal(e) && !self.is_deleted(e) && self.origin(next) != self.origin(e) {
                return Err(DelaunayError::OrbitOriginMismatch { edge: e });
            }
        }
        Ok(())
    }
}
