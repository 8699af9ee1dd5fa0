// Copyright 2025 Lars Brubaker
// License: MIT
//
// Quad-edge records and handle arithmetic.
//
// A physical edge is a quadruple of directed records: the primal edge, its
// dual, the primal reversed (sym) and the dual reversed. Raw pointers from the
// Guibas/Stolfi paper are replaced by u32 handles into the mesh arena:
//
//   handle = (quad << 2) | rotation
//
//   rotation 0: primary        (Delaunay edge)
//   rotation 1: dual           (Voronoi edge, rot of primary)
//   rotation 2: primary sym
//   rotation 3: dual sym       (rot of primary sym)
//
// so rot/sym/inv_rot are bit operations and never touch memory. Only the
// `onext` link is stored per record.

use crate::geom::Point;

/// Handle of one directed record inside a [`crate::QuadEdgeMesh`].
pub type EdgeIdx = u32;

/// Null handle. Never stored in a live record.
pub const INVALID: EdgeIdx = u32::MAX;

/// Dual of `e`, rotated 90° counter-clockwise (directed from the right face of
/// `e` to its left face).
#[inline(always)]
pub fn rot(e: EdgeIdx) -> EdgeIdx {
    (e & !3) | (e.wrapping_add(1) & 3)
}

/// Same edge, opposite direction. `rot` applied twice.
#[inline(always)]
pub fn sym(e: EdgeIdx) -> EdgeIdx {
    e ^ 2
}

/// `rot` applied three times (rotation by 90° clockwise).
#[inline(always)]
pub fn inv_rot(e: EdgeIdx) -> EdgeIdx {
    (e & !3) | (e.wrapping_add(3) & 3)
}

/// Index of the quadruple the record belongs to.
#[inline(always)]
pub fn quad(e: EdgeIdx) -> usize {
    (e >> 2) as usize
}

/// Rotation of the record inside its quadruple (0..4).
#[inline(always)]
pub fn rotation(e: EdgeIdx) -> u32 {
    e & 3
}

/// Number of quads a mesh can address. Two bits of every handle hold the
/// rotation, and the all-ones handle is reserved for [`INVALID`].
pub const MAX_QUADS: usize = (1 << 30) - 1;

/// Handle of the record with the given rotation in quad `q`.
/// `q` must be below [`MAX_QUADS`].
#[inline(always)]
pub fn handle(q: usize, rotation: u32) -> EdgeIdx {
    debug_assert!(q < MAX_QUADS, "quad index {} exceeds the handle range", q);
    ((q as EdgeIdx) << 2) | (rotation & 3)
}

/// True for records of the triangulation (rotations 0 and 2), false for
/// records of the Voronoi dual.
#[inline(always)]
pub fn is_primal(e: EdgeIdx) -> bool {
    e & 1 == 0
}

/// How far a record has progressed through construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EdgeState {
    /// Removed from the topology, or a dual record whose origin is not set yet.
    #[default]
    Deleted = 0,
    /// Origin (and, through sym, destination) is set.
    Initialized = 1,
    /// Visited by the Voronoi pass.
    Processed = 2,
}

/// One directed record of a quad-edge quadruple.
#[derive(Clone, Debug)]
pub struct QuadEdge {
    /// Origin vertex for primal records, Voronoi vertex for dual records.
    pub origin: Point,
    /// Next record counter-clockwise around the same origin.
    pub onext: EdgeIdx,
    pub state: EdgeState,
}

impl Default for QuadEdge {
    fn default() -> Self {
        Self {
            origin: Point::INFINITE,
            onext: INVALID,
            state: EdgeState::Deleted,
        }
    }
}
