// Copyright 2025 Lars Brubaker
// License: MIT

//! Error types for triangulation input and mesh validation.

use thiserror::Error;

use crate::edge::EdgeIdx;
use crate::geom::Real;

/// Errors reported by [`crate::Triangulator`] and [`crate::QuadEdgeMesh::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DelaunayError {
    /// An input point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// Position of the point in the input.
        index: usize,
        /// The offending x coordinate, as given.
        x: Real,
        /// The offending y coordinate, as given.
        y: Real,
    },

    /// A record's `onext` link points outside the arena.
    #[error("edge {edge} links to record {next} outside the mesh")]
    DanglingLink { edge: EdgeIdx, next: EdgeIdx },

    /// `oprev(onext(e)) != e`: the orbit through `edge` is not a cycle.
    #[error("orbit through edge {edge} is not circular")]
    BrokenOrbit { edge: EdgeIdx },

    /// Two live primal records share an orbit but not an origin.
    #[error("edge {edge} shares an orbit with an edge of a different origin")]
    OrbitOriginMismatch { edge: EdgeIdx },
}
