// quad-delaunay: Delaunay triangulation and Voronoi diagram by divide and
// conquer over a quad-edge mesh (Guibas & Stolfi, 1985).
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod delaunay;
pub mod edge;
pub mod error;
pub mod geom;
pub mod mesh;

pub use delaunay::{triangulate, Edge, EdgeIter, Triangulation, TriangulationOption, Triangulator};
pub use edge::{EdgeIdx, EdgeState};
pub use error::DelaunayError;
pub use geom::{Point, Real};
pub use mesh::QuadEdgeMesh;
