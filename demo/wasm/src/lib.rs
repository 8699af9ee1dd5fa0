// Copyright 2025 Lars Brubaker
// WASM bindings for quad-delaunay

use quad_delaunay::{Edge, Point, Triangulation, TriangulationOption, Triangulator};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A stateful triangulator that accumulates points, then triangulates.
#[wasm_bindgen]
pub struct TriangulationJs {
    builder: Triangulator,
    result: Triangulation,
}

#[wasm_bindgen]
impl TriangulationJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TriangulationJs {
        let mut builder = Triangulator::new();
        // JS callers hand us raw Float64Arrays; skip NaN instead of failing.
        builder.set_option(TriangulationOption::DropNonFinite, true);
        TriangulationJs {
            builder,
            result: Triangulation::default(),
        }
    }

    /// Add points from a flat [x0,y0, x1,y1, ...] Float64Array. A trailing
    /// odd coordinate is ignored.
    pub fn add_points(&mut self, coords: &[f64]) {
        self.builder
            .add_points(coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])));
    }

    /// Set an option (0 = VoronoiDiagram, 1 = DropNonFinite).
    pub fn set_option(&mut self, option: u32, value: bool) {
        let opt = match option {
            0 => TriangulationOption::VoronoiDiagram,
            1 => TriangulationOption::DropNonFinite,
            _ => return,
        };
        self.builder.set_option(opt, value);
    }

    pub fn clear(&mut self) {
        self.builder.clear();
        self.result = Triangulation::default();
    }

    /// Triangulate and return true on success. Fails only on non-finite
    /// input with DropNonFinite turned off.
    pub fn triangulate(&mut self) -> bool {
        match self.builder.triangulate() {
            Ok(t) => {
                self.result = t;
                true
            }
            Err(_) => {
                self.result = Triangulation::default();
                false
            }
        }
    }

    pub fn edge_count(&self) -> u32 {
        self.result.edge_count() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.result.triangle_count() as u32
    }

    /// Flat Delaunay segments [ox,oy, dx,dy, ...].
    pub fn delaunay_edges(&self) -> Vec<f64> {
        flatten(self.result.delaunay_edges())
    }

    /// Flat Voronoi segments [ox,oy, dx,dy, ...]. Unbounded edges are left out.
    pub fn voronoi_edges(&self) -> Vec<f64> {
        flatten(self.result.voronoi_edges().filter(|e| e.is_finite()))
    }

    /// Flat triangle vertices [x0,y0, x1,y1, x2,y2, ...], counter-clockwise.
    pub fn triangles(&self) -> Vec<f64> {
        self.result
            .triangles()
            .iter()
            .flat_map(|tri| tri.iter().flat_map(|p| [p.x, p.y]))
            .collect()
    }

    /// Flat convex hull vertices [x0,y0, x1,y1, ...], counter-clockwise.
    pub fn convex_hull(&self) -> Vec<f64> {
        self.result
            .convex_hull()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }
}

impl Default for TriangulationJs {
    fn default() -> Self {
        Self::new()
    }
}

fn flatten(edges: impl Iterator<Item = Edge>) -> Vec<f64> {
    edges
        .flat_map(|e| [e.origin.x, e.origin.y, e.destination.x, e.destination.y])
        .collect()
}

/// Convenience: triangulate a flat [x0,y0, x1,y1, ...] array and return the
/// Delaunay segments.
#[wasm_bindgen]
pub fn triangulate_points(coords: &[f64]) -> Vec<f64> {
    let mut t = TriangulationJs::new();
    t.add_points(coords);
    if !t.triangulate() {
        return Vec::new();
    }
    t.delaunay_edges()
}

/// Convenience: same as triangulate_points but returns the finite Voronoi
/// segments.
#[wasm_bindgen]
pub fn voronoi_points(coords: &[f64]) -> Vec<f64> {
    let mut t = TriangulationJs::new();
    t.add_points(coords);
    if !t.triangulate() {
        return Vec::new();
    }
    t.voronoi_edges()
}
