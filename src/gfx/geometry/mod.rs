//! # Procedural Geometry Generation
//!
//! Stand-in shapes for the stage when model files are missing, plus the floor.
//! Everything is Y-up with counter-clockwise winding.
//!
//! ## Usage
//!
//! ```rust
//! use forest_showcase::gfx::geometry::{generate_box, generate_cylinder, GeometryData};
//!
//! // A seat: a flat box on top of a short post
//! let mut seat = generate_box([0.5, 0.1, 0.5]).translated([0.0, 0.6, 0.0]);
//! seat.append(&generate_cylinder(0.08, 0.5, 16).translated([0.0, 0.25, 0.0]));
//! assert_eq!(seat.triangle_count() * 3, seat.indices.len());
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// Generated geometry ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Offsets every vertex by `offset`
    pub fn translated(mut self, offset: [f32; 3]) -> Self {
        for vertex in &mut self.vertices {
            vertex[0] += offset[0];
            vertex[1] += offset[1];
            vertex[2] += offset[2];
        }
        self
    }

    /// Merges `other` into this geometry, re-basing its indices
    pub fn append(&mut self, other: &GeometryData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|index| index + base));
    }

    /// Converts to the interleaved vertex format used by the renderer
    pub fn to_scene_format(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect();

        (vertices, self.indices.clone())
    }
}
