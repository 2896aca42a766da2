//! # Procedural Geometry
//!
//! Mesh data lives in [`GeometryData`]: flat position/normal/index arrays
//! ready for GPU upload. Buffers are filled by exactly one generator call
//! ([`generate_icosphere`] or [`generate_quad`]) and stay immutable until
//! the next full regeneration; there are no incremental edits.

pub mod icosphere;
pub mod quad;

pub use icosphere::{generate_icosphere, GeometryError, MAX_SUBDIVISION_LEVEL};
pub use quad::generate_quad;

use crate::gfx::rendering::vertex::Vertex3D;

/// Generated mesh data: positions, normals, and triangle indices.
///
/// Indices come in triples with consistent counter-clockwise outward
/// winding. `positions` and `normals` always have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices, counter-clockwise winding
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create an empty geometry buffer
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave positions and normals into the GPU vertex format
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        self.positions
            .iter()
            .zip(self.normals.iter())
            .map(|(&position, &normal)| Vertex3D { position, normal })
            .collect()
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
