//! Vertex/mesh model shared by generators and the render adapter.
//!
//! A `Mesh` is an ordered vertex list plus the primitive topology it is meant
//! to be drawn with. Generators produce meshes; `render::upload` consumes them.

mod error;
mod topology;
mod vertex;

pub use error::MeshError;
pub use topology::Topology;
pub use vertex::Vertex;

use crate::coords::Vec2;
use crate::paint::Color;

/// Vertex list + topology + declared draw count.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    topology: Topology,
    vertex_count: u32,
}

impl Mesh {
    /// Creates a mesh whose draw count is the number of vertices.
    pub fn new(topology: Topology, vertices: Vec<Vertex>) -> Self {
        let vertex_count = vertices.len() as u32;
        Self { vertices, topology, vertex_count }
    }

    /// Creates a mesh with an explicitly declared draw count.
    ///
    /// The declaration is checked against the vertex list by [`validate`](Self::validate).
    pub fn with_vertex_count(topology: Topology, vertices: Vec<Vertex>, vertex_count: u32) -> Self {
        Self { vertices, topology, vertex_count }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks the upload invariants:
    /// - declared count equals the vertex list length
    /// - the count satisfies the topology minimum (and multiple-of-3 for lists)
    pub fn validate(&self) -> Result<(), MeshError> {
        let len = self.vertices.len();
        if self.vertex_count as usize != len {
            return Err(MeshError::CountMismatch {
                declared: self.vertex_count,
                actual: len,
            });
        }
        self.topology.check_count(self.vertex_count)
    }

    /// Returns the vertex data as the raw bytes uploaded to the GPU.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Positions of all vertices, in order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.vertices.iter().map(|v| v.position())
    }

    /// Colors of all vertices, in order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.vertices.iter().map(|v| v.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new(Vec2::new(x, y), Color::WHITE)
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn strip_quad_is_valid() {
        let m = Mesh::new(Topology::Strip, vec![v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)]);
        assert_eq!(m.vertex_count(), 4);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn declared_count_must_match_len() {
        let m = Mesh::with_vertex_count(Topology::Fan, vec![v(0.0, 0.0); 4], 5);
        assert_eq!(
            m.validate(),
            Err(MeshError::CountMismatch { declared: 5, actual: 4 })
        );
    }

    #[test]
    fn fan_needs_three_vertices() {
        let m = Mesh::new(Topology::Fan, vec![v(0.0, 0.0), v(1.0, 0.0)]);
        assert!(matches!(m.validate(), Err(MeshError::TooFewVertices { .. })));
    }

    #[test]
    fn triangle_list_needs_multiple_of_three() {
        let m = Mesh::new(Topology::TriangleList, vec![v(0.0, 0.0); 4]);
        assert!(matches!(m.validate(), Err(MeshError::NotTriangleMultiple { count: 4 })));
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let m = Mesh::new(Topology::Strip, Vec::new());
        assert!(m.is_empty());
        assert!(m.validate().is_err());
    }

    // ── bytes ─────────────────────────────────────────────────────────────

    #[test]
    fn bytes_are_twenty_per_vertex() {
        let m = Mesh::new(Topology::TriangleList, vec![v(0.0, 0.0); 3]);
        assert_eq!(m.as_bytes().len(), 60);
    }
}
