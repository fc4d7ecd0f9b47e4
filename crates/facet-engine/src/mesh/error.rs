use thiserror::Error;

use super::Topology;

/// A mesh that cannot be uploaded as declared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Declared draw count differs from the vertex list length.
    #[error("declared vertex count {declared} does not match {actual} vertices")]
    CountMismatch { declared: u32, actual: usize },

    /// Too few vertices to form a triangle with the topology.
    #[error("{topology:?} mesh needs at least {min} vertices, got {count}")]
    TooFewVertices { topology: Topology, count: u32, min: u32 },

    /// Triangle list whose count is not a multiple of 3.
    #[error("triangle list vertex count {count} is not a multiple of 3")]
    NotTriangleMultiple { count: u32 },
}
