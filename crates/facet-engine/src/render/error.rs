use std::fmt;

use thiserror::Error;

use crate::mesh::{MeshError, Topology};

use super::ShaderStage;

/// Failures of the render adapter.
///
/// Everything here is raised before a draw call is issued; nothing is
/// recoverable at this layer and callers are expected to stop.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A shader stage failed to compile.
    #[error("{stage} shader failed to compile: {message}")]
    Compile { stage: ShaderStage, message: String },

    /// The compiled stages could not be linked into a pipeline.
    #[error("shader program failed to link: {message}")]
    Link { message: String },

    /// The mesh does not satisfy its own invariants.
    #[error("mesh upload rejected: {0}")]
    Upload(#[from] MeshError),

    /// More vertices requested than were uploaded.
    #[error("draw of {requested} vertices exceeds buffer capacity of {capacity}")]
    DrawOutOfRange { requested: u32, capacity: u32 },

    /// Draw topology differs from the one the buffer was uploaded for.
    #[error("draw as {requested:?} but buffer was uploaded as {uploaded:?}")]
    TopologyMismatch { requested: Topology, uploaded: Topology },

    /// Draw count too small (or misaligned) for its topology.
    #[error("draw rejected: {0}")]
    DrawTooSmall(MeshError),
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}
