//! Render pipeline adapter.
//!
//! Maps meshes to GPU vertex buffers and issues one draw call per mesh.
//! All GPU state is passed explicitly: uploads take a [`RenderCtx`], draws
//! take the render pass and the [`ShaderProgram`] to bind.
//!
//! Convention:
//! - vertex positions are already in NDC; shaders apply no transform
//! - attribute 0 is the position, attribute 1 the RGB color (stride 20)

mod buffer;
mod ctx;
mod error;
mod program;

pub use buffer::{fan_indices, upload, DrawCall, MeshBuffer};
pub use ctx::{RenderCtx, RenderTarget};
pub use error::RenderError;
pub use program::{ShaderProgram, ShaderSources, ShaderStage};
