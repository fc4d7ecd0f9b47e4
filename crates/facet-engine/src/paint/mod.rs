//! Color model shared between generators and renderers.
//!
//! Vertex colors are opaque RGB. They are written to the framebuffer exactly
//! as generated: nothing in the pipeline clamps or converts them.

pub mod color;

pub use color::Color;
