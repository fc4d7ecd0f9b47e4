//! Coordinate types shared by the geometry generators and renderers.
//!
//! Canonical CPU space is normalized device coordinates:
//! - origin at the center of the framebuffer
//! - +X right, +Y up
//! - the visible area spans `[-1, 1]` on both axes
//!
//! No transform is applied between generator output and the rasterizer.

mod vec2;

pub use vec2::Vec2;
