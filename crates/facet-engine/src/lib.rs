//! Facet engine crate.
//!
//! Procedural 2D geometry, the mesh model it produces, and the wgpu pipeline
//! that uploads meshes once and draws them every frame in a fixed order.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod mesh;
pub mod geometry;
pub mod render;
pub mod scene;
