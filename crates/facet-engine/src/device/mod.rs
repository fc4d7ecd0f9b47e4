//! wgpu device and window surface.
//!
//! [`Gpu`] is built once per window and keeps the surface sized to the
//! framebuffer; each frame is acquired as a [`GpuFrame`] and handed back
//! for submission.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
