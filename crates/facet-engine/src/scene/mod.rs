//! Scene driver.
//!
//! Responsibilities:
//! - upload a fixed, ordered list of meshes once at startup
//! - draw every entry each frame in exactly that order
//!
//! There is no depth test anywhere: an entry drawn later paints over the ones
//! before it, so the list order is the layering.

mod driver;
mod list;

pub use driver::SceneDriver;
pub use list::Scene;
