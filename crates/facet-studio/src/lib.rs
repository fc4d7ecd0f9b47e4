//! Facet studio: the demo programs' scenes and their shared entry point.
//!
//! Each binary under `src/bin` opens one 500x500 window and redraws one of the
//! static scenes in [`scenes`] until the window is closed.

pub mod scenes;

use std::process::ExitCode;

use facet_engine::device::GpuInit;
use facet_engine::logging::{init_logging, LoggingConfig};
use facet_engine::mesh::Mesh;
use facet_engine::paint::Color;
use facet_engine::scene::SceneDriver;
use facet_engine::window::{Runtime, RuntimeConfig};

/// Runs `meshes` (in draw order) over `clear` in a window titled `title`.
///
/// Exit code 0 when the window is closed normally, 1 when any startup stage
/// (window, GPU, shader compile/link, mesh upload) fails; the failure is
/// printed to stderr with its full context chain.
pub fn launch(title: &str, clear: Color, meshes: Vec<Mesh>) -> ExitCode {
    init_logging(LoggingConfig::default());

    let driver = SceneDriver::new(meshes).with_clear(clear);
    log::info!("starting '{title}' with {} meshes", driver.mesh_count());

    match Runtime::run(RuntimeConfig::titled(title), GpuInit::default(), driver) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[!] {err:#}");
            ExitCode::FAILURE
        }
    }
}
