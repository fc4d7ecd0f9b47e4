use anyhow::{Context, Result};

use crate::core::{App, AppControl, FrameCtx};
use crate::mesh::Mesh;
use crate::paint::Color;
use crate::render::{RenderCtx, ShaderProgram, ShaderSources};

use super::Scene;

/// `core::App` that uploads a static scene once and redraws it every frame.
///
/// Per frame: clear to `clear`, bind the program, draw every scene entry in
/// order, present.
pub struct SceneDriver {
    pending: Vec<Mesh>,
    clear: Color,
    shaders: ShaderSources<'static>,
    loaded: Option<Loaded>,
}

struct Loaded {
    program: ShaderProgram,
    scene: Scene,
}

impl SceneDriver {
    /// Creates a driver for `meshes`, drawn in the given order over a black
    /// background with the built-in vertex-color program.
    pub fn new(meshes: Vec<Mesh>) -> Self {
        Self {
            pending: meshes,
            clear: Color::BLACK,
            shaders: ShaderSources::vertex_color(),
            loaded: None,
        }
    }

    pub fn with_clear(mut self, clear: Color) -> Self {
        self.clear = clear;
        self
    }

    /// Number of meshes in the scene (pending or uploaded).
    pub fn mesh_count(&self) -> usize {
        match &self.loaded {
            Some(l) => l.scene.len(),
            None => self.pending.len(),
        }
    }
}

impl App for SceneDriver {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let program = ShaderProgram::compile(ctx, &self.shaders)
            .with_context(|| format!("failed to build shader program '{}'", self.shaders.label))?;

        let scene = Scene::upload(ctx, std::mem::take(&mut self.pending))
            .context("failed to upload scene")?;

        self.loaded = Some(Loaded { program, scene });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(loaded) = self.loaded.as_ref() else {
            log::error!("frame requested before the scene was uploaded");
            return AppControl::Exit;
        };

        let mut drawn = Ok(());
        let control = ctx.render(self.clear, |_, target| {
            drawn = loaded.scene.draw(&loaded.program, target);
        });

        if let Err(e) = drawn {
            log::error!("scene draw failed: {e}");
            return AppControl::Exit;
        }

        if ctx.frame_index == 0 {
            log::debug!("first frame presented ({} meshes)", loaded.scene.len());
        }

        control
    }

    fn on_exit(&mut self) {
        if let Some(loaded) = self.loaded.take() {
            log::debug!("releasing {} scene buffers", loaded.scene.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::geometry::{quad, QuadParams};

    fn square() -> Mesh {
        quad(QuadParams::new(Vec2::zero(), Vec2::new(0.5, 0.5), Color::BLUE))
    }

    #[test]
    fn counts_pending_meshes_before_init() {
        let driver = SceneDriver::new(vec![square(), square()]).with_clear(Color::gray(0.05));
        assert_eq!(driver.mesh_count(), 2);
        assert_eq!(driver.clear, Color::gray(0.05));
        assert_eq!(driver.shaders.label, ShaderSources::vertex_color().label);
        assert!(driver.loaded.is_none());
    }

    #[test]
    fn defaults_to_black_clear() {
        assert_eq!(SceneDriver::new(Vec::new()).clear, Color::BLACK);
    }
}
