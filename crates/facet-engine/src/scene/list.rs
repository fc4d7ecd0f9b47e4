use crate::mesh::{Mesh, Topology};
use crate::render::{
    upload, DrawCall, MeshBuffer, RenderCtx, RenderError, RenderTarget, ShaderProgram,
};

/// One uploaded mesh and the draw call it is replayed with.
struct SceneEntry {
    buffer: MeshBuffer,
    topology: Topology,
    vertex_count: u32,
}

/// Ordered, immutable set of uploaded meshes.
///
/// Built once by [`Scene::upload`]; entries are never added, removed, or
/// reordered afterwards.
pub struct Scene {
    entries: Vec<SceneEntry>,
}

impl Scene {
    /// Uploads `meshes` in iteration order.
    ///
    /// Every draw is checked against its buffer here, so a scene that uploads
    /// successfully cannot fail to draw later.
    pub fn upload<I>(ctx: &RenderCtx<'_>, meshes: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = Mesh>,
    {
        let mut entries = Vec::new();

        for (index, mesh) in meshes.into_iter().enumerate() {
            let buffer = upload(ctx, &mesh).inspect_err(|e| {
                log::error!("scene mesh #{index} rejected: {e}");
            })?;
            DrawCall::resolve(
                buffer.topology(),
                buffer.capacity(),
                mesh.topology(),
                mesh.vertex_count(),
            )?;

            entries.push(SceneEntry {
                topology: mesh.topology(),
                vertex_count: mesh.vertex_count(),
                buffer,
            });
        }

        log::info!("scene uploaded: {} meshes", entries.len());
        Ok(Self { entries })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records one pass that draws every entry in list order.
    ///
    /// The pass loads the existing color contents; clearing is the caller's job.
    pub fn draw(
        &self,
        program: &ShaderProgram,
        target: &mut RenderTarget<'_>,
    ) -> Result<(), RenderError> {
        if self.entries.is_empty() {
            return Ok(());
        }

        let mut rpass = target.begin_load_pass("facet scene pass");
        for entry in &self.entries {
            entry
                .buffer
                .draw(&mut rpass, program, entry.topology, entry.vertex_count)?;
        }

        Ok(())
    }
}
