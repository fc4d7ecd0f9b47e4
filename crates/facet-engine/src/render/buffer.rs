use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::mesh::{Mesh, Topology};

use super::{RenderCtx, RenderError, ShaderProgram};

/// GPU-resident copy of one mesh.
///
/// Owns the vertex buffer (and, for fans, the index buffer that expands the
/// fan into a triangle list). Dropping it releases the GPU memory.
pub struct MeshBuffer {
    vertices: wgpu::Buffer,
    fan_indices: Option<wgpu::Buffer>,
    topology: Topology,
    capacity: u32,
}

/// Uploads `mesh` into a new vertex buffer.
///
/// The buffer is exactly `vertex_count * 20` bytes; vertex data is copied
/// verbatim in native float layout. Rejects meshes that fail
/// [`Mesh::validate`].
pub fn upload(ctx: &RenderCtx<'_>, mesh: &Mesh) -> Result<MeshBuffer, RenderError> {
    mesh.validate()?;

    let vertices = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("facet mesh vbo"),
        contents: mesh.as_bytes(),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let fan_indices = (mesh.topology() == Topology::Fan).then(|| {
        let indices = fan_indices(mesh.vertex_count());
        ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("facet fan ibo"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        })
    });

    log::debug!(
        "uploaded {:?} mesh: {} vertices ({} bytes)",
        mesh.topology(),
        mesh.vertex_count(),
        mesh.as_bytes().len()
    );

    Ok(MeshBuffer {
        vertices,
        fan_indices,
        topology: mesh.topology(),
        capacity: mesh.vertex_count(),
    })
}

/// Triangle-list indices equivalent to a fan of `vertex_count` vertices:
/// `(0, i, i + 1)` for every consecutive rim pair.
pub fn fan_indices(vertex_count: u32) -> Vec<u32> {
    (1..vertex_count.saturating_sub(1))
        .flat_map(|i| [0, i, i + 1])
        .collect()
}

/// A validated draw: which range to issue and whether it goes through the
/// fan index buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub indexed: bool,
    pub range: Range<u32>,
}

impl DrawCall {
    /// Checks a draw request against what was uploaded.
    ///
    /// - `topology` must equal the uploaded topology
    /// - `vertex_count` must fit in the uploaded capacity
    /// - `vertex_count` must form at least one triangle
    pub fn resolve(
        uploaded: Topology,
        capacity: u32,
        topology: Topology,
        vertex_count: u32,
    ) -> Result<Self, RenderError> {
        if topology != uploaded {
            return Err(RenderError::TopologyMismatch {
                requested: topology,
                uploaded,
            });
        }
        if vertex_count > capacity {
            return Err(RenderError::DrawOutOfRange {
                requested: vertex_count,
                capacity,
            });
        }
        topology.check_count(vertex_count).map_err(RenderError::DrawTooSmall)?;

        Ok(match topology {
            Topology::Fan => DrawCall {
                indexed: true,
                range: 0..3 * (vertex_count - 2),
            },
            Topology::Strip | Topology::TriangleList => DrawCall {
                indexed: false,
                range: 0..vertex_count,
            },
        })
    }
}

impl MeshBuffer {
    /// Topology the mesh was uploaded with.
    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of vertices stored in the buffer.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Issues exactly one draw call for the first `vertex_count` vertices.
    ///
    /// Binds the program's pipeline for `topology` and this mesh's buffers
    /// first; nothing is assumed to still be bound from a previous draw.
    /// The request is validated before anything is recorded.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        program: &ShaderProgram,
        topology: Topology,
        vertex_count: u32,
    ) -> Result<(), RenderError> {
        let call = DrawCall::resolve(self.topology, self.capacity, topology, vertex_count)?;

        pass.set_pipeline(program.pipeline(topology));
        pass.set_vertex_buffer(0, self.vertices.slice(..));

        match (&self.fan_indices, call.indexed) {
            (Some(ibo), true) => {
                pass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(call.range, 0, 0..1);
            }
            _ => pass.draw(call.range, 0..1),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fan_indices ───────────────────────────────────────────────────────

    #[test]
    fn fan_indices_share_the_center() {
        assert_eq!(fan_indices(5), vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn fan_indices_cover_every_triangle() {
        for n in 3..40 {
            let idx = fan_indices(n);
            assert_eq!(idx.len() as u32, 3 * Topology::Fan.triangle_count(n));
            assert!(idx.iter().all(|&i| i < n));
        }
    }

    #[test]
    fn fan_indices_degenerate_counts() {
        assert!(fan_indices(0).is_empty());
        assert!(fan_indices(2).is_empty());
    }

    // ── DrawCall::resolve ─────────────────────────────────────────────────

    #[test]
    fn strip_draws_vertices_directly() {
        let call = DrawCall::resolve(Topology::Strip, 4, Topology::Strip, 4).unwrap();
        assert_eq!(call, DrawCall { indexed: false, range: 0..4 });
    }

    #[test]
    fn fan_draws_through_indices() {
        let call = DrawCall::resolve(Topology::Fan, 12, Topology::Fan, 12).unwrap();
        assert_eq!(call, DrawCall { indexed: true, range: 0..30 });
    }

    #[test]
    fn partial_fan_draws_prefix_triangles() {
        let call = DrawCall::resolve(Topology::Fan, 12, Topology::Fan, 5).unwrap();
        assert_eq!(call.range, 0..9);
    }

    #[test]
    fn triangle_list_draws_vertices_directly() {
        let call = DrawCall::resolve(Topology::TriangleList, 3, Topology::TriangleList, 3).unwrap();
        assert_eq!(call, DrawCall { indexed: false, range: 0..3 });
    }

    #[test]
    fn rejects_count_over_capacity() {
        let err = DrawCall::resolve(Topology::Strip, 4, Topology::Strip, 5).unwrap_err();
        assert!(matches!(err, RenderError::DrawOutOfRange { requested: 5, capacity: 4 }));
    }

    #[test]
    fn rejects_topology_mismatch() {
        let err = DrawCall::resolve(Topology::Strip, 4, Topology::Fan, 4).unwrap_err();
        assert!(matches!(
            err,
            RenderError::TopologyMismatch { requested: Topology::Fan, uploaded: Topology::Strip }
        ));
    }

    #[test]
    fn rejects_too_small_draw() {
        let err = DrawCall::resolve(Topology::Fan, 12, Topology::Fan, 2).unwrap_err();
        assert!(matches!(err, RenderError::DrawTooSmall(_)));
    }
}
