use crate::mesh::{Topology, Vertex};

use super::{RenderCtx, RenderError};

/// Pipeline stage a shader source belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }
}

/// WGSL source pair for one program.
///
/// The vertex source must export `vs_main`, the fragment source `fs_main`.
#[derive(Debug, Copy, Clone)]
pub struct ShaderSources<'a> {
    pub label: &'a str,
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl ShaderSources<'static> {
    /// Built-in program: NDC passthrough, interpolated vertex color.
    pub fn vertex_color() -> Self {
        Self {
            label: "facet vertex color",
            vertex: include_str!("shaders/vertex_color.vert.wgsl"),
            fragment: include_str!("shaders/vertex_color.frag.wgsl"),
        }
    }
}

/// Compiled and linked shader program.
///
/// wgpu bakes the primitive mode into the pipeline, so one pipeline is linked
/// per mode: triangle lists (also used for fans, which are drawn indexed) and
/// triangle strips. Callers treat the whole thing as one opaque handle.
pub struct ShaderProgram {
    triangles: wgpu::RenderPipeline,
    strips: wgpu::RenderPipeline,
}

impl ShaderProgram {
    /// Compiles both stages, then links the pipelines for `ctx.surface_format`.
    ///
    /// Stage compilation and linking each run inside a validation error scope
    /// so failures come back as [`RenderError`] instead of reaching the
    /// device's uncaptured-error handler.
    pub fn compile(ctx: &RenderCtx<'_>, sources: &ShaderSources<'_>) -> Result<Self, RenderError> {
        let vertex = compile_stage(ctx.device, sources, ShaderStage::Vertex, sources.vertex)?;
        let fragment = compile_stage(ctx.device, sources, ShaderStage::Fragment, sources.fragment)?;

        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(sources.label),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let link = |topology: wgpu::PrimitiveTopology| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(sources.label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &vertex,
                    entry_point: Some(ShaderStage::Vertex.entry_point()),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &fragment,
                    entry_point: Some(ShaderStage::Fragment.entry_point()),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                // No depth test: layering is draw order only.
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        let triangles = link(wgpu::PrimitiveTopology::TriangleList);
        let strips = link(wgpu::PrimitiveTopology::TriangleStrip);

        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(RenderError::Link {
                message: err.to_string(),
            });
        }

        log::debug!("linked shader program '{}' for {:?}", sources.label, ctx.surface_format);

        Ok(Self {
            triangles,
            strips,
        })
    }

    /// Pipeline that rasterizes `topology`.
    #[inline]
    pub fn pipeline(&self, topology: Topology) -> &wgpu::RenderPipeline {
        match topology {
            Topology::Fan | Topology::TriangleList => &self.triangles,
            Topology::Strip => &self.strips,
        }
    }
}

fn compile_stage(
    device: &wgpu::Device,
    sources: &ShaderSources<'_>,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule, RenderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(sources.label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    match pollster::block_on(scope.pop()) {
        Some(err) => Err(RenderError::Compile {
            stage,
            message: err.to_string(),
        }),
        None => Ok(module),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sources_export_entry_points() {
        let s = ShaderSources::vertex_color();
        assert!(s.vertex.contains("fn vs_main"));
        assert!(s.fragment.contains("fn fs_main"));
    }

    #[test]
    fn builtin_vertex_stage_reads_both_attributes() {
        let s = ShaderSources::vertex_color();
        assert!(s.vertex.contains("@location(0) position: vec2<f32>"));
        assert!(s.vertex.contains("@location(1) color: vec3<f32>"));
    }

    #[test]
    fn stage_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
