use crate::coords::Vec2;
use crate::mesh::{Mesh, Topology, Vertex};
use crate::paint::Color;

/// Axis-aligned filled rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadParams {
    pub center: Vec2,
    /// Half width (`x`) and half height (`y`).
    pub half_extent: Vec2,
    pub color: Color,
}

impl QuadParams {
    #[inline]
    pub const fn new(center: Vec2, half_extent: Vec2, color: Color) -> Self {
        Self { center, half_extent, color }
    }
}

/// Builds a single-color rectangle as a 4-vertex strip (BL, BR, TL, TR).
pub fn quad(p: QuadParams) -> Mesh {
    let Vec2 { x: hx, y: hy } = p.half_extent;
    let c = p.center;
    let vertices = [
        Vec2::new(c.x - hx, c.y - hy),
        Vec2::new(c.x + hx, c.y - hy),
        Vec2::new(c.x - hx, c.y + hy),
        Vec2::new(c.x + hx, c.y + hy),
    ]
    .into_iter()
    .map(|pos| Vertex::new(pos, p.color))
    .collect();

    Mesh::new(Topology::Strip, vertices)
}

/// Builds one independent triangle; colors interpolate across its face.
pub fn triangle(vertices: [Vertex; 3]) -> Mesh {
    Mesh::new(Topology::TriangleList, vertices.to_vec())
}
