use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::coords::Vec2;
use crate::mesh::{Mesh, Topology, Vertex};
use crate::paint::Color;

/// Axis-aligned square described by its circumscribed circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SquareFrameParams {
    pub center: Vec2,
    /// Distance from the center to each corner.
    pub radius: f32,
    /// Gray level shared by every vertex.
    pub gray: f32,
}

impl SquareFrameParams {
    #[inline]
    pub const fn new(center: Vec2, radius: f32, gray: f32) -> Self {
        Self { center, radius, gray }
    }
}

/// Builds a filled square as a 4-vertex strip.
///
/// Corners are sampled at 45°, 135°, 225°, 315° (TR, TL, BL, BR) and emitted
/// as BL, BR, TL, TR so the two strip triangles cover the square without
/// crossing. Stacking squares of decreasing radius in alternating grays draws
/// concentric frames; later squares paint over earlier ones.
pub fn square_frame(p: SquareFrameParams) -> Mesh {
    let corner = |k: u32| p.center.on_circle(p.radius, FRAC_PI_4 + k as f32 * FRAC_PI_2);
    let [tr, tl, bl, br] = [corner(0), corner(1), corner(2), corner(3)];

    let color = Color::gray(p.gray);
    let vertices = [bl, br, tl, tr]
        .into_iter()
        .map(|pos| Vertex::new(pos, color))
        .collect();

    Mesh::new(Topology::Strip, vertices)
}
