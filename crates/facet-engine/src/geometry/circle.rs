use crate::coords::Vec2;
use crate::mesh::{Mesh, Topology, Vertex};
use crate::paint::Color;

use super::turn_angle;

/// Center tint of an angular-gradient circle.
pub const GRADIENT_CENTER_COLOR: Color = Color::rgb(0.18, 0.0, 0.0);

/// Circle/ellipse fan parameters.
///
/// The x radius is `radius`; the y radius is `radius * y_scale`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleParams {
    pub center: Vec2,
    pub radius: f32,
    pub y_scale: f32,
    pub segments: u32,
}

impl CircleParams {
    #[inline]
    pub const fn circle(center: Vec2, radius: f32, segments: u32) -> Self {
        Self { center, radius, y_scale: 1.0, segments }
    }

    #[inline]
    pub const fn ellipse(center: Vec2, radius: f32, y_scale: f32, segments: u32) -> Self {
        Self { center, radius, y_scale, segments }
    }

    fn rim_point(&self, angle: f32) -> Vec2 {
        self.center.on_ellipse(self.radius, self.radius * self.y_scale, angle)
    }
}

/// Red channel of an angular-gradient rim vertex at `angle`.
///
/// `0.35 + 0.65 * 0.5 * (1 + cos(angle + phase))`, always in `[0.35, 1.0]`.
#[inline]
pub fn gradient_red(angle: f32, phase: f32) -> f32 {
    0.35 + 0.65 * (0.5 * (1.0 + (angle + phase).cos()))
}

/// Builds a circle/ellipse fan whose rim red channel follows the angle.
///
/// `segments + 2` vertices: a dark red center, then `segments + 1` rim
/// samples with green and blue at zero. `phase` rotates the bright spot.
pub fn gradient_circle(p: CircleParams, phase: f32) -> Mesh {
    fan(p, GRADIENT_CENTER_COLOR, |a| Color::rgb(gradient_red(a, phase), 0.0, 0.0))
}

/// Builds a single-color circle/ellipse fan with the same layout as
/// [`gradient_circle`].
pub fn solid_circle(p: CircleParams, color: Color) -> Mesh {
    fan(p, color, |_| color)
}

fn fan(p: CircleParams, center_color: Color, rim_color: impl Fn(f32) -> Color) -> Mesh {
    let mut vertices = Vec::with_capacity(p.segments as usize + 2);

    vertices.push(Vertex::new(p.center, center_color));
    for i in 0..=p.segments {
        let a = turn_angle(0.0, i, p.segments);
        vertices.push(Vertex::new(p.rim_point(a), rim_color(a)));
    }

    Mesh::new(Topology::Fan, vertices)
}
