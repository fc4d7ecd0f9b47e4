use std::f32::consts::PI;

use crate::coords::Vec2;
use crate::mesh::{Mesh, Topology, Vertex};
use crate::paint::Color;

use super::turn_angle;

/// Center tint of a regular polygon.
pub const POLYGON_CENTER_COLOR: Color = Color::rgb(0.8, 0.0, 0.8);

/// Regular polygon parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolygonParams {
    pub center: Vec2,
    pub radius: f32,
    pub sides: u32,
}

impl PolygonParams {
    /// Hexagon (six sides).
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius, sides: 6 }
    }

    #[inline]
    pub const fn with_sides(self, sides: u32) -> Self {
        Self { sides, ..self }
    }
}

/// Rim color of vertex `index` on a polygon with `sides` sides.
///
/// Depends on the index only, never on position. On a hexagon this is
/// `(0.3 + 0.1i, 0.1i, 1.0 - 0.1i)`; other side counts stretch the same ramp
/// so the closing vertex always ends on `(0.9, 0.6, 0.4)`.
pub fn polygon_rim_color(index: u32, sides: u32) -> Color {
    let t = index as f32 * (6.0 / sides.max(1) as f32);
    Color::rgb(0.3 + 0.1 * t, 0.1 * t, 1.0 - 0.1 * t)
}

/// Builds a regular polygon as a fan of `sides + 2` vertices.
///
/// The rim starts half a step past +X (30° for a hexagon) and repeats its
/// first corner to close the outline.
pub fn polygon(p: PolygonParams) -> Mesh {
    let start = PI / p.sides.max(1) as f32;
    let mut vertices = Vec::with_capacity(p.sides as usize + 2);

    vertices.push(Vertex::new(p.center, POLYGON_CENTER_COLOR));
    for i in 0..=p.sides {
        let a = turn_angle(start, i, p.sides);
        vertices.push(Vertex::new(
            p.center.on_circle(p.radius, a),
            polygon_rim_color(i, p.sides),
        ));
    }

    Mesh::new(Topology::Fan, vertices)
}

/// Regular hexagon centered at `center`.
#[inline]
pub fn hexagon(center: Vec2, radius: f32) -> Mesh {
    polygon(PolygonParams::new(center, radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn hexagon_has_eight_vertices() {
        let m = hexagon(Vec2::new(0.0, -0.3), 0.3);
        assert_eq!(m.vertex_count(), 8);
        assert_eq!(m.topology(), Topology::Fan);
        assert_eq!(m.vertices()[0].color(), POLYGON_CENTER_COLOR);
    }

    #[test]
    fn hexagon_corners_start_at_thirty_degrees() {
        let c = Vec2::new(0.0, -0.3);
        let m = hexagon(c, 0.3);
        for (i, pos) in m.positions().skip(1).take(6).enumerate() {
            let want = (30.0 + 60.0 * i as f32).to_radians();
            let d = pos - c;
            assert!((d.length() - 0.3).abs() < EPS);
            let got = d.angle().rem_euclid(std::f32::consts::TAU);
            assert!((got - want).abs() < 1e-4, "corner {i}: {got} vs {want}");
        }
        assert_eq!(m.vertices()[1].position(), m.vertices()[7].position());
    }

    #[test]
    fn hexagon_gradient_is_linear_in_index() {
        let m = hexagon(Vec2::zero(), 0.3);
        for (i, c) in m.colors().skip(1).enumerate() {
            let i = i as f32;
            assert!((c.r - (0.3 + 0.1 * i)).abs() < EPS);
            assert!((c.g - 0.1 * i).abs() < EPS);
            assert!((c.b - (1.0 - 0.1 * i)).abs() < EPS);
        }
    }

    #[test]
    fn gradient_ignores_center_and_radius() {
        let a = hexagon(Vec2::new(0.7, -0.2), 0.1);
        let b = hexagon(Vec2::new(-0.4, 0.9), 0.9);
        assert!(a.colors().eq(b.colors()));
    }

    #[test]
    fn rim_colors_stay_normalized_for_many_sides() {
        let m = polygon(PolygonParams::new(Vec2::zero(), 0.5).with_sides(24));
        assert_eq!(m.vertex_count(), 26);
        assert!(m.colors().all(|c| c.is_normalized()));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let p = PolygonParams::new(Vec2::new(0.1, 0.2), 0.3).with_sides(9);
        assert_eq!(polygon(p), polygon(p));
    }
}
