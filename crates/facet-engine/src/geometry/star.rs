use std::f32::consts::FRAC_PI_2;

use crate::coords::Vec2;
use crate::mesh::{Mesh, Topology, Vertex};
use crate::paint::Color;

use super::turn_angle;

/// Center tint of a star.
pub const STAR_CENTER_COLOR: Color = Color::rgb(1.0, 1.0, 0.0);
/// Tint of every rim vertex of a star.
pub const STAR_RIM_COLOR: Color = Color::rgb(1.0, 0.5, 0.0);

/// Star polygon parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StarParams {
    pub center: Vec2,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub points: u32,
}

impl StarParams {
    /// Five-point star.
    #[inline]
    pub const fn new(center: Vec2, outer_radius: f32, inner_radius: f32) -> Self {
        Self { center, outer_radius, inner_radius, points: 5 }
    }

    #[inline]
    pub const fn with_points(self, points: u32) -> Self {
        Self { points, ..self }
    }
}

/// Builds a star as a fan of `2 * points + 2` vertices.
///
/// Vertex 0 is the center. The rim starts pointing straight up and
/// alternates outer/inner radius every `PI / points`, outer tips on even rim
/// indices, closing on a repeat of the first tip.
pub fn star(p: StarParams) -> Mesh {
    let rim = 2 * p.points;
    let mut vertices = Vec::with_capacity(rim as usize + 2);

    vertices.push(Vertex::new(p.center, STAR_CENTER_COLOR));
    for i in 0..=rim {
        let a = turn_angle(FRAC_PI_2, i, rim);
        let r = if i % 2 == 0 { p.outer_radius } else { p.inner_radius };
        vertices.push(Vertex::new(p.center.on_circle(r, a), STAR_RIM_COLOR));
    }

    Mesh::new(Topology::Fan, vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn params() -> StarParams {
        StarParams::new(Vec2::new(-0.5, 0.5), 0.2, 0.08)
    }

    #[test]
    fn vertex_count_follows_points() {
        for points in 3..12 {
            let m = star(params().with_points(points));
            assert_eq!(m.vertex_count(), 2 * points + 2);
            assert_eq!(m.topology(), Topology::Fan);
        }
    }

    #[test]
    fn first_vertex_is_center() {
        let m = star(params());
        assert_eq!(m.vertices()[0].position(), Vec2::new(-0.5, 0.5));
        assert_eq!(m.vertices()[0].color(), STAR_CENTER_COLOR);
    }

    #[test]
    fn tips_on_even_rim_indices() {
        let p = params().with_points(7);
        let m = star(p);
        for (i, pos) in m.positions().skip(1).enumerate() {
            let r = (pos - p.center).length();
            let want = if i % 2 == 0 { p.outer_radius } else { p.inner_radius };
            assert!((r - want).abs() < EPS, "rim {i}: radius {r}, want {want}");
        }
    }

    #[test]
    fn first_tip_points_up_and_loop_closes() {
        let m = star(params());
        let rim = &m.vertices()[1..];
        let tip = rim[0].position();
        assert!((tip.x - -0.5).abs() < EPS);
        assert!((tip.y - 0.7).abs() < EPS);
        assert_eq!(rim[0], rim[rim.len() - 1]);
    }

    #[test]
    fn five_point_star_fits_its_circle() {
        // Yellow center, orange rim, inscribed in r = 0.2 around (-0.5, 0.5).
        let m = star(params());
        assert_eq!(m.vertex_count(), 12);
        assert!(m.validate().is_ok());
        assert!(m.colors().skip(1).all(|c| c == STAR_RIM_COLOR));
        assert!(m
            .positions()
            .all(|p| (p - Vec2::new(-0.5, 0.5)).length() <= 0.2 + EPS));
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(star(params()), star(params()));
    }
}
