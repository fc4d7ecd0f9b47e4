use crate::coords::Vec2;
use crate::mesh::{Mesh, Topology, Vertex};
use crate::paint::Color;

use super::turn_angle;

/// Tint of the outer rim of a ring.
pub const RING_OUTER_COLOR: Color = Color::rgb(0.0, 1.0, 1.0);
/// Tint of the inner rim of a ring.
pub const RING_INNER_COLOR: Color = Color::rgb(0.0, 0.2, 0.5);

/// Annulus parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingParams {
    pub center: Vec2,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub segments: u32,
}

impl RingParams {
    #[inline]
    pub const fn new(center: Vec2, outer_radius: f32, inner_radius: f32, segments: u32) -> Self {
        Self { center, outer_radius, inner_radius, segments }
    }
}

/// Builds a closed annulus as a strip of `2 * (segments + 1)` vertices.
///
/// Each angular sample emits the outer vertex, then the inner vertex at the
/// same angle. The last sample lands on the first one.
pub fn ring(p: RingParams) -> Mesh {
    let mut vertices = Vec::with_capacity(2 * (p.segments as usize + 1));

    for i in 0..=p.segments {
        let a = turn_angle(0.0, i, p.segments);
        vertices.push(Vertex::new(p.center.on_circle(p.outer_radius, a), RING_OUTER_COLOR));
        vertices.push(Vertex::new(p.center.on_circle(p.inner_radius, a), RING_INNER_COLOR));
    }

    Mesh::new(Topology::Strip, vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn params(segments: u32) -> RingParams {
        RingParams::new(Vec2::new(0.5, 0.5), 0.2, 0.14, segments)
    }

    #[test]
    fn vertex_count_follows_segments() {
        for segments in [3, 4, 17, 64] {
            let m = ring(params(segments));
            assert_eq!(m.vertex_count(), 2 * (segments + 1));
            assert_eq!(m.topology(), Topology::Strip);
        }
    }

    #[test]
    fn alternates_outer_and_inner() {
        let p = params(64);
        let m = ring(p);
        for (i, v) in m.vertices().iter().enumerate() {
            let r = (v.position() - p.center).length();
            let (want_r, want_c) = if i % 2 == 0 {
                (p.outer_radius, RING_OUTER_COLOR)
            } else {
                (p.inner_radius, RING_INNER_COLOR)
            };
            assert!((r - want_r).abs() < EPS, "vertex {i}: radius {r}");
            assert_eq!(v.color(), want_c);
        }
    }

    #[test]
    fn pairs_share_an_angle() {
        let p = params(12);
        let m = ring(p);
        for (i, pair) in m.vertices().chunks(2).enumerate() {
            let d0 = pair[0].position() - p.center;
            let d1 = pair[1].position() - p.center;
            // Collinear and same-facing. Comparing atan2 values fails on the
            // negative x axis, where a rounded-off y flips -π and π.
            let cross = (d0.x * d1.y - d0.y * d1.x) / (d0.length() * d1.length());
            let dot = d0.x * d1.x + d0.y * d1.y;
            assert!(cross.abs() < EPS, "pair {i}: {d0:?} vs {d1:?}");
            assert!(dot > 0.0, "pair {i}: {d0:?} vs {d1:?}");
        }
    }

    #[test]
    fn pair_on_negative_x_axis_shares_direction() {
        // Sample 6 of 12 lands at π, where the outer y rounds below zero.
        let p = params(12);
        let m = ring(p);
        let outer = m.vertices()[12].position() - p.center;
        let inner = m.vertices()[13].position() - p.center;
        assert!(outer.x < 0.0 && inner.x < 0.0);
        assert!((outer.y / outer.length() - inner.y / inner.length()).abs() < EPS);
    }

    #[test]
    fn zero_segments_collapse_to_one_finite_pair() {
        let p = params(0);
        let m = ring(p);
        assert_eq!(m.vertex_count(), 2);
        assert!(m.positions().all(|v| v.x.is_finite() && v.y.is_finite()));
        assert_eq!(m.vertices()[0].position(), p.center.on_circle(p.outer_radius, 0.0));
        assert!(matches!(
            m.validate(),
            Err(crate::mesh::MeshError::TooFewVertices { count: 2, .. })
        ));
    }

    #[test]
    fn loop_closes_on_first_sample() {
        let segments = 64;
        let p = params(segments);
        let m = ring(p);
        let first = m.vertices()[0].position() - p.center;
        let last = m.vertices()[2 * segments as usize].position() - p.center;
        assert_eq!(first.angle(), last.angle());
        assert_eq!(m.vertices()[1], m.vertices()[2 * segments as usize + 1]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(ring(params(64)), ring(params(64)));
    }
}
