//! Procedural 2D geometry generators.
//!
//! Every generator is a pure function from a parameter value to a [`Mesh`]:
//! no hidden state, no side effects, bit-identical output for identical input.
//!
//! Conventions:
//! - positions are in normalized device coordinates (+Y up)
//! - angles are radians, measured counter-clockwise from +X; a full turn is `TAU`
//! - closed outlines repeat their first rim sample as the last one
//!
//! Segment/point/side counts are expected to be positive (3 or more for a
//! visually sound shape). Smaller values are not rejected; the caller gets
//! the degenerate mesh it asked for.

mod circle;
mod polygon;
mod primitives;
mod ring;
mod square;
mod star;

pub use circle::{
    gradient_circle, gradient_red, solid_circle, CircleParams, GRADIENT_CENTER_COLOR,
};
pub use polygon::{hexagon, polygon, polygon_rim_color, PolygonParams, POLYGON_CENTER_COLOR};
pub use primitives::{quad, triangle, QuadParams};
pub use ring::{ring, RingParams, RING_INNER_COLOR, RING_OUTER_COLOR};
pub use square::{square_frame, SquareFrameParams};
pub use star::{star, StarParams, STAR_CENTER_COLOR, STAR_RIM_COLOR};

use std::f32::consts::TAU;

/// Angle of sample `i` out of `n` evenly spaced samples around a full turn,
/// offset by `start`.
///
/// Sample `n` wraps onto sample 0 exactly, so closing vertices are
/// bit-identical to the opening ones.
pub(crate) fn turn_angle(start: f32, i: u32, n: u32) -> f32 {
    let n = n.max(1);
    start + (i % n) as f32 * (TAU / n as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_angle_wraps_exactly() {
        assert_eq!(turn_angle(0.3, 0, 8), turn_angle(0.3, 8, 8));
        assert_eq!(turn_angle(0.0, 16, 8), 0.0);
    }

    #[test]
    fn turn_angle_steps_evenly() {
        let a1 = turn_angle(0.0, 1, 4);
        assert!((a1 - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn turn_angle_tolerates_zero_samples() {
        assert_eq!(turn_angle(1.0, 0, 0), 1.0);
        assert_eq!(turn_angle(1.0, 5, 0), 1.0);
    }
}
