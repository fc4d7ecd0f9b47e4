//! The static scenes drawn by the studio binaries.
//!
//! Each function returns meshes in draw order; later meshes paint over
//! earlier ones.

use facet_engine::coords::Vec2;
use facet_engine::geometry::{
    gradient_circle, hexagon, quad, ring, solid_circle, square_frame, star, triangle,
    CircleParams, QuadParams, RingParams, SquareFrameParams, StarParams,
};
use facet_engine::mesh::{Mesh, Vertex};
use facet_engine::paint::Color;

pub const BLUE_SQUARE_CLEAR: Color = Color::gray(0.05);
pub const SHAPE_CLUSTER_CLEAR: Color = Color::BLACK;
pub const TARGET_SCENE_CLEAR: Color = Color::BLACK;

/// Segment count for the target scene's circle and ellipse.
const ROUND_SEGMENTS: u32 = 96;
const RING_SEGMENTS: u32 = 64;
const GRADIENT_PHASE: f32 = 1.2;

const TARGET_CENTER: Vec2 = Vec2::new(0.0, -0.35);
/// (radius, gray) for each target frame, outermost first.
const TARGET_FRAMES: [(f32, f32); 6] = [
    (0.57, 1.0),
    (0.47, 0.0),
    (0.36, 1.0),
    (0.26, 0.0),
    (0.165, 1.0),
    (0.095, 0.0),
];

/// A single blue square centered on the origin, half extent 0.5.
pub fn blue_square() -> Vec<Mesh> {
    vec![quad(QuadParams::new(
        Vec2::zero(),
        Vec2::new(0.5, 0.5),
        Color::BLUE,
    ))]
}

/// Star (top left), ring (top right) and hexagon (bottom center).
pub fn shape_cluster() -> Vec<Mesh> {
    vec![
        star(StarParams::new(Vec2::new(-0.5, 0.5), 0.2, 0.08)),
        ring(RingParams::new(Vec2::new(0.5, 0.5), 0.2, 0.14, RING_SEGMENTS)),
        hexagon(Vec2::new(0.0, -0.3), 0.3),
    ]
}

/// Red ellipse, gradient circle, RGB triangle, then six nested square frames.
pub fn target_scene() -> Vec<Mesh> {
    let mut meshes = vec![
        solid_circle(
            CircleParams::ellipse(Vec2::new(-0.55, 0.6), 0.17, 0.6, ROUND_SEGMENTS),
            Color::RED,
        ),
        gradient_circle(
            CircleParams::circle(Vec2::new(0.55, 0.6), 0.17, ROUND_SEGMENTS),
            GRADIENT_PHASE,
        ),
        triangle([
            Vertex::new(Vec2::new(0.0, 0.65), Color::RED),
            Vertex::new(Vec2::new(-0.25, 0.25), Color::GREEN),
            Vertex::new(Vec2::new(0.25, 0.25), Color::BLUE),
        ]),
    ];

    meshes.extend(
        TARGET_FRAMES
            .iter()
            .map(|&(radius, gray)| square_frame(SquareFrameParams::new(TARGET_CENTER, radius, gray))),
    );
    meshes
}
