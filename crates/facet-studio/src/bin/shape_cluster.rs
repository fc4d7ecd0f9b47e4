use std::process::ExitCode;

use facet_studio::{launch, scenes};

fn main() -> ExitCode {
    launch("Star, Ring, Hexagon", scenes::SHAPE_CLUSTER_CLEAR, scenes::shape_cluster())
}
