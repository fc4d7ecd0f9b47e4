use std::process::ExitCode;

use facet_studio::{launch, scenes};

fn main() -> ExitCode {
    launch("Target Scene", scenes::TARGET_SCENE_CLEAR, scenes::target_scene())
}
