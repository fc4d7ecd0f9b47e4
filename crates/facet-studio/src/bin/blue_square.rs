use std::process::ExitCode;

use facet_studio::{launch, scenes};

fn main() -> ExitCode {
    launch("Blue Square", scenes::BLUE_SQUARE_CLEAR, scenes::blue_square())
}
