#![forbid(unsafe_code)]

use std::process::ExitCode;

use term_life::scenario::Scenario;

const SCENARIO: Scenario = Scenario::Line;

fn main() -> ExitCode {
    term_life::run(SCENARIO)
}
