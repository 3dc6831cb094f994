pub mod life;
pub mod render;
pub mod scenario;

use std::io;
use std::process::ExitCode;

use error_iter::ErrorIter as _;
use log::{error, info};

use crate::render::{Renderer, SystemClock};
use crate::scenario::Scenario;

/// Build `scenario` and animate it on stdout until writing fails.
pub fn run(scenario: Scenario) -> ExitCode {
    env_logger::init();

    let grid = match scenario.build() {
        Ok(grid) => grid,
        Err(err) => {
            log_error("Scenario::build", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "starting {} on a {}x{} grid with {} live cells",
        scenario.name(),
        grid.width(),
        grid.height(),
        grid.population(),
    );

    let mut renderer = Renderer::new(grid, io::stdout().lock(), SystemClock);
    match renderer.run() {
        Ok(never) => match never {},
        Err(err) => {
            log_error("Renderer::run", err);
            ExitCode::FAILURE
        }
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
