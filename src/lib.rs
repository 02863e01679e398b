//! Conway's Game of Life on a fixed-size console grid
//!
//! This library provides the grid, the generation-advance rule, text
//! rendering, and the terminal animation loop used by the CLI.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod runner;
pub mod utils;

pub use config::Settings;
pub use error::GridError;
pub use game_of_life::{Alphabet, Grid, Simulator};
pub use runner::{RunSummary, Session};

use anyhow::Result;
use runner::FixedInterval;

/// Run the animation on stdout until the loop stops
pub fn run(settings: Settings) -> Result<RunSummary> {
    let mut pacer = FixedInterval::from_millis(settings.runner.interval_ms);
    let session = Session::new(settings)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    session.run(&mut out, &mut pacer)
}
