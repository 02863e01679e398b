//! A simulation session: a seeded board plus the render/wait/advance loop

use super::pacer::Pacer;
use super::seed::{clock_seed, seeded_rng};
use crate::config::Settings;
use crate::error::GridError;
use crate::game_of_life::{populate, Alphabet, Grid, Simulator};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The pacer reported a failed wait
    WaitFailed,
    GenerationLimit,
    /// Board repeated itself with period 1 or 2
    Stable,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::WaitFailed => "wait interrupted",
            StopReason::GenerationLimit => "generation limit reached",
            StopReason::Stable => "board is stable",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub generations: u64,
    pub final_living: usize,
    pub stop: StopReason,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Summary:")?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Generations: {}", self.generations)?;
        writeln!(f, "  Living cells: {}", self.final_living)?;
        write!(f, "  Stopped: {}", self.stop)
    }
}

/// One rendered generation, as emitted by the `step` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub generation: u64,
    pub rows: u16,
    pub cols: u16,
    pub living: usize,
    pub rows_text: Vec<String>,
}

impl Frame {
    pub fn capture(generation: u64, grid: &Grid, alphabet: &Alphabet) -> Result<Self, GridError> {
        let text = grid.render(alphabet)?;
        let rows_text = if grid.rows() == 0 {
            Vec::new()
        } else {
            text.split('\n').map(str::to_owned).collect()
        };

        Ok(Self {
            generation,
            rows: grid.rows(),
            cols: grid.cols(),
            living: grid.living_count(),
            rows_text,
        })
    }
}

pub struct Session {
    grid: Grid,
    settings: Settings,
    seed: u64,
    generation: u64,
}

impl Session {
    /// Create and populate the board described by `settings`.
    ///
    /// The RNG is seeded once here, from `seed.value` or the system clock.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("Configuration validation failed")?;

        let seed = settings.seed.value.unwrap_or_else(clock_seed);
        let mut grid = Grid::new(settings.grid.rows, settings.grid.cols)
            .context("Failed to create grid")?;
        let mut rng = seeded_rng(seed);
        populate(&mut grid, settings.seed.pattern, &mut rng)
            .context("Failed to populate grid")?;

        Ok(Self {
            grid,
            settings,
            seed,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Render the current board with the configured alphabet
    pub fn render(&self) -> Result<String> {
        self.grid
            .render(&self.settings.render.alphabet)
            .with_context(|| format!("Failed to render generation {}", self.generation))
    }

    /// Advance one generation
    pub fn step(&mut self) -> Result<()> {
        Simulator::advance(&mut self.grid)
            .with_context(|| format!("Failed to advance generation {}", self.generation))?;
        self.generation += 1;
        Ok(())
    }

    /// Call `f` on the current board and then after each of `count` advances.
    pub fn for_each_generation<F>(&mut self, count: u64, mut f: F) -> Result<()>
    where
        F: FnMut(u64, &Grid) -> Result<()>,
    {
        f(self.generation, &self.grid)?;
        for _ in 0..count {
            self.step()?;
            f(self.generation, &self.grid)?;
        }
        Ok(())
    }

    /// Capture the current board and `count` following generations
    pub fn frames(&mut self, count: u64) -> Result<Vec<Frame>> {
        let alphabet = self.settings.render.alphabet;
        let mut frames = Vec::new();
        self.for_each_generation(count, |generation, grid| {
            frames.push(Frame::capture(generation, grid, &alphabet)?);
            Ok(())
        })?;
        Ok(frames)
    }

    /// Run the animation loop: render, write, wait, advance, clear.
    ///
    /// Ends when the pacer fails, the generation limit is reached, or (with
    /// `stop_when_stable`) the board repeats. Render and advance errors are
    /// returned immediately. The board is released before returning.
    pub fn run<W: Write, P: Pacer>(mut self, out: &mut W, pacer: &mut P) -> Result<RunSummary> {
        let max_generations = self.settings.runner.max_generations;
        let detect_stable = self.settings.runner.stop_when_stable;
        let clear_screen = self.settings.render.clear_screen;

        // board one generation before `before`, kept for period-2 detection
        let mut previous: Option<Grid> = None;
        let mut stable = false;

        let stop = loop {
            let frame = self.render()?;
            writeln!(out, "{}", frame).context("Failed to write frame")?;
            out.flush().context("Failed to flush output")?;

            if max_generations.is_some_and(|max| self.generation >= max) {
                break StopReason::GenerationLimit;
            }
            if stable {
                break StopReason::Stable;
            }
            if pacer.wait().is_err() {
                break StopReason::WaitFailed;
            }

            let before = if detect_stable {
                Some(self.grid.duplicate().context("Failed to snapshot board")?)
            } else {
                None
            };
            self.step()?;

            if let Some(before) = before {
                stable = self.grid == before || previous.as_ref() == Some(&self.grid);
                previous = Some(before);
            }

            if clear_screen {
                write!(out, "{}", CLEAR_SCREEN).context("Failed to clear screen")?;
            }
        };

        let summary = RunSummary {
            seed: self.seed,
            generations: self.generation,
            final_living: self.grid.living_count(),
            stop,
        };
        self.grid.destroy();
        Ok(summary)
    }
}
