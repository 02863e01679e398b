//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::error::GridError;
use crate::game_of_life::{Alphabet, Grid};
use crate::runner::Frame;
use anyhow::{Context, Result};

/// Formats boards and step output for the console
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid with column and row numbers, two columns per cell
    pub fn format_grid_with_coords(grid: &Grid, alphabet: &Alphabet) -> Result<String, GridError> {
        let cells = grid.cells()?;
        let cols = usize::from(grid.cols());
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..cols {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..usize::from(grid.rows()) {
            output.push_str(&format!("{:2} ", y));
            for &alive in &cells[y * cols..(y + 1) * cols] {
                let symbol = alphabet.symbol(alive);
                output.push(symbol);
                output.push(symbol);
            }
            output.push('\n');
        }

        Ok(output)
    }

    /// Format a sequence of generations in the requested output format
    pub fn format_frames(
        frames: &[Frame],
        grids: &[Grid],
        alphabet: &Alphabet,
        format: OutputFormat,
    ) -> Result<String> {
        let mut output = String::new();
        match format {
            OutputFormat::Text => {
                for frame in frames {
                    output.push_str(&format!("Generation {}:\n", frame.generation));
                    for line in &frame.rows_text {
                        output.push_str(line);
                        output.push('\n');
                    }
                }
            }
            OutputFormat::Json => {
                output = serde_json::to_string_pretty(frames)
                    .context("Failed to serialize frames")?;
                output.push('\n');
            }
            OutputFormat::Visual => {
                for (frame, grid) in frames.iter().zip(grids) {
                    output.push_str(&format!(
                        "\nGeneration {} (Living: {}):\n",
                        frame.generation, frame.living
                    ));
                    output.push_str(&Self::format_grid_with_coords(grid, alphabet)?);
                }
            }
        }
        Ok(output)
    }
}

/// Status-line coloring for the CLI
pub struct ColorOutput;

impl ColorOutput {
    /// ANSI colors are off when `NO_COLOR` is set or `TERM` is `dumb`
    pub fn enabled() -> bool {
        std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").map_or(true, |term| term != "dumb")
    }

    pub fn colored(text: &str, color: Color) -> String {
        color.paint(text, Self::enabled())
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// Wrap `text` in this color's escape codes, or return it unchanged
    pub fn paint(self, text: &str, enabled: bool) -> String {
        if !enabled {
            return text.to_owned();
        }
        let code = match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}
