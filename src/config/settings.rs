//! Configuration settings for the console simulator

use crate::game_of_life::{Alphabet, Pattern};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub render: RenderConfig,
    pub runner: RunnerConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: u16,
    pub cols: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Two characters: alive then dead
    pub alphabet: Alphabet,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Pause between frames
    pub interval_ms: u64,
    /// Stop after this many generations; run until interrupted when unset
    pub max_generations: Option<u64>,
    /// Stop once the board is a still life or a period-2 oscillator
    pub stop_when_stable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Random seed; taken from the system clock when unset
    pub value: Option<u64>,
    pub pattern: Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                rows: 30,
                cols: 120,
            },
            render: RenderConfig {
                alphabet: Alphabet::new('X', ' '),
                clear_screen: true,
            },
            runner: RunnerConfig {
                interval_ms: 100,
                max_generations: None,
                stop_when_stable: false,
            },
            seed: SeedConfig {
                value: None,
                pattern: Pattern::Random,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.runner.interval_ms == 0 {
            anyhow::bail!("Frame interval must be positive");
        }

        if self.runner.max_generations == Some(0) {
            anyhow::bail!("Maximum generations must be positive when set");
        }

        if !self.seed.pattern.fits(self.grid.rows, self.grid.cols) {
            let (width, height) = self.seed.pattern.extent();
            anyhow::bail!(
                "Pattern '{}' ({}x{}) does not fit on a {}x{} grid",
                self.seed.pattern.name(), width, height, self.grid.cols, self.grid.rows
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.grid.cols = cols;
        }
        if let Some(alphabet) = cli_overrides.alphabet {
            self.render.alphabet = alphabet;
        }
        if cli_overrides.no_clear {
            self.render.clear_screen = false;
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.runner.interval_ms = interval_ms;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.runner.max_generations = Some(max_generations);
        }
        if cli_overrides.stop_when_stable {
            self.runner.stop_when_stable = true;
        }
        if let Some(seed) = cli_overrides.seed {
            self.seed.value = Some(seed);
        }
        if let Some(pattern) = cli_overrides.pattern {
            self.seed.pattern = pattern;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<u16>,
    pub cols: Option<u16>,
    pub alphabet: Option<Alphabet>,
    pub no_clear: bool,
    pub interval_ms: Option<u64>,
    pub max_generations: Option<u64>,
    pub stop_when_stable: bool,
    pub seed: Option<u64>,
    pub pattern: Option<Pattern>,
}
