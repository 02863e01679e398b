//! Main CLI application for the console Game of Life

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use game_of_life_console::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{Alphabet, Grid, Pattern},
    runner::{Frame, Session},
    utils::{ColorOutput, GridFormatter},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "game_of_life_console")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the board in the terminal
    Run {
        #[command(flatten)]
        board: BoardArgs,

        /// Milliseconds between frames (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Stop once the board is a still life or period-2 oscillator
        #[arg(long)]
        stop_when_stable: bool,

        /// Do not clear the screen between frames
        #[arg(long)]
        no_clear: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a number of generations without pacing
    Step {
        #[command(flatten)]
        board: BoardArgs,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create default and example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct BoardArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Number of rows (overrides config)
    #[arg(long)]
    rows: Option<u16>,

    /// Number of columns (overrides config)
    #[arg(long)]
    cols: Option<u16>,

    /// Random seed (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Initial pattern (overrides config)
    #[arg(short, long, value_enum)]
    pattern: Option<Pattern>,

    /// Alive and dead characters, e.g. "X " (overrides config)
    #[arg(short, long)]
    alphabet: Option<Alphabet>,
}

impl BoardArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            rows: self.rows,
            cols: self.cols,
            alphabet: self.alphabet,
            seed: self.seed,
            pattern: self.pattern,
            ..Default::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            board, interval_ms, generations, stop_when_stable, no_clear, verbose
        } => {
            let overrides = CliOverrides {
                interval_ms,
                max_generations: generations,
                stop_when_stable,
                no_clear,
                ..board.overrides()
            };
            run_command(&board.config, overrides, verbose)
        }
        Commands::Step { board, generations, format } => {
            step_command(&board.config, board.overrides(), generations, format)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        eprintln!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(config_path: &Path, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let settings = load_settings(config_path, &overrides)?;

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Grid: {}x{}", settings.grid.cols, settings.grid.rows);
        eprintln!("  Pattern: {}", settings.seed.pattern.name());
        eprintln!("  Interval: {}ms", settings.runner.interval_ms);
        match settings.runner.max_generations {
            Some(max) => eprintln!("  Max generations: {}", max),
            None => eprintln!("  Max generations: unlimited"),
        }
        eprintln!();
    }

    let summary = game_of_life_console::run(settings)?;

    if verbose {
        eprintln!("\n{}", ColorOutput::success(&summary.to_string()));
    }
    Ok(())
}

fn step_command(
    config_path: &Path,
    overrides: CliOverrides,
    generations: u64,
    format: OutputFormat,
) -> Result<()> {
    let settings = load_settings(config_path, &overrides)?;
    let alphabet = settings.render.alphabet;
    let mut session = Session::new(settings)?;

    let mut frames = Vec::new();
    let mut grids: Vec<Grid> = Vec::new();
    session.for_each_generation(generations, |generation, grid| {
        frames.push(Frame::capture(generation, grid, &alphabet)?);
        if format == OutputFormat::Visual {
            grids.push(grid.duplicate()?);
        }
        Ok(())
    })?;

    print!("{}", GridFormatter::format_frames(&frames, &grids, &alphabet, format)?);
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up configuration..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let examples_dir = config_dir.join("examples");

    // Blinker on a small board, stopping once it repeats
    let mut blinker = Settings::default();
    blinker.grid.rows = 5;
    blinker.grid.cols = 5;
    blinker.render.alphabet = Alphabet::default();
    blinker.runner.interval_ms = 500;
    blinker.runner.stop_when_stable = true;
    blinker.seed.pattern = Pattern::Blinker;
    blinker.to_file(examples_dir.join("blinker.yaml"))?;

    // Glider crossing a medium board
    let mut glider = Settings::default();
    glider.grid.rows = 20;
    glider.grid.cols = 40;
    glider.runner.max_generations = Some(80);
    glider.seed.pattern = Pattern::Glider;
    glider.to_file(examples_dir.join("glider.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_console",
            "run",
            "--config", "test.yaml",
            "--generations", "5",
            "--pattern", "glider",
            "--alphabet", "# ",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from([
            "game_of_life_console",
            "step",
            "--format", "json",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_rejects_bad_alphabet() {
        let cli = Cli::try_parse_from([
            "game_of_life_console",
            "run",
            "--alphabet", "XYZ",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        let default_path = temp_dir.path().join("config/default.yaml");
        assert_eq!(Settings::from_file(&default_path).unwrap(), Settings::default());

        let blinker = Settings::from_file(temp_dir.path().join("config/examples/blinker.yaml")).unwrap();
        assert_eq!(blinker.seed.pattern, Pattern::Blinker);
    }

    #[test]
    fn test_dispatch_reports_invalid_config() {
        let temp_dir = tempdir().unwrap();
        let config = temp_dir.path().join("bad.yaml");
        std::fs::write(&config, "grid: { rows: 5 }\n").unwrap();

        let cli = Cli::try_parse_from([
            "game_of_life_console",
            "step",
            "--config", config.to_str().unwrap(),
        ]).unwrap();
        let err = dispatch(cli.command).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load config"));
    }

    #[test]
    fn test_step_command_with_missing_config() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            rows: Some(5),
            cols: Some(5),
            pattern: Some(Pattern::Blinker),
            ..Default::default()
        };
        let result = step_command(
            &temp_dir.path().join("missing.yaml"),
            overrides,
            2,
            OutputFormat::Visual,
        );
        assert!(result.is_ok());
    }
}
