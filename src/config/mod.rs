//! Configuration management for the console simulator

pub mod settings;

pub use settings::{
    Settings, GridConfig, RenderConfig, RunnerConfig, SeedConfig, OutputFormat, CliOverrides
};
