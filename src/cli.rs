// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::PassOrder;

/// Command-line arguments for `pertdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pertdag",
    version,
    about = "PERT/CPM critical path analysis over a task dependency graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the project file (TOML).
    ///
    /// Default: `Pertdag.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Pertdag.toml")]
    pub project: String,

    /// Analyse the built-in sample project instead of reading a file.
    #[arg(long, conflicts_with = "project")]
    pub sample: bool,

    /// Pass order; overrides `[analysis].order` from the project file.
    #[arg(long, value_enum, value_name = "ORDER")]
    pub order: Option<PassOrder>,

    /// Also print the dependency diagram.
    #[arg(long)]
    pub diagram: bool,

    /// Parse + validate, list the tasks, but don't calculate anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PERTDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
