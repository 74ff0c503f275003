// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `courseplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "courseplan",
    version,
    about = "Compute a prerequisite- and credit-feasible course plan.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the catalog file (TOML).
    ///
    /// Default: `Courseplan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Courseplan.toml")]
    pub config: String,

    /// Parse + validate the catalog and print it, but don't compute a plan.
    #[arg(long)]
    pub check: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COURSEPLAN_LOG` or a default level will be used.
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
