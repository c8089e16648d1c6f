//! Command-line interface definitions.
//!
//! Defines the CLI structure for the catalogue service using `clap`: one
//! subcommand to serve the HTTP API and diagnostic checks.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Product catalogue HTTP service
#[derive(Parser, Debug)]
#[command(name = "catalogue")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the catalogue CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the catalogue HTTP API (foreground)
    Serve(ServeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `catalogue check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and print a summary.
    Config(ConfigPathArg),
}

/// Shared `--config` argument.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for `catalogue serve`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the listen address (e.g. 0.0.0.0:8081)
    #[arg(long)]
    pub bind: Option<String>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}
