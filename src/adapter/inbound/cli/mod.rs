//! CLI module graph.

pub mod check;
pub mod command;
pub mod output;
pub mod serve;

use crate::error::Result;
use command::{CheckCommand, Cli, Commands};

/// Dispatch a parsed command line.
///
/// # Errors
/// Returns the first error raised by the selected command.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    match cli.command {
        Commands::Serve(args) => serve::execute(&args).await,
        Commands::Check(CheckCommand::Config(args)) => check::config::execute_config(&args.config),
    }
}
