//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let loader = cli.loader();
    match cli.command {
        Commands::Check => commands::check::run(&loader, &cli.output)?,
        Commands::Paths => commands::paths::run(&loader, &cli.output)?,
    }
    Ok(())
}
