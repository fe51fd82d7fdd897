//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - The returned value is the process exit code on success.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::loader_from_cli;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli) -> Result<i32> {
    let loader = loader_from_cli(&cli);

    match cli.command {
        Commands::Run { command } => commands::run::run(loader, &command).await,
        Commands::Check { fetch, output } => {
            commands::check::run(loader, fetch, output).await?;
            Ok(ExitCode::Success.as_i32())
        }
    }
}
