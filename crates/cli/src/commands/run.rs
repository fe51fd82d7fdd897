//! Run command implementation.
//!
//! Responsibilities:
//! - Bootstrap an environment seeded from the current process.
//! - Spawn the child with the inherited environment plus every entry
//!   bootstrap added or replaced, and wait for it.
//!
//! Does NOT handle:
//! - Forwarding signals; the child shares the terminal's process group.
//!
//! Invariants:
//! - The CLI's own process environment is never modified.
//! - The exit code is the child's, or 128 + signal when it was killed.

use anyhow::{Context, Result};
use infisical_bootstrap::{BootstrapOutcome, bootstrap, connect};
use infisical_config::{ConfigLoader, MemoryEnv};
use std::process::ExitStatus;
use tracing::{debug, info};

use crate::error::ExitCode;

/// Bootstrap and run `command`, returning its exit code.
pub async fn run(loader: ConfigLoader, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .context("No command given to run")?;

    let base = MemoryEnv::from_process();
    let mut env = base.clone();
    let outcome = bootstrap(loader, &mut env, connect).await?;

    match &outcome {
        BootstrapOutcome::Loaded(report) => info!(
            added = report.added.len(),
            overwritten = report.overwritten.len(),
            kept = report.kept.len(),
            "Environment prepared"
        ),
        BootstrapOutcome::Skipped(reason) => {
            debug!(reason = reason.as_str(), "Running without Infisical secrets")
        }
        BootstrapOutcome::Failed { .. } => {}
    }

    debug!(program = %program, args = args.len(), "Spawning command");

    let status = tokio::process::Command::new(program)
        .args(args)
        .envs(env.changed_from(&base))
        .status()
        .await
        .with_context(|| format!("Failed to run '{}'", program))?;

    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    ExitCode::GeneralError.as_i32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_command_is_error() {
        let result = run(ConfigLoader::new().without_dotenv(), &[]).await;
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_from_signal() {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        // Exit status 3 is encoded in the high byte.
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
        // SIGTERM
        assert_eq!(exit_code(ExitStatus::from_raw(15)), 143);
    }
}
