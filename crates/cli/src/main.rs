//! infisical-env - Run commands with secrets from `.env` and Infisical.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Initialize logging on stderr.
//! - Bootstrap configuration and run the requested command.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Configuration resolution or HTTP (see the library crates).
//!
//! Invariants:
//! - Secret values are never written to stdout or stderr.
//! - The process environment is never mutated; children receive an explicit environment.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;

use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format, cli.debug);

    match run_command(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    }
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects `info` and the
/// default is `warn`, so partial-configuration warnings are always visible.
fn init_logging(format: LogFormat, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "info" } else { "warn" }));

    let json = format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}
