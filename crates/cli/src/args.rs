//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `INFISICAL_*` variables; unset options fall back to them
//!   during configuration resolution, after `.env` has been loaded.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "infisical-env")]
#[command(
    about = "Run commands with environment variables from .env files and Infisical",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  infisical-env --project-id $PROJECT --environment dev run -- ./server\n  infisical-env --no-override run -- npm start\n  infisical-env check\n  infisical-env check --fetch --output json\n"
)]
pub struct Cli {
    /// Base URL of the Infisical instance [default: https://app.infisical.com]
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Service or personal token (preferred over client credentials)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Machine identity client id for universal auth
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// Machine identity client secret for universal auth
    #[arg(long, global = true)]
    pub client_secret: Option<String>,

    /// Infisical project id
    #[arg(long, global = true)]
    pub project_id: Option<String>,

    /// Environment slug within the project (e.g., dev, staging, prod)
    #[arg(long, global = true)]
    pub environment: Option<String>,

    /// Load this file instead of searching for `.env`
    #[arg(long, global = true, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Skip `.env` loading entirely
    #[arg(long, global = true, conflicts_with_all = ["env_file", "dotenv_override"])]
    pub no_dotenv: bool,

    /// Let `.env` values replace variables that are already set
    #[arg(long, global = true)]
    pub dotenv_override: bool,

    /// Keep variables that are already set instead of replacing them with secrets
    #[arg(long, global = true)]
    pub no_override: bool,

    /// Log Infisical failures and continue instead of exiting
    #[arg(long, global = true)]
    pub no_fail_fast: bool,

    /// Per-request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log diagnostics (never secret values)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap the environment and run a command in it
    Run {
        /// Command and arguments to run
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Show the resolved configuration without printing secret values
    Check {
        /// Also authenticate and fetch, reporting secret names
        #[arg(long)]
        fetch: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
