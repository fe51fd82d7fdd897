//! Configuration loader for explicit options, environment variables and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that records explicit options.
//! - Resolve every unset option against an `EnvStore`, then built-in defaults.
//! - Load `.env` files into an `EnvStore` before resolution.
//!
//! Does NOT handle:
//! - Deciding whether to contact Infisical (see `Config::completeness`).
//! - Writing fetched secrets (see the bootstrap crate).
//!
//! Invariants / Assumptions:
//! - Explicit options take precedence over environment variables.
//! - Environment variables take precedence over built-in defaults.
//! - The `DOTENV_DISABLED` variable is checked before any `.env` file is read.

mod builder;
mod dotenv;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use dotenv::{DotenvReport, dotenv_disabled, load_dotenv};
pub use env::env_var_or_none;
pub use error::ConfigError;
