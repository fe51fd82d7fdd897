//! Configuration type definitions for infisical-env.
//!
//! Responsibilities:
//! - Define the resolved `Config` and its completeness classification.
//! - Define the two authentication strategies (direct token, universal auth).
//! - Define `.env` loading options.
//!
//! Does NOT handle:
//! - Resolving values from explicit options or environment variables (see `loader`).
//! - Network calls of any kind (see the client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod config;
mod dotenv;

pub use auth::AuthStrategy;
pub use config::{Completeness, Config};
pub use dotenv::{Dotenv, DotenvOptions};
