//! Configuration management for infisical-env.
//!
//! This crate provides types and loaders for resolving Infisical bootstrap
//! configuration from explicit options, environment variables and `.env`
//! files, plus the `EnvStore` abstraction over environment state.

pub mod constants;
pub mod env_store;
mod loader;
pub mod types;

pub use env_store::{EnvStore, MemoryEnv, ProcessEnv};
pub use loader::{
    ConfigError, ConfigLoader, DotenvReport, dotenv_disabled, env_var_or_none, load_dotenv,
};
pub use types::{AuthStrategy, Completeness, Config, Dotenv, DotenvOptions};
