//! Startup configuration bootstrap from `.env` files and Infisical.
//!
//! This crate ties the configuration loader and the Infisical client
//! together: load `.env`, resolve configuration, authenticate, fetch the
//! secrets of one project environment and merge them into an
//! [`EnvStore`](infisical_config::EnvStore) under the override and
//! fail-fast policies.

mod bootstrap;
pub mod error;
pub mod merge;
pub mod source;

pub use bootstrap::{BootstrapOutcome, SkipReason, bootstrap, bootstrap_process, connect};
pub use error::{BootstrapError, Result};
pub use merge::{MergeReport, merge_secrets};
pub use source::SecretSource;
