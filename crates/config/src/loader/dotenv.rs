//! `.env` file loading into an `EnvStore`.
//!
//! Responsibilities:
//! - Read key/value pairs from a `.env` file with `dotenvy`.
//! - Write them into the store, respecting the dotenv override option.
//! - Honor the process-wide `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Resolving configuration from the loaded values (see builder.rs).
//!
//! Invariants:
//! - A missing `.env` file is not an error.
//! - Existing keys are kept unless `override_existing` is set.
//! - A file that fails to parse writes nothing.
//! - Errors never carry line contents from the file.

use std::path::PathBuf;
use tracing::debug;

use super::error::ConfigError;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::env_store::EnvStore;
use crate::types::{Dotenv, DotenvOptions};

/// Summary of a `.env` load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotenvReport {
    /// The explicit file that was read, if one was configured.
    pub path: Option<PathBuf>,
    /// Whether a file was found and read.
    pub found: bool,
    /// Number of keys written to the store.
    pub loaded: usize,
    /// Number of keys left untouched because they already existed.
    pub skipped: usize,
}

/// Check if dotenv loading is disabled via the `DOTENV_DISABLED` variable.
pub fn dotenv_disabled<E: EnvStore + ?Sized>(env: &E) -> bool {
    matches!(
        env.get(ENV_DOTENV_DISABLED).as_deref(),
        Some("true") | Some("1")
    )
}

/// Load a `.env` file into `env`.
///
/// Returns an empty report when loading is disabled or no file exists.
///
/// # Errors
///
/// Returns an error if:
/// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
/// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
pub fn load_dotenv<E: EnvStore + ?Sized>(
    dotenv: &Dotenv,
    env: &mut E,
) -> Result<DotenvReport, ConfigError> {
    let options = match dotenv {
        Dotenv::Disabled => return Ok(DotenvReport::default()),
        Dotenv::Load(options) => options,
    };

    if dotenv_disabled(env) {
        debug!("Skipping .env loading: {} is set", ENV_DOTENV_DISABLED);
        return Ok(DotenvReport::default());
    }

    let iter = match open(options) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => {
            debug!("No .env file found");
            return Ok(DotenvReport {
                path: options.path.clone(),
                ..DotenvReport::default()
            });
        }
        Err(e) => return Err(e.into()),
    };

    let mut report = DotenvReport {
        path: options.path.clone(),
        found: true,
        ..DotenvReport::default()
    };

    // Parse the whole file first so a bad line leaves the store untouched.
    let pairs = iter.collect::<Result<Vec<_>, _>>()?;

    for (key, value) in pairs {
        if options.override_existing || !env.contains(&key) {
            env.set(&key, &value);
            report.loaded += 1;
        } else {
            report.skipped += 1;
        }
    }

    debug!(
        loaded = report.loaded,
        skipped = report.skipped,
        "Loaded .env file"
    );

    Ok(report)
}

fn open(options: &DotenvOptions) -> Result<dotenvy::Iter<std::fs::File>, dotenvy::Error> {
    match &options.path {
        Some(path) => dotenvy::from_path_iter(path),
        None => dotenvy::dotenv_iter(),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
