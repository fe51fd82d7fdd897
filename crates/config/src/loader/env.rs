//! Environment variable fallbacks for configuration.
//!
//! Responsibilities:
//! - Read `INFISICAL_*` variables from an `EnvStore`.
//! - Fill options the caller did not set explicitly.
//!
//! Does NOT handle:
//! - `.env` file loading (see `dotenv.rs`).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Explicit options are never replaced by environment values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use secrecy::SecretString;

use super::builder::ConfigLoader;
use crate::constants::{
    ENV_BASE_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_ENVIRONMENT, ENV_PROJECT_ID, ENV_TOKEN,
};
use crate::env_store::EnvStore;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none<E: EnvStore + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.get(key).and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Fill every option the loader does not already hold from the environment.
pub(crate) fn apply_env<E: EnvStore + ?Sized>(loader: &mut ConfigLoader, env: &E) {
    if loader.base_url().is_none() {
        loader.set_base_url(env_var_or_none(env, ENV_BASE_URL));
    }
    if !loader.has_token() {
        loader.set_token(env_var_or_none(env, ENV_TOKEN).map(|t| SecretString::new(t.into())));
    }
    if loader.client_id().is_none() {
        loader.set_client_id(env_var_or_none(env, ENV_CLIENT_ID));
    }
    if !loader.has_client_secret() {
        loader.set_client_secret(
            env_var_or_none(env, ENV_CLIENT_SECRET).map(|s| SecretString::new(s.into())),
        );
    }
    if loader.project_id().is_none() {
        loader.set_project_id(env_var_or_none(env, ENV_PROJECT_ID));
    }
    if loader.environment().is_none() {
        loader.set_environment(env_var_or_none(env, ENV_ENVIRONMENT));
    }
}
