//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Record explicit options through builder methods.
//! - Resolve unset options against an `EnvStore` and built-in defaults.
//! - Validate and normalize the base URL.
//! - Classify completeness before validation, so an unused bad URL is harmless.
//!
//! Does NOT handle:
//! - Direct environment variable lookup logic (delegated to env.rs).
//! - `.env` file loading (delegated to dotenv.rs; run it before `resolve`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Blank explicit values are treated as unset so the environment can fill them.
//! - The token is trimmed once here; the bearer credential is never re-trimmed downstream.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_DEBUG, DEFAULT_FAIL_FAST, DEFAULT_OVERRIDE, DEFAULT_TIMEOUT,
};
use crate::env_store::EnvStore;
use crate::types::{Completeness, Config, Dotenv, DotenvOptions};

/// Configuration loader that builds config from explicit options and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    token: Option<SecretString>,
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    project_id: Option<String>,
    environment: Option<String>,
    dotenv: Dotenv,
    override_existing: Option<bool>,
    fail_fast: Option<bool>,
    debug: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader with nothing set explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Infisical base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = non_blank(url.into());
        self
    }

    /// Set a pre-issued service or personal token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = non_blank(token.into()).map(|t| SecretString::new(t.into()));
        self
    }

    /// Set the universal auth client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = non_blank(client_id.into());
        self
    }

    /// Set the universal auth client secret.
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = non_blank(client_secret.into()).map(|s| SecretString::new(s.into()));
        self
    }

    /// Set the project (workspace) id.
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = non_blank(project_id.into());
        self
    }

    /// Set the environment slug (e.g. `dev`, `prod`).
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = non_blank(environment.into());
        self
    }

    /// Load the `.env` file with the given options.
    pub fn with_dotenv(mut self, options: DotenvOptions) -> Self {
        self.dotenv = Dotenv::Load(options);
        self
    }

    /// Do not load any `.env` file.
    pub fn without_dotenv(mut self) -> Self {
        self.dotenv = Dotenv::Disabled;
        self
    }

    /// Set whether fetched secrets overwrite existing environment entries.
    pub fn with_override(mut self, override_existing: bool) -> Self {
        self.override_existing = Some(override_existing);
        self
    }

    /// Set whether failures abort bootstrap.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = Some(fail_fast);
        self
    }

    /// Set whether diagnostic logging is promoted.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Set the client-side request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The `.env` loading setting.
    pub fn dotenv(&self) -> &Dotenv {
        &self.dotenv
    }

    /// Whether debug logging was requested explicitly.
    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or(DEFAULT_DEBUG)
    }

    /// Whether fail-fast was requested (or defaulted).
    pub fn fail_fast_enabled(&self) -> bool {
        self.fail_fast.unwrap_or(DEFAULT_FAIL_FAST)
    }

    /// Classify the configuration against `env` without validating it.
    ///
    /// Lets callers decide whether Infisical is configured at all before
    /// [`ConfigLoader::resolve`] rejects a malformed base URL.
    pub fn completeness<E: EnvStore + ?Sized>(&self, env: &E) -> Completeness {
        let filled = self.with_env(env);
        Completeness::classify(
            filled.token.is_some() || filled.client_id.is_some() || filled.client_secret.is_some(),
            filled.project_id.is_some(),
            filled.environment.is_some(),
        )
    }

    /// Whether a token or a complete client id/secret pair is available in
    /// the explicit options or `env`.
    pub fn has_auth<E: EnvStore + ?Sized>(&self, env: &E) -> bool {
        let filled = self.with_env(env);
        filled.token.is_some() || (filled.client_id.is_some() && filled.client_secret.is_some())
    }

    fn with_env<E: EnvStore + ?Sized>(&self, env: &E) -> Self {
        let mut filled = self.clone();
        apply_env(&mut filled, env);
        filled
    }

    /// Resolve the final configuration.
    ///
    /// Unset options fall back to `INFISICAL_*` variables in `env`, then to
    /// built-in defaults (only the base URL has one).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the base URL is not an absolute
    /// http(s) URL with a host.
    pub fn resolve<E: EnvStore + ?Sized>(mut self, env: &E) -> Result<Config, ConfigError> {
        apply_env(&mut self, env);

        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                var: "timeout".into(),
                message: "must be greater than 0".into(),
            });
        }

        Ok(Config {
            base_url,
            token: self
                .token
                .map(|t| SecretString::new(t.expose_secret().trim().into())),
            client_id: self.client_id,
            client_secret: self.client_secret,
            project_id: self.project_id,
            environment: self.environment,
            override_existing: self.override_existing.unwrap_or(DEFAULT_OVERRIDE),
            fail_fast: self.fail_fast.unwrap_or(DEFAULT_FAIL_FAST),
            debug: self.debug.unwrap_or(DEFAULT_DEBUG),
            timeout,
        })
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn base_url(&self) -> Option<&String> {
        self.base_url.as_ref()
    }

    pub(crate) fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn client_id(&self) -> Option<&String> {
        self.client_id.as_ref()
    }

    pub(crate) fn has_client_secret(&self) -> bool {
        self.client_secret.is_some()
    }

    pub(crate) fn project_id(&self) -> Option<&String> {
        self.project_id.as_ref()
    }

    pub(crate) fn environment(&self) -> Option<&String> {
        self.environment.as_ref()
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_token(&mut self, token: Option<SecretString>) {
        self.token = token;
    }

    pub(crate) fn set_client_id(&mut self, client_id: Option<String>) {
        self.client_id = client_id;
    }

    pub(crate) fn set_client_secret(&mut self, client_secret: Option<SecretString>) {
        self.client_secret = client_secret;
    }

    pub(crate) fn set_project_id(&mut self, project_id: Option<String>) {
        self.project_id = project_id;
    }

    pub(crate) fn set_environment(&mut self, environment: Option<String>) {
        self.environment = environment;
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
pub(crate) fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://app.infisical.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. https://app.infisical.com), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://app.infisical.com)".into(),
        });
    }

    let normalized = parsed.as_str().trim_end_matches('/').to_string();

    Ok(normalized)
}
