//! The bootstrap orchestrator.
//!
//! Responsibilities:
//! - Load `.env` into the environment store before anything else reads it.
//! - Resolve configuration and decide whether to contact Infisical at all.
//! - Pick the auth strategy, authenticate when needed, fetch once and merge.
//! - Apply the fail-fast policy to every failure after the decision to proceed.
//! - Treat a broken `.env` file as a warning; it never aborts bootstrap.
//!
//! Does NOT handle:
//! - HTTP details (see `infisical-client`).
//! - Retries or caching; each call performs at most one login and one fetch.
//!
//! Invariants:
//! - Incomplete configuration is never an error; it is a `Skipped` outcome,
//!   even when the base URL is malformed.
//! - With a token configured, the login endpoint is never called.
//! - Secret values and credentials are never logged; names are.

use infisical_client::{AccessToken, ClientError, InfisicalClient};
use infisical_config::{
    AuthStrategy, Completeness, Config, ConfigLoader, EnvStore, ProcessEnv, load_dotenv,
};
use tracing::warn;

use crate::error::{BootstrapError, Result};
use crate::merge::{MergeReport, merge_secrets};
use crate::source::SecretSource;

/// Emit a diagnostic at `info` when debug is requested, `debug` otherwise.
macro_rules! diag {
    ($enabled:expr, $($arg:tt)+) => {
        if $enabled {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

/// Why bootstrap returned without contacting Infisical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing Infisical-related is configured.
    NoConfiguration,
    /// Project id or environment is missing.
    MissingIdentifiers,
    /// Neither a token nor a complete client id/secret pair is configured.
    NoAuthentication,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoConfiguration => "no configuration",
            Self::MissingIdentifiers => "missing project id or environment",
            Self::NoAuthentication => "no valid authentication",
        }
    }
}

/// Result of a bootstrap call that did not propagate an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Infisical was not contacted.
    Skipped(SkipReason),
    /// Secrets were fetched and merged.
    Loaded(MergeReport),
    /// A failure was logged and swallowed because fail-fast is off.
    Failed { reason: String },
}

impl BootstrapOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Build an [`InfisicalClient`] for resolved configuration.
pub fn connect(config: &Config) -> std::result::Result<InfisicalClient, ClientError> {
    InfisicalClient::builder().from_config(config).build()
}

/// Bootstrap `env` from `.env` and Infisical.
///
/// `connect` builds the secret source from the resolved configuration and
/// is only called once it is certain that Infisical will be contacted.
///
/// # Errors
///
/// With fail-fast enabled (the default), returns the first configuration,
/// authentication, fetch or parse failure once Infisical is known to be
/// configured. With fail-fast
/// disabled the failure is logged and reported as
/// [`BootstrapOutcome::Failed`].
pub async fn bootstrap<E, S, F>(
    loader: ConfigLoader,
    env: &mut E,
    connect: F,
) -> Result<BootstrapOutcome>
where
    E: EnvStore + ?Sized,
    S: SecretSource,
    F: FnOnce(&Config) -> std::result::Result<S, ClientError>,
{
    let fail_fast = loader.fail_fast_enabled();
    let debug = loader.debug_enabled();

    match load_dotenv(loader.dotenv(), env) {
        Ok(report) => diag!(
            debug,
            path = ?report.path,
            found = report.found,
            loaded = report.loaded,
            skipped = report.skipped,
            "Loaded dotenv configuration"
        ),
        Err(e) => warn!(error = %e, "Failed to load .env file; continuing without it"),
    }

    match loader.completeness(&*env) {
        Completeness::None => {
            diag!(debug, "No Infisical configuration found; skipping secret loading");
            return Ok(BootstrapOutcome::Skipped(SkipReason::NoConfiguration));
        }
        Completeness::MissingIdentifiers => {
            warn!(
                "Infisical configuration is incomplete: project id and environment are required; skipping secret loading"
            );
            return Ok(BootstrapOutcome::Skipped(SkipReason::MissingIdentifiers));
        }
        Completeness::Complete => {}
    }

    if !loader.has_auth(&*env) {
        warn!(
            "No valid Infisical authentication configured (token or client id and secret); skipping secret loading"
        );
        return Ok(BootstrapOutcome::Skipped(SkipReason::NoAuthentication));
    }

    let config = match loader.resolve(&*env) {
        Ok(config) => config,
        Err(e) => return give_up(fail_fast, e.into()),
    };

    // Classification above used the same inputs, so a strategy exists.
    let Some(strategy) = config.auth_strategy() else {
        return Ok(BootstrapOutcome::Skipped(SkipReason::NoAuthentication));
    };

    match load_secrets(&config, &strategy, env, connect).await {
        Ok(report) => {
            diag!(
                config.debug,
                added = report.added.len(),
                overwritten = report.overwritten.len(),
                kept = report.kept.len(),
                rejected = report.rejected.len(),
                "Loaded secrets from Infisical"
            );
            Ok(BootstrapOutcome::Loaded(report))
        }
        Err(e) => give_up(config.fail_fast, e),
    }
}

/// Bootstrap the real process environment with an HTTP client.
///
/// Call this before spawning threads that read the environment.
pub async fn bootstrap_process(loader: ConfigLoader) -> Result<BootstrapOutcome> {
    let mut env = ProcessEnv::new();
    bootstrap(loader, &mut env, connect).await
}

async fn load_secrets<E, S, F>(
    config: &Config,
    strategy: &AuthStrategy,
    env: &mut E,
    connect: F,
) -> Result<MergeReport>
where
    E: EnvStore + ?Sized,
    S: SecretSource,
    F: FnOnce(&Config) -> std::result::Result<S, ClientError>,
{
    // Completeness::Complete guarantees both identifiers.
    let (Some(project_id), Some(environment)) = (&config.project_id, &config.environment) else {
        return Ok(MergeReport::default());
    };

    let source = connect(config)?;

    diag!(
        config.debug,
        base_url = %config.base_url,
        auth = strategy.kind(),
        project_id = %project_id,
        environment = %environment,
        "Fetching secrets from Infisical"
    );

    let token = match strategy {
        AuthStrategy::Token { token } => AccessToken::from(token.clone()),
        AuthStrategy::UniversalAuth {
            client_id,
            client_secret,
        } => source.authenticate(client_id, client_secret).await?,
    };

    let secrets = source
        .fetch_secrets(&token, project_id, environment)
        .await?;

    let names: Vec<&str> = secrets.names().collect();
    diag!(config.debug, count = secrets.len(), names = ?names, "Fetched secrets");

    Ok(merge_secrets(&secrets, env, config.override_existing))
}

fn give_up(fail_fast: bool, err: BootstrapError) -> Result<BootstrapOutcome> {
    if fail_fast {
        return Err(err);
    }
    warn!(error = %err, "Failed to load secrets from Infisical; continuing without them");
    Ok(BootstrapOutcome::Failed {
        reason: err.to_string(),
    })
}
