//! Resolved configuration for one bootstrap call.
//!
//! Responsibilities:
//! - Hold the resolved configuration values and policies.
//! - Classify whether enough configuration is present to contact Infisical.
//! - Select the authentication strategy from the fields that are present.
//!
//! Does NOT handle:
//! - Resolving explicit values against environment fallbacks (see `loader`).
//!
//! Invariants:
//! - `base_url` is always a validated absolute http(s) URL without a trailing slash.
//! - Optional string fields are never blank; blank inputs resolve to `None`.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::types::auth::AuthStrategy;

/// How much of the Infisical configuration is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    /// No token, client credentials, project id or environment at all.
    None,
    /// Something was configured, but the project id or environment is missing.
    MissingIdentifiers,
    /// Project id and environment are present.
    Complete,
}

impl Completeness {
    /// Classify from which fields are present.
    ///
    /// `any_auth` is true when a token, client id or client secret is set.
    pub(crate) fn classify(any_auth: bool, project_id: bool, environment: bool) -> Self {
        if !any_auth && !project_id && !environment {
            Self::None
        } else if !project_id || !environment {
            Self::MissingIdentifiers
        } else {
            Self::Complete
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::MissingIdentifiers => "partial",
            Self::Complete => "complete",
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: Option<SecretString>,
    pub client_id: Option<String>,
    pub client_secret: Option<SecretString>,
    pub project_id: Option<String>,
    pub environment: Option<String>,
    /// Overwrite environment entries that already exist.
    pub override_existing: bool,
    /// Propagate network, auth and parse failures instead of logging them.
    pub fail_fast: bool,
    /// Promote diagnostic logging.
    pub debug: bool,
    /// Client-side deadline for each request.
    pub timeout: Duration,
}

impl Config {
    /// Classify the configuration.
    ///
    /// The base URL is not considered since it always has a default.
    pub fn completeness(&self) -> Completeness {
        Completeness::classify(
            self.token.is_some() || self.client_id.is_some() || self.client_secret.is_some(),
            self.project_id.is_some(),
            self.environment.is_some(),
        )
    }

    /// Select the authentication strategy.
    ///
    /// A direct token wins over client credentials. Returns `None` when
    /// neither a token nor a complete client id/secret pair is present.
    pub fn auth_strategy(&self) -> Option<AuthStrategy> {
        if let Some(token) = &self.token {
            let trimmed = token.expose_secret().trim();
            if !trimmed.is_empty() {
                return Some(AuthStrategy::Token {
                    token: SecretString::new(trimmed.into()),
                });
            }
        }

        match (&self.client_id, &self.client_secret) {
            (Some(client_id), Some(client_secret)) => Some(AuthStrategy::UniversalAuth {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            }),
            _ => None,
        }
    }
}
