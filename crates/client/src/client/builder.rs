//! Client builder for constructing [`InfisicalClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, redirects)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use crate::client::InfisicalClient;
use crate::error::{ClientError, Result};
use infisical_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT},
};

/// Builder for creating a new [`InfisicalClient`].
pub struct InfisicalClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for InfisicalClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl InfisicalClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Infisical instance.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the per-request timeout.
    ///
    /// Default is 5 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from resolved configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.timeout = config.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`InfisicalClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns `ClientError::Transport` if the HTTP client fails to build.
    pub fn build(self) -> Result<InfisicalClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .user_agent(concat!("infisical-env/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Transport)?;

        Ok(InfisicalClient {
            http,
            base_url,
            timeout: self.timeout,
        })
    }
}
