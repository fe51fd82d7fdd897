//! Main Infisical REST API client.
//!
//! This module provides the primary [`InfisicalClient`] for the two calls the
//! bootstrap flow needs: universal auth login and raw secret listing.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Choosing between token and universal auth (the caller decides)
//!
//! # Invariants
//! - Every request is bounded by the configured timeout
//! - No request is retried

pub mod builder;

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::auth::AccessToken;
use crate::endpoints;
use crate::error::Result;
use crate::models::SecretSet;

/// Infisical REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use infisical_client::InfisicalClient;
///
/// let client = InfisicalClient::builder()
///     .base_url("https://app.infisical.com".to_string())
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct InfisicalClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
}

impl InfisicalClient {
    /// Create a new client builder.
    pub fn builder() -> builder::InfisicalClientBuilder {
        builder::InfisicalClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Exchange client credentials for an access token.
    pub async fn universal_auth_login(
        &self,
        client_id: &str,
        client_secret: &SecretString,
    ) -> Result<AccessToken> {
        endpoints::universal_auth_login(
            &self.http,
            &self.base_url,
            client_id,
            client_secret.expose_secret(),
            self.timeout,
        )
        .await
    }

    /// Fetch the secrets of one project environment.
    pub async fn list_secrets(
        &self,
        token: &AccessToken,
        project_id: &str,
        environment: &str,
    ) -> Result<SecretSet> {
        endpoints::list_raw_secrets(
            &self.http,
            &self.base_url,
            token,
            project_id,
            environment,
            self.timeout,
        )
        .await
    }
}
