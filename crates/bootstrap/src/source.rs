//! The seam between the orchestrator and the Infisical API.
//!
//! Responsibilities:
//! - Define [`SecretSource`], the two network operations bootstrap needs.
//! - Implement it for [`InfisicalClient`].
//!
//! Does NOT handle:
//! - Choosing an auth strategy or deciding whether to call at all (see `bootstrap`).

use async_trait::async_trait;
use infisical_client::{AccessToken, ClientError, InfisicalClient, SecretSet};
use secrecy::SecretString;

/// Authenticates and fetches secrets from a secret-management backend.
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Exchange client credentials for a bearer credential.
    async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &SecretString,
    ) -> Result<AccessToken, ClientError>;

    /// Fetch the secrets of one project environment.
    async fn fetch_secrets(
        &self,
        token: &AccessToken,
        project_id: &str,
        environment: &str,
    ) -> Result<SecretSet, ClientError>;
}

#[async_trait]
impl SecretSource for InfisicalClient {
    async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &SecretString,
    ) -> Result<AccessToken, ClientError> {
        self.universal_auth_login(client_id, client_secret).await
    }

    async fn fetch_secrets(
        &self,
        token: &AccessToken,
        project_id: &str,
        environment: &str,
    ) -> Result<SecretSet, ClientError> {
        self.list_secrets(token, project_id, environment).await
    }
}

#[async_trait]
impl<T: SecretSource + ?Sized> SecretSource for &T {
    async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &SecretString,
    ) -> Result<AccessToken, ClientError> {
        (**self).authenticate(client_id, client_secret).await
    }

    async fn fetch_secrets(
        &self,
        token: &AccessToken,
        project_id: &str,
        environment: &str,
    ) -> Result<SecretSet, ClientError> {
        (**self).fetch_secrets(token, project_id, environment).await
    }
}
