//! Secret listing endpoints.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::auth::AccessToken;
use crate::endpoints::request::{error_body, read_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::{RawSecretsResponse, SecretSet};
use infisical_config::constants::RAW_SECRETS_PATH;

/// List the raw (decrypted) secrets of one project environment.
///
/// Records are flattened in response order; a repeated name keeps the
/// last value.
///
/// # Errors
///
/// - `ClientError::Api` on any non-success status (status and body included)
/// - `ClientError::MalformedResponse` if the body is not `{ "secrets": [...] }`
/// - `ClientError::Timeout` if `timeout` elapses
pub async fn list_raw_secrets(
    client: &Client,
    base_url: &str,
    token: &AccessToken,
    project_id: &str,
    environment: &str,
    timeout: Duration,
) -> Result<SecretSet> {
    debug!(project_id = %project_id, environment = %environment, "Listing Infisical secrets");

    let url = format!("{}{}", base_url, RAW_SECRETS_PATH);
    let builder = client
        .get(&url)
        .header("Authorization", token.bearer())
        .query(&[("projectId", project_id), ("environment", environment)]);
    let response = send_request(builder, timeout).await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = error_body(response).await;
        return Err(ClientError::Api { status, url, body });
    }

    let resp: RawSecretsResponse = read_json(response, timeout, "secrets response").await?;
    let records = resp.secrets.len();
    let secrets = SecretSet::from(resp);

    debug!(
        records,
        unique = secrets.len(),
        "Fetched secrets from Infisical"
    );

    Ok(secrets)
}
