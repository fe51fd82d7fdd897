//! Authentication endpoints.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::auth::AccessToken;
use crate::endpoints::request::{error_body, read_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::{UniversalAuthLoginRequest, UniversalAuthLoginResponse};
use infisical_config::constants::UNIVERSAL_AUTH_LOGIN_PATH;

/// Exchange machine identity client credentials for an access token.
///
/// # Errors
///
/// - `ClientError::AuthFailed` on any non-success status (status and body included)
/// - `ClientError::MissingAccessToken` if the body has no non-empty `accessToken`
/// - `ClientError::MalformedResponse` if the body is not JSON
/// - `ClientError::Timeout` if `timeout` elapses
pub async fn universal_auth_login(
    client: &Client,
    base_url: &str,
    client_id: &str,
    client_secret: &str,
    timeout: Duration,
) -> Result<AccessToken> {
    debug!(client_id = %client_id, "Logging in to Infisical with universal auth");

    let url = format!("{}{}", base_url, UNIVERSAL_AUTH_LOGIN_PATH);
    let builder = client.post(&url).json(&UniversalAuthLoginRequest {
        client_id,
        client_secret,
    });
    let response = send_request(builder, timeout).await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = error_body(response).await;
        return Err(ClientError::AuthFailed { status, body });
    }

    let login: UniversalAuthLoginResponse =
        read_json(response, timeout, "universal auth login response").await?;

    match login.access_token {
        Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
        _ => Err(ClientError::MissingAccessToken),
    }
}
