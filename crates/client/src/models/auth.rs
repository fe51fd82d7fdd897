//! Universal auth login models.

use serde::{Deserialize, Serialize};

/// JSON body for `POST /api/v1/auth/universal-auth/login`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversalAuthLoginRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

/// Login response. Only `accessToken` is required for bootstrap.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UniversalAuthLoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}
