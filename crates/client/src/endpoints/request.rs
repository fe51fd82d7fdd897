//! Shared request helpers.
//!
//! This module sends a single request under a client-side deadline and
//! turns response bodies into typed values, classifying failures into
//! [`ClientError`] variants.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Sends an HTTP request bounded by `timeout`.
///
/// The deadline covers connecting, sending and reading the response
/// headers. When it elapses the request is dropped and
/// `ClientError::Timeout` is returned.
pub(crate) async fn send_request(builder: RequestBuilder, timeout: Duration) -> Result<Response> {
    builder
        .timeout(timeout)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ClientError::from_transport(e, timeout))
}

/// Read a response body as text, for inclusion in error messages.
pub(crate) async fn error_body(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string())
}

/// Read and deserialize a JSON response body.
///
/// `what` names the payload in the `MalformedResponse` message.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    timeout: Duration,
    what: &str,
) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::from_transport(e, timeout))?;

    serde_json::from_str(&body)
        .map_err(|e| ClientError::MalformedResponse(format!("failed to parse {what}: {e}")))
}
