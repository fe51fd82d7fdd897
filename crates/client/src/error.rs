//! Error types for the Infisical client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Infisical client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The login endpoint rejected the client credentials.
    #[error("Infisical universal auth failed ({status}): {body}")]
    AuthFailed { status: u16, body: String },

    /// The login endpoint answered successfully but without a usable token.
    #[error("Infisical universal auth response missing accessToken")]
    MissingAccessToken,

    /// Non-success response from a data endpoint.
    #[error("Infisical API error ({status}) at {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },

    /// The client-side deadline elapsed before a response arrived.
    #[error("Infisical request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body did not have the expected shape.
    #[error("Malformed response from Infisical: {0}")]
    MalformedResponse(String),

    /// Connection, TLS or other transport failure.
    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed { .. }
                | Self::MissingAccessToken
                | Self::Api {
                    status: 401 | 403,
                    ..
                }
        )
    }

    /// Check if this error is a client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthFailed { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Classify a transport error, separating deadline expiry from other failures.
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Transport(err)
        }
    }
}
