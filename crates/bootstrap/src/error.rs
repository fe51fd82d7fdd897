//! Error types for the bootstrap flow.

use infisical_client::ClientError;
use infisical_config::ConfigError;
use thiserror::Error;

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// A failure propagated under the fail-fast policy.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// `.env` loading or configuration resolution failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Authentication or secret fetching failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl BootstrapError {
    /// The underlying client error, if this failure came from the network step.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}
