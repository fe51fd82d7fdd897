//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - A successful `run` exits with the child's own code instead.

use infisical_bootstrap::BootstrapError;
use infisical_client::ClientError;

/// Structured exit codes for infisical-env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - configuration, `.env`, or unhandled failure.
    GeneralError = 1,

    /// Authentication failure - rejected credentials or no access token.
    ///
    /// Scripts should refresh credentials.
    AuthenticationFailed = 2,

    /// Connection error - network failure or request timeout.
    ///
    /// Scripts may retry later.
    ConnectionError = 3,

    /// Malformed response - Infisical answered with an unexpected body.
    MalformedResponse = 5,

    /// API error - Infisical answered with a non-success status.
    ApiError = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed { .. } | ClientError::MissingAccessToken => {
                ExitCode::AuthenticationFailed
            }
            ClientError::Api {
                status: 401 | 403,
                ..
            } => ExitCode::AuthenticationFailed,
            ClientError::Api { .. } => ExitCode::ApiError,

            ClientError::Timeout(_) | ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::Transport(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::MalformedResponse(_) => ExitCode::MalformedResponse,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is found.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            // BootstrapError is transparent, so its ClientError is not a separate link.
            if let Some(client_err) = cause
                .downcast_ref::<BootstrapError>()
                .and_then(BootstrapError::client_error)
            {
                return ExitCode::from(client_err);
            }
        }

        ExitCode::GeneralError
    }
}
