//! Shared test utilities for infisical-env integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear `INFISICAL_*` variables inherited from the host.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.

use assert_cmd::Command;

const INFISICAL_VARS: [&str; 6] = [
    "INFISICAL_BASE_URL",
    "INFISICAL_TOKEN",
    "INFISICAL_CLIENT_ID",
    "INFISICAL_CLIENT_SECRET",
    "INFISICAL_PROJECT_ID",
    "INFISICAL_ENVIRONMENT",
];

/// Returns a hermetic `infisical-env` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `INFISICAL_*` variables are cleared to ensure no leakage from the host.
/// - `RUST_LOG` is cleared so log assertions see the default filter.
pub fn infisical_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("infisical-env");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");
    for var in INFISICAL_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic command with a complete token configuration
/// pointed at `base_url`.
#[allow(dead_code)]
pub fn infisical_cmd_with_token(base_url: &str) -> Command {
    let mut cmd = infisical_cmd();
    cmd.env("INFISICAL_BASE_URL", base_url)
        .env("INFISICAL_TOKEN", "test-token")
        .env("INFISICAL_PROJECT_ID", "test-project")
        .env("INFISICAL_ENVIRONMENT", "dev");
    cmd
}
