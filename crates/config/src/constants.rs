//! Centralized constants for the infisical-env workspace.
//!
//! This module contains default values and environment variable names used
//! across crates to avoid magic string duplication.

use std::time::Duration;

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Base URL used when neither an explicit value nor `INFISICAL_BASE_URL` is set.
pub const DEFAULT_BASE_URL: &str = "https://app.infisical.com";

/// Client-side deadline for each request to Infisical, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default request timeout as a [`Duration`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Policy Defaults
// =============================================================================

/// Fetched secrets overwrite existing environment entries unless told otherwise.
pub const DEFAULT_OVERRIDE: bool = true;

/// Network, auth and parse failures abort bootstrap unless told otherwise.
pub const DEFAULT_FAIL_FAST: bool = true;

/// Diagnostic logging is off by default.
pub const DEFAULT_DEBUG: bool = false;

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_BASE_URL: &str = "INFISICAL_BASE_URL";
pub const ENV_TOKEN: &str = "INFISICAL_TOKEN";
pub const ENV_CLIENT_ID: &str = "INFISICAL_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "INFISICAL_CLIENT_SECRET";
pub const ENV_PROJECT_ID: &str = "INFISICAL_PROJECT_ID";
pub const ENV_ENVIRONMENT: &str = "INFISICAL_ENVIRONMENT";

/// Setting this to `1` or `true` disables `.env` loading process-wide.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// API Paths
// =============================================================================

/// Universal auth login endpoint, relative to the base URL.
pub const UNIVERSAL_AUTH_LOGIN_PATH: &str = "/api/v1/auth/universal-auth/login";

/// Raw secrets listing endpoint, relative to the base URL.
pub const RAW_SECRETS_PATH: &str = "/api/v3/secrets/raw";
