//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Infisical client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use infisical_client::testing::load_fixture;

#[allow(unused_imports)]
pub use infisical_client::{AccessToken, InfisicalClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Timeout used by tests that expect a request to complete.
#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, timeout: Duration) -> InfisicalClient {
    InfisicalClient::builder()
        .base_url(server.uri())
        .timeout(timeout)
        .build()
        .expect("client should build")
}
