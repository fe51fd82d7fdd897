//! Infisical REST API client.
//!
//! This crate provides a small typed client for the two Infisical endpoints
//! used to bootstrap configuration: universal auth login and raw secret
//! listing. Every request is bounded by a client-side timeout and is never
//! retried.

mod auth;
pub mod client;
pub mod error;
pub mod models;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AccessToken;
pub use client::InfisicalClient;
pub use client::builder::InfisicalClientBuilder;
pub use error::{ClientError, Result};
pub use models::{RawSecret, RawSecretsResponse, SecretSet};
