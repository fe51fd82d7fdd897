//! Data models for Infisical API requests and responses.
//!
//! Types are organized by endpoint in submodules and re-exported here
//! for convenient access.

pub mod auth;
pub mod secrets;

pub use auth::{UniversalAuthLoginRequest, UniversalAuthLoginResponse};
pub use secrets::{RawSecret, RawSecretsResponse, SecretSet};
