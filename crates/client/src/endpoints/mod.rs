//! REST API endpoint implementations.
//!
//! Each function issues exactly one request; nothing here retries.

mod auth;
mod request;
mod secrets;

pub use auth::universal_auth_login;
pub use secrets::list_raw_secrets;
