//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test builder methods and defaults.
//! - Test environment variable fallbacks and precedence.
//! - Test `.env` loading, including error hygiene.
//! - Test base URL validation.
//!
//! Invariants:
//! - Resolution tests use `MemoryEnv` and never touch the process environment.
//! - Tests that change the working directory hold `env_lock()` and run `#[serial]`.

use std::sync::Mutex;


/// Returns the global test lock for process-state isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
