//! Key/value environment stores.
//!
//! Responsibilities:
//! - Define the `EnvStore` capability that configuration resolution reads from
//!   and secret merging writes to.
//! - Provide a store backed by the real process environment (`ProcessEnv`).
//! - Provide an in-memory store (`MemoryEnv`) for tests and child processes.
//!
//! Does NOT handle:
//! - Deciding which keys to write (see the bootstrap crate's merge step).
//! - Parsing `.env` files (see `loader::dotenv`).
//!
//! Invariants:
//! - No store exposes a removal operation; environment state only grows or
//!   has values replaced.

use std::collections::BTreeMap;

/// A mutable key/value environment.
pub trait EnvStore {
    /// Returns the value for `key`, or `None` if unset or not valid UTF-8.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str);

    /// Returns true if `key` is present, even with an empty value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<T: EnvStore + ?Sized> EnvStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}

/// The real process environment.
///
/// Writes go through [`std::env::set_var`]. Callers must ensure no other
/// thread reads or writes the environment while a write is in progress,
/// which in practice means bootstrapping before spawning worker threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: see the type-level docs; the caller owns the environment
        // exclusively for the duration of bootstrap.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }
}

/// An in-memory environment, ordered by key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Entries whose key or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries that are new or hold a different value than in `base`.
    pub fn changed_from<'a>(
        &'a self,
        base: &'a MemoryEnv,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.iter()
            .filter(move |(k, v)| base.vars.get(*k).map(String::as_str) != Some(*v))
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
