//! Merging fetched secrets into an environment store.
//!
//! Invariants:
//! - Keys are only ever added or overwritten, never removed.
//! - With override disabled, a key already present keeps its value even
//!   when that value is empty.
//! - Names that are empty or contain `=` or NUL, and values that contain NUL,
//!   are never written; no process environment can hold them.

use infisical_client::SecretSet;
use infisical_config::EnvStore;
use tracing::warn;

/// Names touched by one merge. Values are never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Keys that were absent and have been added.
    pub added: Vec<String>,
    /// Keys that existed and were replaced.
    pub overwritten: Vec<String>,
    /// Keys that existed and were left untouched.
    pub kept: Vec<String>,
    /// Entries that cannot be stored in an environment and were skipped.
    pub rejected: Vec<String>,
}

impl MergeReport {
    /// Number of keys written to the store.
    pub fn written(&self) -> usize {
        self.added.len() + self.overwritten.len()
    }

    /// Total number of secrets considered.
    pub fn total(&self) -> usize {
        self.written() + self.kept.len() + self.rejected.len()
    }
}

/// Write `secrets` into `env`.
///
/// When `override_existing` is false, keys already present in `env` are kept.
pub fn merge_secrets<E: EnvStore + ?Sized>(
    secrets: &SecretSet,
    env: &mut E,
    override_existing: bool,
) -> MergeReport {
    let mut report = MergeReport::default();

    for (name, value) in secrets.iter() {
        if !is_storable(name, value) {
            warn!(
                name = %name.escape_debug(),
                "Skipping secret that cannot be stored in the environment"
            );
            report.rejected.push(name.to_string());
            continue;
        }
        let exists = env.contains(name);
        if exists && !override_existing {
            report.kept.push(name.to_string());
            continue;
        }
        env.set(name, value);
        if exists {
            report.overwritten.push(name.to_string());
        } else {
            report.added.push(name.to_string());
        }
    }

    report
}

fn is_storable(name: &str, value: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0']) && !value.contains('\0')
}
