//! Raw secret listing models.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// One record from `GET /api/v3/secrets/raw`.
///
/// Only the key and value are used; the remaining metadata is kept for
/// diagnostics and tolerated when absent.
#[derive(Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawSecret {
    pub secret_key: String,
    pub secret_value: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default, rename = "type")]
    pub secret_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl fmt::Debug for RawSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSecret")
            .field("secret_key", &self.secret_key)
            .field("secret_value", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("secret_type", &self.secret_type)
            .finish()
    }
}

/// Response body of `GET /api/v3/secrets/raw`.
#[derive(Debug, Deserialize)]
pub struct RawSecretsResponse {
    pub secrets: Vec<RawSecret>,
}

/// Flat name-to-value mapping produced by one fetch.
///
/// Names keep the position of their first occurrence; a later record with
/// the same name replaces the value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretSet {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SecretSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a secret. Returns true if an earlier value was replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&pos) => {
                self.entries[pos].1 = value;
                true
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<RawSecretsResponse> for SecretSet {
    fn from(resp: RawSecretsResponse) -> Self {
        resp.secrets
            .into_iter()
            .map(|s| (s.secret_key, s.secret_value))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SecretSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

impl fmt::Debug for SecretSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretSet")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
