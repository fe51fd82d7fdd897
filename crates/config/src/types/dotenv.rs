//! `.env` loading options.

use std::path::PathBuf;

/// Options for loading a `.env` file into the environment store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotenvOptions {
    /// Explicit file to load. When `None`, `.env` is searched for in the
    /// current directory and its ancestors.
    pub path: Option<PathBuf>,
    /// Replace keys that are already present in the environment.
    pub override_existing: bool,
}

impl DotenvOptions {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_override(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }
}

/// Whether, and how, to load a `.env` file before resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dotenv {
    Disabled,
    Load(DotenvOptions),
}

impl Default for Dotenv {
    fn default() -> Self {
        Self::Load(DotenvOptions::default())
    }
}

impl Dotenv {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}
