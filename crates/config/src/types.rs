//! Configuration types returned by the environment loader.
//!
//! Invariants:
//! - The API key is held in a `secrecy::SecretString` so it never shows up in
//!   `Debug` output or logs.
//! - A constructed `EnvConfig` always carries a non-blank key.

use secrecy::SecretString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::loader::{ConfigError, DotenvFileStatus, EnvLoader};

/// The layer that supplied the required variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Already set in the process environment.
    ProcessEnv,
    /// Defined in `.env.local`.
    DotenvLocal,
    /// Defined in `.env`.
    Dotenv,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KeySource::ProcessEnv => "environment",
            KeySource::DotenvLocal => ".env.local",
            KeySource::Dotenv => ".env",
        };
        f.write_str(label)
    }
}

/// Validated environment configuration.
///
/// Pass this by reference to collaborators that need the Mistral credential.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    mistral_api_key: SecretString,
    source: KeySource,
    project_root: PathBuf,
    files: Vec<DotenvFileStatus>,
}

impl EnvConfig {
    pub(crate) fn new(
        mistral_api_key: String,
        source: KeySource,
        project_root: PathBuf,
        files: Vec<DotenvFileStatus>,
    ) -> Self {
        Self {
            mistral_api_key: SecretString::new(mistral_api_key.into()),
            source,
            project_root,
            files,
        }
    }

    /// Load with default settings. Shorthand for `EnvLoader::new().load()`.
    pub fn load() -> Result<Self, ConfigError> {
        EnvLoader::new().load()
    }

    /// The validated `MISTRAL_API_KEY`.
    pub fn mistral_api_key(&self) -> &SecretString {
        &self.mistral_api_key
    }

    pub fn source(&self) -> KeySource {
        self.source
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Status of `.env` and `.env.local`, in load order.
    pub fn files(&self) -> &[DotenvFileStatus] {
        &self.files
    }
}
