//! Environment loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` that resolves the project root,
//!   reads `.env` and `.env.local`, and validates `MISTRAL_API_KEY`.
//! - Build the final `EnvConfig` from the merged layers.
//!
//! Does NOT handle:
//! - Parsing individual dotenv files (delegated to dotenv.rs).
//! - Process environment filtering rules (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Precedence is process environment > `.env.local` > `.env`.
//! - A blank process variable falls through to the files; a blank file value
//!   still counts as that file's definition and then fails validation.
//! - Accepted values are returned exactly as written, surrounding whitespace included.
//! - `DOTENV_DISABLED` is only consulted when `with_dotenv` was not called.
//! - The process environment is read, never written.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::dotenv::{DotenvFileStatus, FileState, read_dotenv_file};
use super::env::{dotenv_disabled, env_var_present, present};
use super::error::ConfigError;
use super::root::default_project_root;
use crate::constants::{DOTENV_FILE, DOTENV_LOCAL_FILE, MISTRAL_API_KEY_VAR};
use crate::types::{EnvConfig, KeySource};

/// Dotenv files in load order. Later entries take precedence.
const DOTENV_LAYERS: [(&str, KeySource); 2] = [
    (DOTENV_FILE, KeySource::Dotenv),
    (DOTENV_LOCAL_FILE, KeySource::DotenvLocal),
];

/// Variables read from one dotenv file.
struct Layer {
    source: KeySource,
    vars: HashMap<String, String>,
}

/// Loader that builds an `EnvConfig` from dotenv files and the process environment.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    project_root: Option<PathBuf>,
    dotenv: Option<bool>,
    process_env: bool,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader {
    /// Create a loader rooted two levels above the loader crate.
    pub fn new() -> Self {
        Self {
            project_root: None,
            dotenv: None,
            process_env: true,
        }
    }

    /// Override the project root (primarily for testing and the CLI `--root` flag).
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Force dotenv file loading on or off, ignoring `DOTENV_DISABLED`.
    pub fn with_dotenv(mut self, enabled: bool) -> Self {
        self.dotenv = Some(enabled);
        self
    }

    /// Whether the process environment is consulted before the files.
    pub fn with_process_env(mut self, enabled: bool) -> Self {
        self.process_env = enabled;
        self
    }

    /// Resolve the project root the dotenv files are read from.
    pub fn project_root(&self) -> Result<PathBuf, ConfigError> {
        match &self.project_root {
            Some(root) => Ok(root.clone()),
            None => default_project_root(),
        }
    }

    fn dotenv_enabled(&self) -> bool {
        self.dotenv.unwrap_or_else(|| !dotenv_disabled())
    }

    /// Report where the dotenv files live and whether they exist, without parsing them.
    pub fn inspect(&self) -> Result<Vec<DotenvFileStatus>, ConfigError> {
        let root = self.project_root()?;
        let enabled = self.dotenv_enabled();
        Ok(DOTENV_LAYERS
            .iter()
            .map(|(name, _)| {
                let path = root.join(name);
                let state = if !enabled {
                    FileState::Skipped
                } else if path.is_file() {
                    FileState::Found
                } else {
                    FileState::Missing
                };
                DotenvFileStatus { path, state }
            })
            .collect())
    }

    /// Load the dotenv files and validate `MISTRAL_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The project root cannot be derived (`ConfigError::ProjectRootUnavailable`)
    /// - A dotenv file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - A dotenv file exists but cannot be read (`ConfigError::DotenvIo`)
    /// - `MISTRAL_API_KEY` is unset, empty, or whitespace-only (`ConfigError::MissingEnvVar`)
    ///
    /// Missing dotenv files are silently ignored.
    pub fn load(&self) -> Result<EnvConfig, ConfigError> {
        let root = self.project_root()?;
        info!(root = %root.display(), "Validating environment variables");

        let (layers, files) = self.read_layers(&root)?;

        let Some((value, source)) = self.resolve(MISTRAL_API_KEY_VAR, &layers) else {
            warn!(
                var = MISTRAL_API_KEY_VAR,
                "Required environment variable is missing"
            );
            return Err(ConfigError::MissingEnvVar(MISTRAL_API_KEY_VAR.to_string()));
        };

        info!(var = MISTRAL_API_KEY_VAR, %source, "Environment variables validated successfully");
        Ok(EnvConfig::new(value, source, root, files))
    }

    fn read_layers(
        &self,
        root: &Path,
    ) -> Result<(Vec<Layer>, Vec<DotenvFileStatus>), ConfigError> {
        let enabled = self.dotenv_enabled();
        if !enabled {
            debug!("Dotenv loading disabled, skipping .env files");
        }

        let mut layers = Vec::with_capacity(DOTENV_LAYERS.len());
        let mut files = Vec::with_capacity(DOTENV_LAYERS.len());
        for (name, source) in DOTENV_LAYERS {
            let path = root.join(name);
            if !enabled {
                files.push(DotenvFileStatus {
                    path,
                    state: FileState::Skipped,
                });
                continue;
            }
            let state = match read_dotenv_file(&path)? {
                Some(vars) => {
                    layers.push(Layer { source, vars });
                    FileState::Loaded
                }
                None => FileState::Missing,
            };
            files.push(DotenvFileStatus { path, state });
        }
        Ok((layers, files))
    }

    /// Find the highest-precedence definition of `key` and reject blank values.
    fn resolve(&self, key: &str, layers: &[Layer]) -> Option<(String, KeySource)> {
        if self.process_env {
            if let Some(value) = env_var_present(key) {
                return Some((value, KeySource::ProcessEnv));
            }
        }

        let (value, source) = layers
            .iter()
            .rev()
            .find_map(|layer| layer.vars.get(key).map(|v| (v.clone(), layer.source)))?;
        present(value).map(|value| (value, source))
    }
}
