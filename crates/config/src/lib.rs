//! Environment loading for the Mistral API credential.
//!
//! This crate reads `.env` and `.env.local` from the project root, merges them
//! under the process environment, and validates that `MISTRAL_API_KEY` is set.

pub mod constants;
mod loader;
pub mod types;

use std::sync::OnceLock;

pub use loader::{
    ConfigError, DotenvFileStatus, EnvLoader, FileState, default_project_root, env_var_or_none,
    project_root_from,
};
pub use types::{EnvConfig, KeySource};

static SHARED: OnceLock<EnvConfig> = OnceLock::new();

/// Process-wide configuration, loaded on first use with default settings.
///
/// A failed load is returned to the caller and not cached, so a later call
/// retries. Once a load succeeds every call returns the same instance.
pub fn shared() -> Result<&'static EnvConfig, ConfigError> {
    if let Some(config) = SHARED.get() {
        return Ok(config);
    }
    let config = EnvLoader::new().load()?;
    Ok(SHARED.get_or_init(|| config))
}
