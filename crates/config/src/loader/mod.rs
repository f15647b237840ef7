//! Environment loader for `.env` files and the process environment.
//!
//! Responsibilities:
//! - Resolve the project root two levels above the loader crate.
//! - Read `.env` then `.env.local`, later definitions taking precedence.
//! - Validate that `MISTRAL_API_KEY` is present and non-blank.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Mutating the process environment. Results are returned as `EnvConfig`.
//! - Any other variables than the required key.
//!
//! Invariants / Assumptions:
//! - Process environment values take precedence over both files.
//! - Missing dotenv files are never an error.

mod builder;
mod dotenv;
mod env;
mod error;
mod root;

pub use builder::EnvLoader;
pub use dotenv::{DotenvFileStatus, FileState};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use root::{default_project_root, project_root_from};

#[cfg(test)]
mod tests;
