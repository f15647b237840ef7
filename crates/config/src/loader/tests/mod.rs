//! Tests for the environment loader.
//!
//! Responsibilities:
//! - Test precedence between the process environment, `.env.local` and `.env`.
//! - Test dotenv parsing, error reporting and the `DOTENV_DISABLED` gate.
//! - Test validation of `MISTRAL_API_KEY`.
//!
//! Invariants:
//! - Tests that touch process-global state use `serial_test` and `temp_env`.
//! - All other tests use `hermetic_loader`, which ignores the process
//!   environment and forces dotenv loading on.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::Path;

use crate::loader::builder::EnvLoader;

pub mod precedence_tests;

/// Write a dotenv-style file into `dir`.
pub fn write_env(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("Failed to write env file");
}

/// Loader rooted at `dir` that only sees the files in it.
pub fn hermetic_loader(dir: &Path) -> EnvLoader {
    EnvLoader::new()
        .with_project_root(dir)
        .with_dotenv(true)
        .with_process_env(false)
}
