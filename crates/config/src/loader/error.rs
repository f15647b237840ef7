//! Error types for environment loading.
//!
//! Responsibilities:
//! - Define error variants for every way loading `.env` files or validating
//!   the required variable can fail.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during environment loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The required variable is unset, empty, or whitespace-only in every layer.
    #[error(
        "Missing required environment variable: {0}. Please check your .env and .env.local files."
    )]
    MissingEnvVar(String),

    #[error("Unable to determine project root from {path}")]
    ProjectRootUnavailable { path: PathBuf },

    /// Failed to parse a dotenv file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse {path} at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read a dotenv file due to an I/O error other than "not found".
    #[error("Failed to read {path}: {kind}")]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load {path}. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown { path: PathBuf },
}

impl ConfigError {
    /// Returns true if the error came from reading or parsing a dotenv file.
    pub fn is_dotenv_error(&self) -> bool {
        matches!(
            self,
            ConfigError::DotenvParse { .. }
                | ConfigError::DotenvIo { .. }
                | ConfigError::DotenvUnknown { .. }
        )
    }
}
