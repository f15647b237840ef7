//! Dotenv file reading.
//!
//! Responsibilities:
//! - Parse one `.env`-style file into a key/value map using `dotenvy`.
//! - Translate dotenvy errors into `ConfigError` without leaking file contents.
//!
//! Does NOT handle:
//! - Precedence between files (see builder.rs).
//! - The `DOTENV_DISABLED` gate (see env.rs).
//!
//! Invariants:
//! - A missing file is reported as `Ok(None)`, never as an error.
//! - Files are parsed with `from_path_iter`, so the process environment is
//!   never modified.
//! - Within one file, a later definition of a key replaces an earlier one.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::ConfigError;

/// What happened to one dotenv file during a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    /// File was found and parsed.
    Loaded,
    /// File exists but was not parsed (`EnvLoader::inspect`).
    Found,
    /// File does not exist.
    Missing,
    /// File loading was disabled (`DOTENV_DISABLED` or `with_dotenv(false)`).
    Skipped,
}

impl fmt::Display for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileState::Loaded => "loaded",
            FileState::Found => "found",
            FileState::Missing => "missing",
            FileState::Skipped => "skipped",
        };
        f.write_str(label)
    }
}

/// Path and outcome for one dotenv file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvFileStatus {
    pub path: PathBuf,
    pub state: FileState,
}

/// Read all assignments from a dotenv file.
///
/// Returns `Ok(None)` when the file does not exist.
pub(crate) fn read_dotenv_file(
    path: &Path,
) -> Result<Option<HashMap<String, String>>, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => {
            debug!(path = %path.display(), "Dotenv file not found, skipping");
            return Ok(None);
        }
        Err(e) => return Err(map_dotenv_error(path, e)),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| map_dotenv_error(path, e))?;
        vars.insert(key, value);
    }

    debug!(path = %path.display(), count = vars.len(), "Loaded dotenv file");
    Ok(Some(vars))
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// SAFETY: the line content carried by `LineParse` is dropped here.
fn map_dotenv_error(path: &Path, err: dotenvy::Error) -> ConfigError {
    let path = path.to_path_buf();
    match err {
        dotenvy::Error::LineParse(_, error_index) => ConfigError::DotenvParse { path, error_index },
        dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
            path,
            kind: io_err.kind(),
        },
        _ => ConfigError::DotenvUnknown { path },
    }
}
