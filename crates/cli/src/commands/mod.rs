//! Command implementations.

pub mod check;
pub mod paths;

use mistral_config::DotenvFileStatus;
use serde::Serialize;
use std::path::PathBuf;

/// Serializable view of one dotenv file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub state: String,
}

impl From<&DotenvFileStatus> for FileReport {
    fn from(status: &DotenvFileStatus) -> Self {
        Self {
            path: status.path.clone(),
            state: status.state.to_string(),
        }
    }
}
