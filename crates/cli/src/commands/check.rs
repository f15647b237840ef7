//! Check command: load the dotenv files and validate the credential.
//!
//! Does NOT print the key. The report carries `****` in its place.

use anyhow::Result;
use mistral_config::EnvLoader;
use mistral_config::constants::MISTRAL_API_KEY_VAR;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use super::FileReport;
use crate::formatters::{OutputFormat, format_check};

/// Redacted result of a successful load.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub variable: String,
    pub value: String,
    pub source: String,
    pub project_root: PathBuf,
    pub files: Vec<FileReport>,
}

/// Run the check command.
///
/// Configuration errors are returned unwrapped so `main` can map them to an exit code.
pub fn run(loader: &EnvLoader, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let config = loader.load()?;
    info!(source = %config.source(), "Credential found");

    let report = CheckReport {
        variable: MISTRAL_API_KEY_VAR.to_string(),
        value: "****".to_string(),
        source: config.source().to_string(),
        project_root: config.project_root().to_path_buf(),
        files: config.files().iter().map(FileReport::from).collect(),
    };

    print!("{}", format_check(&report, format)?);
    Ok(())
}
