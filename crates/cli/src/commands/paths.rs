//! Paths command: show where the dotenv files are looked up.

use anyhow::Result;
use mistral_config::EnvLoader;
use serde::Serialize;
use std::path::PathBuf;

use super::FileReport;
use crate::formatters::{OutputFormat, format_paths};

#[derive(Debug, Clone, Serialize)]
pub struct PathsReport {
    pub project_root: PathBuf,
    pub files: Vec<FileReport>,
}

/// Run the paths command. Missing files are reported, not treated as errors.
pub fn run(loader: &EnvLoader, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let report = PathsReport {
        project_root: loader.project_root()?,
        files: loader.inspect()?.iter().map(FileReport::from).collect(),
    };

    print!("{}", format_paths(&report, format)?);
    Ok(())
}
