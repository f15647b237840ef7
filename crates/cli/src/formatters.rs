//! Output formatting for command reports.
//!
//! Secrets never reach this module; reports carry a masked key only.

use anyhow::Result;
use std::fmt::Write;

use crate::commands::check::CheckReport;
use crate::commands::paths::PathsReport;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

pub fn format_check(report: &CheckReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let mut out = String::new();
            writeln!(out, "{:<14} {}", "Variable", report.variable)?;
            writeln!(out, "{:<14} {}", "Value", report.value)?;
            writeln!(out, "{:<14} {}", "Source", report.source)?;
            writeln!(out, "{:<14} {}", "Project root", report.project_root.display())?;
            for file in &report.files {
                writeln!(out, "{:<14} {} ({})", "File", file.path.display(), file.state)?;
            }
            Ok(out)
        }
    }
}

pub fn format_paths(report: &PathsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let mut out = String::new();
            writeln!(out, "{:<14} {}", "Project root", report.project_root.display())?;
            for file in &report.files {
                writeln!(out, "{:<14} {} ({})", "File", file.path.display(), file.state)?;
            }
            Ok(out)
        }
    }
}
