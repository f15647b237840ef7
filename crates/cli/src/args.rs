//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Build an `EnvLoader` from the global options.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use mistral_config::EnvLoader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mistral-cli")]
#[command(about = "Load .env files and validate the Mistral API credential", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  mistral-cli check\n  mistral-cli --root /srv/app check --output json\n  mistral-cli paths\n"
)]
pub struct Cli {
    /// Project root containing `.env` and `.env.local` (defaults to the workspace root).
    #[arg(long, global = true, env = "MISTRAL_PROJECT_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dotenv files and validate MISTRAL_API_KEY
    Check,

    /// Show the project root and whether each dotenv file exists
    Paths,
}

impl Cli {
    /// Loader configured from the global options.
    ///
    /// Blank `--root` values are ignored so the default root applies.
    pub fn loader(&self) -> EnvLoader {
        let loader = EnvLoader::new();
        match &self.root {
            Some(root) if !root.as_os_str().to_string_lossy().trim().is_empty() => {
                loader.with_project_root(root.clone())
            }
            _ => loader,
        }
    }
}
