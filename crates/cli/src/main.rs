//! Mistral CLI - validate the Mistral API credential from `.env` files.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install the tracing subscriber (filtered by `RUST_LOG`, written to stderr).
//! - Run the selected command and translate failures into exit codes.
//!
//! Invariants:
//! - Logs go to stderr so stdout stays machine-readable for `--output json`.
//! - The API key is never printed.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
