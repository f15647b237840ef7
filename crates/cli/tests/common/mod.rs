//! Shared test utilities for mistral-cli integration tests.
//!
//! Invariants / Assumptions:
//! - Commands are hermetic: the host's MISTRAL_API_KEY, DOTENV_DISABLED and
//!   MISTRAL_PROJECT_ROOT never reach the child process.
//! - The project root is always an explicit temp directory.

use assert_cmd::Command;
use std::path::Path;

/// Returns a hermetic `mistral-cli` command rooted at `root`.
pub fn mistral_cmd(root: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mistral-cli");

    cmd.env_remove("MISTRAL_API_KEY")
        .env_remove("DOTENV_DISABLED")
        .env_remove("MISTRAL_PROJECT_ROOT")
        .env_remove("RUST_LOG");

    cmd.arg("--root").arg(root);
    cmd
}
