//! Centralized constants for the Mistral environment loader.
//!
//! Variable names and file names live here so the loader, the CLI and the
//! tests agree on a single spelling.

// =============================================================================
// Variables
// =============================================================================

/// The required credential. Loading fails when this is unset or blank.
pub const MISTRAL_API_KEY_VAR: &str = "MISTRAL_API_KEY";

/// Process variable that disables `.env` file loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Files
// =============================================================================

/// Base dotenv file, loaded first.
pub const DOTENV_FILE: &str = ".env";

/// Local override file, loaded second. Its definitions win over `.env`.
pub const DOTENV_LOCAL_FILE: &str = ".env.local";

/// Number of directory levels between the loader crate and the project root.
pub const PROJECT_ROOT_DEPTH: usize = 2;
