//! Process environment access.
//!
//! Responsibilities:
//! - Read variables from the process environment with blank filtering.
//! - Evaluate the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Reading `.env` files (see dotenv.rs).
//! - Writing to the process environment. The loader never mutates it.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - `env_var_or_none` trims; `env_var_present` returns the value untouched.

use crate::constants::DOTENV_DISABLED_VAR;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

/// Trim a value, returning None if nothing is left.
pub(crate) fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        // No trimming needed, return original to avoid allocation
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// Keep a value as written unless it is empty or whitespace-only.
pub(crate) fn present(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Read an environment variable verbatim, returning None if unset or blank.
pub(crate) fn env_var_present(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(present)
}

/// Check if dotenv loading is disabled via environment variable.
///
/// Only `1` and `true` disable loading; any other value leaves it enabled.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}
