//! Project root resolution.
//!
//! The project root is the directory two levels above the loader crate
//! (`crates/config` → workspace root). Both dotenv files are resolved
//! against it.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::PROJECT_ROOT_DEPTH;

/// Directory of the loader crate, fixed at compile time.
pub fn loader_location() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Project root derived from the loader crate's own location.
pub fn default_project_root() -> Result<PathBuf, ConfigError> {
    project_root_from(loader_location())
}

/// Walk [`PROJECT_ROOT_DEPTH`] directory levels up from `location`.
pub fn project_root_from(location: &Path) -> Result<PathBuf, ConfigError> {
    location
        .ancestors()
        .nth(PROJECT_ROOT_DEPTH)
        .filter(|root| !root.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| ConfigError::ProjectRootUnavailable {
            path: location.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_root_is_two_levels_up() {
        let root = project_root_from(Path::new("/srv/app/crates/config")).unwrap();
        assert_eq!(root, PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_default_project_root_contains_loader_crate() {
        let root = default_project_root().unwrap();
        assert!(loader_location().starts_with(&root));
        assert_eq!(
            loader_location().strip_prefix(&root).unwrap().components().count(),
            PROJECT_ROOT_DEPTH
        );
    }

    #[test]
    fn test_project_root_unavailable_for_shallow_path() {
        let err = project_root_from(Path::new("config")).unwrap_err();
        assert!(matches!(err, ConfigError::ProjectRootUnavailable { .. }));
        assert!(err.to_string().contains("config"));
    }
}
