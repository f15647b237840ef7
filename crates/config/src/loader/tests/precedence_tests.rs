//! Tests for layer precedence.
//!
//! Invariants:
//! - `.env.local` overrides `.env` for keys both define.
//! - Non-blank process variables override both files.

use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

use super::{hermetic_loader, write_env};
use crate::constants::{DOTENV_DISABLED_VAR, MISTRAL_API_KEY_VAR};
use crate::loader::builder::EnvLoader;
use crate::loader::dotenv::FileState;
use crate::types::KeySource;

#[test]
fn test_base_file_only() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), ".env", "MISTRAL_API_KEY=abc\n");

    let config = hermetic_loader(temp_dir.path()).load().unwrap();

    assert_eq!(config.mistral_api_key().expose_secret(), "abc");
    assert_eq!(config.source(), KeySource::Dotenv);
}

#[test]
fn test_local_file_overrides_base_file() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), ".env", "MISTRAL_API_KEY=abc\n");
    write_env(temp_dir.path(), ".env.local", "MISTRAL_API_KEY=xyz\n");

    let config = hermetic_loader(temp_dir.path()).load().unwrap();

    assert_eq!(config.mistral_api_key().expose_secret(), "xyz");
    assert_eq!(config.source(), KeySource::DotenvLocal);
}

#[test]
fn test_local_file_only() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), ".env.local", "MISTRAL_API_KEY=local-only\n");

    let config = hermetic_loader(temp_dir.path()).load().unwrap();

    assert_eq!(config.mistral_api_key().expose_secret(), "local-only");
    assert_eq!(config.source(), KeySource::DotenvLocal);
    assert_eq!(config.files()[0].state, FileState::Missing);
    assert_eq!(config.files()[1].state, FileState::Loaded);
}

#[test]
fn test_local_file_without_key_falls_back_to_base() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), ".env", "MISTRAL_API_KEY=abc\n");
    write_env(temp_dir.path(), ".env.local", "OTHER_SETTING=1\n");

    let config = hermetic_loader(temp_dir.path()).load().unwrap();

    assert_eq!(config.mistral_api_key().expose_secret(), "abc");
    assert_eq!(config.source(), KeySource::Dotenv);
}

#[test]
fn test_files_are_reported_in_load_order() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), ".env", "MISTRAL_API_KEY=abc\n");

    let config = hermetic_loader(temp_dir.path()).load().unwrap();

    let files = config.files();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, temp_dir.path().join(".env"));
    assert_eq!(files[0].state, FileState::Loaded);
    assert_eq!(files[1].path, temp_dir.path().join(".env.local"));
    assert_eq!(files[1].state, FileState::Missing);
    assert_eq!(config.project_root(), temp_dir.path());
}

#[test]
#[serial]
fn test_process_env_overrides_files() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), ".env", "MISTRAL_API_KEY=abc\n");
    write_env(temp_dir.path(), ".env.local", "MISTRAL_API_KEY=xyz\n");

    temp_env::with_var(MISTRAL_API_KEY_VAR, Some("from-process"), || {
        let config = EnvLoader::new()
            .with_project_root(temp_dir.path())
            .with_dotenv(true)
            .load()
            .unwrap();

        assert_eq!(config.mistral_api_key().expose_secret(), "from-process");
        assert_eq!(config.source(), KeySource::ProcessEnv);
    });
}

#[test]
#[serial]
fn test_blank_process_env_falls_through_to_files() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), ".env", "MISTRAL_API_KEY=abc\n");

    temp_env::with_var(MISTRAL_API_KEY_VAR, Some("   "), || {
        let config = EnvLoader::new()
            .with_project_root(temp_dir.path())
            .with_dotenv(true)
            .load()
            .unwrap();

        assert_eq!(config.mistral_api_key().expose_secret(), "abc");
        assert_eq!(config.source(), KeySource::Dotenv);
    });
}

#[test]
#[serial]
fn test_process_env_satisfies_key_without_files() {
    let temp_dir = TempDir::new().unwrap();

    temp_env::with_vars(
        [
            (MISTRAL_API_KEY_VAR, Some("from-process")),
            (DOTENV_DISABLED_VAR, None),
        ],
        || {
            let config = EnvLoader::new()
                .with_project_root(temp_dir.path())
                .load()
                .unwrap();

            assert_eq!(config.mistral_api_key().expose_secret(), "from-process");
        },
    );
}
