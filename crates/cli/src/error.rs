//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use mistral_config::ConfigError;

/// Structured exit codes for mistral-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the credential was found.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The required variable is unset or blank in every layer.
    ///
    /// Scripts should add the key to `.env` / `.env.local` or the environment.
    MissingConfiguration = 2,

    /// A dotenv file exists but could not be read or parsed.
    ///
    /// Scripts should fix the file or set DOTENV_DISABLED=1.
    InvalidEnvFile = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingEnvVar(_) => ExitCode::MissingConfiguration,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown { .. } => ExitCode::InvalidEnvFile,
            ConfigError::ProjectRootUnavailable { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error is not a ConfigError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
