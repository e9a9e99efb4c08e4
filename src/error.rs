//! Error types for envprobe operations.
//!
//! This module defines [`ProbeError`], the error type used outside of check
//! bodies, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Check bodies return `anyhow::Result`; the prober turns every failure
//!   into a [`CheckResult`](crate::probe::CheckResult) and never propagates it
//! - Use `ProbeError` for configuration and setup problems that stop a run
//!   before any check executes
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envprobe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Runtime has no built-in profile and no minimum version was given.
    #[error("Unknown runtime '{name}': set runtime.minimum in the config or pass --minimum")]
    UnknownRuntime { name: String },

    /// Command-line flags that do not apply to the chosen command.
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Two checks in one list share a name.
    #[error("Duplicate check name: {name}")]
    DuplicateCheck { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Whether this error comes from user configuration rather than the host.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ProbeError::ConfigNotFound { .. }
                | ProbeError::ConfigParseError { .. }
                | ProbeError::ConfigValidationError { .. }
                | ProbeError::UnknownRuntime { .. }
                | ProbeError::InvalidArguments { .. }
                | ProbeError::DuplicateCheck { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = ProbeError::ConfigNotFound {
            path: PathBuf::from("/foo/.envprobe.yml"),
        };
        assert!(err.to_string().contains("/foo/.envprobe.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ProbeError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_runtime_displays_name_and_hint() {
        let err = ProbeError::UnknownRuntime {
            name: "deno".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("deno"));
        assert!(msg.contains("--minimum"));
    }

    #[test]
    fn duplicate_check_displays_name() {
        let err = ProbeError::DuplicateCheck {
            name: "module:net".into(),
        };
        assert!(err.to_string().contains("module:net"));
    }

    #[test]
    fn config_errors_are_classified() {
        assert!(ProbeError::ConfigValidationError {
            message: "x".into()
        }
        .is_config_error());
        assert!(ProbeError::DuplicateCheck { name: "x".into() }.is_config_error());
        assert!(ProbeError::InvalidArguments {
            message: "x".into()
        }
        .is_config_error());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ProbeError = io_err.into();
        assert!(matches!(err, ProbeError::Io(_)));
        assert!(!err.is_config_error());
    }

    #[test]
    fn anyhow_converts_to_other() {
        let err: ProbeError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ProbeError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
