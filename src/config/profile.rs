//! Built-in runtime profiles.
//!
//! A profile supplies the minimum version and the version command for a
//! well-known runtime, so a config only has to name it.

use crate::config::schema::RuntimeConfig;
use crate::error::{ProbeError, Result};
use crate::probe::Version;

/// Defaults for a well-known runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeProfile {
    pub name: &'static str,
    pub minimum: &'static str,
    pub command: &'static str,
}

/// Known runtime profiles.
pub const RUNTIME_PROFILES: &[RuntimeProfile] = &[
    RuntimeProfile {
        name: "node",
        minimum: "20",
        command: "node --version",
    },
    RuntimeProfile {
        name: "python",
        minimum: "3.11",
        command: "python3 --version",
    },
    RuntimeProfile {
        name: "ruby",
        minimum: "3",
        command: "ruby --version",
    },
];

/// Look up a built-in profile by runtime name.
pub fn find_profile(name: &str) -> Option<&'static RuntimeProfile> {
    RUNTIME_PROFILES.iter().find(|p| p.name == name)
}

/// Runtime settings with profile defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRuntime {
    /// Runtime name.
    pub name: String,
    /// Parsed minimum version.
    pub minimum: Version,
    /// Command printing the version.
    pub command: String,
    /// Pinned version, if any.
    pub pinned: Option<String>,
}

/// Apply profile defaults to a runtime config.
///
/// # Errors
///
/// Returns `UnknownRuntime` when the runtime has neither a profile nor an
/// explicit minimum, and `ConfigValidationError` when the minimum does not
/// parse.
pub fn resolve_runtime(config: &RuntimeConfig) -> Result<ResolvedRuntime> {
    let profile = find_profile(&config.name);

    let minimum_text = match (&config.minimum, profile) {
        (Some(min), _) => min.as_str(),
        (None, Some(p)) => p.minimum,
        (None, None) => {
            return Err(ProbeError::UnknownRuntime {
                name: config.name.clone(),
            })
        }
    };
    let minimum =
        Version::parse(minimum_text).map_err(|e| ProbeError::ConfigValidationError {
            message: format!("runtime.minimum: {}", e),
        })?;

    let command = config
        .command
        .clone()
        .or_else(|| profile.map(|p| p.command.to_string()))
        .unwrap_or_else(|| format!("{} --version", config.name));

    Ok(ResolvedRuntime {
        name: config.name.clone(),
        minimum,
        command,
        pinned: config.version.clone(),
    })
}
