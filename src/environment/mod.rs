//! Host environment description.
//!
//! Everything the checks need to know about the host is captured once in a
//! [`HostEnvironment`] value. Checks read that value instead of querying the
//! process, so a hand-built environment makes every check deterministic in
//! tests.
//!
//! # Modules
//!
//! - [`detection`] - Filling a [`HostEnvironment`] from the running process

pub mod detection;

pub use detection::{detect_runtime, extract_version, read_userns_flag, USERNS_FLAG_PATH};

use std::path::PathBuf;

use crate::probe::path::{parse_system_path, PathStyle};

/// Name and detected version of the runtime under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// Runtime name, e.g. `node`.
    pub name: String,
    /// Raw version string, if one was pinned or detected.
    pub version: Option<String>,
    /// Why detection failed, when it did.
    pub detection_error: Option<String>,
}

impl RuntimeInfo {
    /// A runtime with a known version.
    pub fn with_version(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: Some(version.to_string()),
            detection_error: None,
        }
    }

    /// A runtime whose version could not be determined.
    pub fn undetected(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            version: None,
            detection_error: Some(reason.into()),
        }
    }

    /// Label for reports, e.g. `node 22.1.0` or `node (unknown)`.
    pub fn label(&self) -> String {
        match &self.version {
            Some(v) => format!("{} {}", self.name, v),
            None => format!("{} (unknown)", self.name),
        }
    }
}

/// Snapshot of the host facts the checks depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Runtime under test.
    pub runtime: RuntimeInfo,
    /// Operating system name, e.g. `linux`, `macos`.
    pub os: String,
    /// Operating system family, e.g. `unix`, `windows`.
    pub family: String,
    /// Path separator conventions.
    pub path_style: PathStyle,
    /// Directories from PATH, in lookup order.
    pub path_entries: Vec<PathBuf>,
    /// Contents of the unprivileged user namespace kernel flag, if present.
    pub userns_clone: Option<String>,
}

impl HostEnvironment {
    /// Describe the running process, using `runtime` for the runtime fields.
    pub fn from_host(runtime: RuntimeInfo) -> Self {
        Self {
            runtime,
            os: std::env::consts::OS.to_string(),
            family: std::env::consts::FAMILY.to_string(),
            path_style: PathStyle::host(),
            path_entries: parse_system_path(),
            userns_clone: read_userns_flag(std::path::Path::new(USERNS_FLAG_PATH)),
        }
    }

    /// A fixed POSIX environment that touches nothing on the host.
    pub fn fixed(runtime: RuntimeInfo) -> Self {
        Self {
            runtime,
            os: "linux".to_string(),
            family: "unix".to_string(),
            path_style: PathStyle::Posix,
            path_entries: Vec::new(),
            userns_clone: None,
        }
    }
}
