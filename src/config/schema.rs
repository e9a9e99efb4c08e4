//! Configuration schema definitions for envprobe.
//!
//! This module contains the struct definitions that map to the
//! `.envprobe.yml` file format. Every field has a default, so an empty file
//! (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::probe::RunPolicy;

/// Root configuration structure for `.envprobe.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Runtime under test
    pub runtime: RuntimeConfig,

    /// Whether to stop at the first failed check
    pub policy: RunPolicy,

    /// Segments joined by the path-join check
    pub path_join: Vec<String>,

    /// Capabilities checked for availability, in order
    pub modules: Vec<String>,

    /// Binaries that must be on PATH
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolRequirement>,

    /// Require unprivileged user namespaces to be enabled
    #[serde(skip_serializing_if = "is_false")]
    pub require_userns: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            policy: RunPolicy::default(),
            path_join: vec!["/workspace".to_string(), "hello.js".to_string()],
            modules: vec!["net".to_string()],
            tools: Vec::new(),
            require_userns: false,
        }
    }
}

/// Runtime selection and version requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Runtime name; `node`, `python` and `ruby` have built-in profiles
    pub name: String,

    /// Minimum version, e.g. `20` or `3.11` (profile default when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<String>,

    /// Command printing the runtime version (profile default when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Pinned version; skips detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: "node".to_string(),
            minimum: None,
            command: None,
            version: None,
        }
    }
}

/// A binary that must be resolvable on PATH.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolRequirement {
    /// Executable name
    pub name: String,

    /// Install instructions shown when the tool is missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !b
}
