//! Configuration file discovery and loading.
//!
//! A project may carry a `.envprobe.yml` at its root. When `--config` names a
//! file explicitly, that file must exist; an absent default file just means
//! "use the defaults".

use crate::config::schema::ProbeConfig;
use crate::config::validator::ensure_valid;
use crate::error::{ProbeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".envprobe.yml";

/// Default config location for a project root.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load a single config file and parse it into ProbeConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProbeConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProbeError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into ProbeConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProbeConfig> {
    if content.trim().is_empty() {
        return Ok(ProbeConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ProbeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the effective configuration for a run.
///
/// Uses `explicit` when given, otherwise `.envprobe.yml` in `project_root`
/// if it exists, otherwise the defaults. The result is validated.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ProbeConfig> {
    let config = match explicit {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => {
            let path = project_config_path(project_root);
            if path.is_file() {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            } else {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                ProbeConfig::default()
            }
        }
    };

    ensure_valid(&config)?;
    Ok(config)
}
