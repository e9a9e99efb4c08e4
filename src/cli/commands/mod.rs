//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations (`envprobe check`, `envprobe list`).

pub mod check;
pub mod dispatcher;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::config::{ensure_valid, load_config, ProbeConfig};
use crate::error::Result;

/// Load the config for a project, apply CLI overrides, and re-validate.
fn load_effective_config<F>(
    project_root: &Path,
    config_path: Option<&Path>,
    overrides: F,
) -> Result<ProbeConfig>
where
    F: FnOnce(&mut ProbeConfig),
{
    let mut config = load_config(project_root, config_path)?;
    overrides(&mut config);
    ensure_valid(&config)?;
    Ok(config)
}
