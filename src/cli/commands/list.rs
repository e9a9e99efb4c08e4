//! List command implementation.
//!
//! The `envprobe list` command shows the checks a run would execute,
//! without executing any of them.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::environment::{HostEnvironment, RuntimeInfo};
use crate::error::Result;
use crate::probe::ProbePlan;
use crate::ui::{render_check_list, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::load_effective_config;

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_effective_config(&self.project_root, self.config_path.as_deref(), |c| {
            self.args.runtime.apply(c)
        })?;

        // Listing never runs the version command; only a pinned version is shown.
        let runtime = RuntimeInfo {
            name: config.runtime.name.clone(),
            version: config.runtime.version.clone(),
            detection_error: None,
        };
        let plan = ProbePlan::with_environment(&config, HostEnvironment::from_host(runtime))?;

        if ui.output_mode().shows_details() {
            ui.show_header(&format!("{} checks ({})", plan.checks.len(), plan.policy));
        }
        render_check_list(&plan.checks, ui);
        Ok(CommandResult::success())
    }
}
