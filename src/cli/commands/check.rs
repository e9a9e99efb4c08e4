//! Check command implementation.
//!
//! The `envprobe check` command runs every check and prints the report.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::probe::ProbePlan;
use crate::ui::{render_report, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::load_effective_config;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_effective_config(&self.project_root, self.config_path.as_deref(), |c| {
            self.args.apply(c)
        })?;

        let plan = ProbePlan::for_host(&config)?;
        let report = plan.run();
        render_report(&report, self.args.format, ui)?;

        if report.all_passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::RuntimeArgs;
    use crate::error::ProbeError;
    use crate::ui::{MockUI, ReportFormat};
    use std::fs;
    use tempfile::TempDir;

    fn pinned(version: &str) -> CheckArgs {
        CheckArgs {
            runtime: RuntimeArgs {
                runtime_version: Some(version.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn passing_run_exits_zero() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), None, pinned("22.1.0"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.successes().len(), 6);
        assert_eq!(ui.last_line(), Some("all checks passed"));
    }

    #[test]
    fn old_runtime_exits_one_and_runs_everything() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), None, pinned("18.19.0"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.failures(),
            ["runtime-version: need node 20+, got 18.19.0"]
        );
        assert_eq!(ui.successes().len(), 5);
    }

    #[test]
    fn fail_fast_stops_after_version() {
        let temp = TempDir::new().unwrap();
        let mut args = pinned("18.19.0");
        args.fail_fast = true;
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.successes().is_empty());
        assert_eq!(
            ui.last_line(),
            Some("1 of 6 checks failed: runtime-version (stopped at first failure)")
        );
    }

    #[test]
    fn config_file_tools_are_checked() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".envprobe.yml"),
            "tools:\n  - name: envprobe-no-such-tool\n    hint: install it\n",
        )
        .unwrap();
        let cmd = CheckCommand::new(temp.path(), None, pinned("22.1.0"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.failures()[0].starts_with("tool:envprobe-no-such-tool"));
    }

    #[test]
    fn json_format_prints_one_document() {
        let temp = TempDir::new().unwrap();
        let mut args = pinned("22.1.0");
        args.format = ReportFormat::Json;
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        assert_eq!(ui.lines().len(), 1);
        assert!(ui.lines()[0].contains("\"passed\": true"));
    }

    #[test]
    fn missing_explicit_config_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.yml");
        let cmd = CheckCommand::new(temp.path(), Some(&missing), pinned("22.1.0"));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, ProbeError::ConfigNotFound { .. }));
    }
}
