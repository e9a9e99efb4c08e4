//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`report`] for rendering a probe report through any UI
//!
//! # Example
//!
//! ```
//! use envprobe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("sha256: 9f2a…");
//! ui.message("all checks passed");
//! assert_eq!(ui.lines(), ["✓ sha256: 9f2a…", "all checks passed"]);
//! ```

pub mod mock;
pub mod output;
pub mod report;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use report::{render_check_list, render_report, ReportFormat};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ProbeTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests. Check lines and the summary
/// go to stdout; errors go to stderr.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a passing check line.
    fn success(&mut self, msg: &str);

    /// Display a failed check line.
    fn failure(&mut self, msg: &str);

    /// Display an error that stopped the run.
    fn error(&mut self, msg: &str);

    /// Show a header line.
    fn show_header(&mut self, title: &str);
}
