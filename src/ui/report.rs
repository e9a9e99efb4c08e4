//! Rendering probe reports.

use serde::Serialize;

use crate::error::Result;
use crate::probe::{CheckList, CheckResult, ProbeReport};

use super::UserInterface;

/// Output format for `envprobe check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per check plus a summary line.
    #[default]
    Human,
    /// A single pretty-printed JSON document.
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ProbeReport,
    passed: bool,
}

fn check_line(result: &CheckResult) -> String {
    match &result.detail {
        Some(detail) => format!("{}: {}", result.name, detail),
        None => result.name.clone(),
    }
}

/// Render a report through the UI.
pub fn render_report(
    report: &ProbeReport,
    format: ReportFormat,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    match format {
        ReportFormat::Human => {
            render_human(report, ui);
            Ok(())
        }
        ReportFormat::Json => {
            let doc = JsonReport {
                report,
                passed: report.all_passed(),
            };
            let text = serde_json::to_string_pretty(&doc).map_err(anyhow::Error::from)?;
            ui.message(&text);
            Ok(())
        }
    }
}

fn render_human(report: &ProbeReport, ui: &mut dyn UserInterface) {
    let mode = ui.output_mode();

    if mode.shows_details() {
        ui.show_header(&format!("envprobe: {} ({})", report.runtime, report.policy));
    }

    for result in &report.results {
        if result.passed {
            if mode.shows_passes() {
                ui.success(&check_line(result));
            }
        } else {
            ui.failure(&check_line(result));
        }
    }

    if mode.shows_details() && report.halted_early() {
        ui.message(&format!(
            "skipped {} remaining checks",
            report.declared - report.results.len()
        ));
    }

    ui.message(&report.summary_line());
}

/// List checks with their descriptions, in declaration order.
pub fn render_check_list(checks: &CheckList, ui: &mut dyn UserInterface) {
    let width = checks.iter().map(|c| c.name().len()).max().unwrap_or(0);
    for check in checks {
        ui.message(&format!(
            "{:<width$}  {}",
            check.name(),
            check.description(),
            width = width
        ));
    }
}
