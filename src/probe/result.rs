//! Check result and report types.
//!
//! Each executed check produces a [`CheckResult`]. The prober collects them
//! into a [`ProbeReport`], which knows how to summarize itself.

use serde::Serialize;

use super::RunPolicy;

/// The outcome of running a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Check name, unique within a run.
    pub name: String,
    /// Whether the check's success condition held.
    pub passed: bool,
    /// Optional message: extra information on success, the reason on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckResult {
    /// Create a passing result.
    pub fn pass(name: &str, detail: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            detail,
        }
    }

    /// Create a failing result with the given reason.
    pub fn fail(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            detail: Some(reason.into()),
        }
    }

    /// The failure carried by this result, if it failed.
    pub fn failure(&self) -> Option<CheckFailure> {
        if self.passed {
            return None;
        }
        Some(CheckFailure {
            name: self.name.clone(),
            reason: self.detail.clone().unwrap_or_default(),
        })
    }
}

/// A check whose success condition was not met.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name}: {reason}")]
pub struct CheckFailure {
    /// Name of the failed check.
    pub name: String,
    /// Human-readable reason.
    pub reason: String,
}

/// Aggregated outcome of one probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Runtime label, e.g. `node 22.1.0`.
    pub runtime: String,
    /// Policy the run used.
    pub policy: RunPolicy,
    /// Number of checks in the list, executed or not.
    pub declared: usize,
    /// Results in declaration order.
    pub results: Vec<CheckResult>,
}

impl ProbeReport {
    /// Whether every declared check ran and passed.
    pub fn all_passed(&self) -> bool {
        self.results.len() == self.declared && self.results.iter().all(|r| r.passed)
    }

    /// Failures in declaration order.
    pub fn failures(&self) -> Vec<CheckFailure> {
        self.results.iter().filter_map(CheckResult::failure).collect()
    }

    /// Whether the run stopped before executing every declared check.
    pub fn halted_early(&self) -> bool {
        self.results.len() < self.declared
    }

    /// Final summary line for human output.
    pub fn summary_line(&self) -> String {
        if self.all_passed() {
            return "all checks passed".to_string();
        }

        let failed: Vec<String> = self.failures().into_iter().map(|f| f.name).collect();
        let mut line = format!(
            "{} of {} checks failed: {}",
            failed.len(),
            self.declared,
            failed.join(", ")
        );
        if self.halted_early() {
            line.push_str(" (stopped at first failure)");
        }
        line
    }
}
