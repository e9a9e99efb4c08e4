//! Capability probing.
//!
//! The [`Prober`] runs an ordered [`CheckList`] and turns every outcome into
//! a [`CheckResult`]. A failing check never aborts the process: its error is
//! recorded as the result's detail. Whether the remaining checks still run
//! is decided by the [`RunPolicy`].
//!
//! # Modules
//!
//! - [`check`] - Check definitions and ordered lists
//! - [`checks`] - The built-in check catalogue
//! - [`capability`] - Compiled-in capability registry
//! - [`path`] - Path joining and PATH lookups
//! - [`plan`] - Building a runnable probe from configuration
//! - [`result`] - Results, failures and the aggregated report
//! - [`version`] - Version parsing and comparison
//!
//! # Example
//!
//! ```
//! use envprobe::probe::{Check, CheckList, Prober, RunPolicy};
//!
//! let mut list = CheckList::new();
//! list.push(Check::new("answer", "returns a detail", || Ok(Some("42".into())))).unwrap();
//! list.push(Check::new("broken", "always fails", || anyhow::bail!("nope"))).unwrap();
//!
//! let report = Prober::new(RunPolicy::AggregateAll).run("demo", &list);
//! assert_eq!(report.results.len(), 2);
//! assert_eq!(report.summary_line(), "1 of 2 checks failed: broken");
//! ```

pub mod capability;
pub mod check;
pub mod checks;
pub mod path;
pub mod plan;
pub mod result;
pub mod version;

pub use check::{Check, CheckList, CheckOutcome};
pub use path::PathStyle;
pub use plan::ProbePlan;
pub use result::{CheckFailure, CheckResult, ProbeReport};
pub use version::{Version, VersionParseError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do after a check fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunPolicy {
    /// Run every check and report all failures.
    #[default]
    AggregateAll,
    /// Stop after the first failed check.
    FailFast,
}

impl RunPolicy {
    /// Config/CLI spelling of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPolicy::AggregateAll => "aggregate-all",
            RunPolicy::FailFast => "fail-fast",
        }
    }
}

impl fmt::Display for RunPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sequences checks and aggregates their results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prober {
    policy: RunPolicy,
}

impl Prober {
    /// Create a prober with the given policy.
    pub fn new(policy: RunPolicy) -> Self {
        Self { policy }
    }

    /// Run `checks` in declaration order.
    ///
    /// `runtime` is a label carried into the report.
    pub fn run(&self, runtime: &str, checks: &CheckList) -> ProbeReport {
        let mut results = Vec::with_capacity(checks.len());

        for check in checks {
            tracing::debug!("Running check '{}'", check.name());
            let result = match check.run() {
                Ok(detail) => CheckResult::pass(check.name(), detail),
                Err(e) => {
                    let reason = format!("{:#}", e);
                    tracing::debug!("Check '{}' failed: {}", check.name(), reason);
                    CheckResult::fail(check.name(), reason)
                }
            };

            let failed = !result.passed;
            results.push(result);

            if failed && self.policy == RunPolicy::FailFast {
                tracing::debug!(
                    "Stopping after '{}' ({} of {} checks run)",
                    check.name(),
                    results.len(),
                    checks.len()
                );
                break;
            }
        }

        ProbeReport {
            runtime: runtime.to_string(),
            policy: self.policy,
            declared: checks.len(),
            results,
        }
    }
}
