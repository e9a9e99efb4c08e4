//! Turning a configuration into a runnable probe.

use crate::config::{resolve_runtime, ProbeConfig};
use crate::environment::{detect_runtime, HostEnvironment};
use crate::error::Result;

use super::checks::build_checks;
use super::{CheckList, ProbeReport, Prober, RunPolicy};

/// An environment, its check list and the policy to run them with.
#[derive(Debug)]
pub struct ProbePlan {
    /// Environment the checks were built against.
    pub environment: HostEnvironment,
    /// Checks in declaration order.
    pub checks: CheckList,
    /// Run policy.
    pub policy: RunPolicy,
}

impl ProbePlan {
    /// Detect the host environment and build the plan.
    ///
    /// Runs the runtime's version command unless a version is pinned.
    pub fn for_host(config: &ProbeConfig) -> Result<Self> {
        let runtime = resolve_runtime(&config.runtime)?;
        let info = detect_runtime(&runtime.name, &runtime.command, runtime.pinned.as_deref());
        let environment = HostEnvironment::from_host(info);
        Self::with_environment(config, environment)
    }

    /// Build the plan against a given environment; nothing on the host is read.
    pub fn with_environment(config: &ProbeConfig, environment: HostEnvironment) -> Result<Self> {
        let runtime = resolve_runtime(&config.runtime)?;
        let checks = build_checks(&environment, config, runtime.minimum)?;
        tracing::debug!(
            "Planned {} checks for {} (minimum {})",
            checks.len(),
            environment.runtime.label(),
            runtime.minimum
        );
        Ok(Self {
            environment,
            checks,
            policy: config.policy,
        })
    }

    /// Run every planned check under the plan's policy.
    pub fn run(&self) -> ProbeReport {
        Prober::new(self.policy).run(&self.environment.runtime.label(), &self.checks)
    }
}
