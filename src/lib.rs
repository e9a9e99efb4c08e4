//! envprobe - Environment capability probe.
//!
//! envprobe verifies that a runtime environment meets minimum requirements:
//! the runtime version, path handling, platform reporting, hashing, JSON
//! encoding, module availability, and optional host preflight checks. It then
//! reports a pass/fail summary.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, validation, and runtime profiles
//! - [`environment`] - Host environment description and detection
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Checks, the prober, and reports
//! - [`ui`] - Terminal output and report rendering
//!
//! # Example
//!
//! ```
//! use envprobe::config::ProbeConfig;
//! use envprobe::environment::{HostEnvironment, RuntimeInfo};
//! use envprobe::probe::ProbePlan;
//!
//! let env = HostEnvironment::fixed(RuntimeInfo::with_version("node", "22.1.0"));
//! let plan = ProbePlan::with_environment(&ProbeConfig::default(), env).unwrap();
//! let report = plan.run();
//! assert_eq!(report.summary_line(), "all checks passed");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod probe;
pub mod ui;

pub use error::{ProbeError, Result};
