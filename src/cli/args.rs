//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ProbeConfig, RuntimeConfig};
use crate::error::{ProbeError, Result};
use crate::probe::RunPolicy;
use crate::ui::ReportFormat;

/// envprobe - Environment capability probe.
#[derive(Debug, Parser)]
#[command(name = "envprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .envprobe.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show only failures and the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Check options; with a subcommand they merge into its own options
    #[command(flatten)]
    pub check: CheckArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run all checks (default if no command specified)
    Check(CheckArgs),

    /// List checks in the order they would run
    List(ListArgs),
}

/// Runtime selection shared by `check` and `list`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RuntimeArgs {
    /// Runtime to probe (node, python, ruby, or any name with --minimum)
    #[arg(long, env = "ENVPROBE_RUNTIME", value_name = "NAME")]
    pub runtime: Option<String>,

    /// Use this version instead of running the runtime's version command
    #[arg(long, env = "ENVPROBE_RUNTIME_VERSION", value_name = "VERSION")]
    pub runtime_version: Option<String>,

    /// Minimum accepted runtime version (e.g. 20 or 3.11)
    #[arg(long, env = "ENVPROBE_MINIMUM", value_name = "VERSION")]
    pub minimum: Option<String>,
}

impl RuntimeArgs {
    /// Fill unset fields from `outer`; values set here win.
    pub fn or(&self, outer: &RuntimeArgs) -> RuntimeArgs {
        RuntimeArgs {
            runtime: self.runtime.clone().or_else(|| outer.runtime.clone()),
            runtime_version: self
                .runtime_version
                .clone()
                .or_else(|| outer.runtime_version.clone()),
            minimum: self.minimum.clone().or_else(|| outer.minimum.clone()),
        }
    }

    /// Apply these overrides on top of a loaded config.
    ///
    /// Switching to a different runtime discards the config's runtime
    /// settings so the new runtime's profile applies.
    pub fn apply(&self, config: &mut ProbeConfig) {
        if let Some(name) = &self.runtime {
            if *name != config.runtime.name {
                config.runtime = RuntimeConfig {
                    name: name.clone(),
                    ..Default::default()
                };
            }
        }
        if let Some(version) = &self.runtime_version {
            config.runtime.version = Some(version.clone());
        }
        if let Some(minimum) = &self.minimum {
            config.runtime.minimum = Some(minimum.clone());
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub runtime: RuntimeArgs,

    /// Stop at the first failed check
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,
}

impl CheckArgs {
    /// Combine subcommand options with those given before the subcommand.
    ///
    /// Options given after `check` take precedence.
    pub fn merged_with(&self, outer: &CheckArgs) -> CheckArgs {
        CheckArgs {
            runtime: self.runtime.or(&outer.runtime),
            fail_fast: self.fail_fast || outer.fail_fast,
            format: if self.format == ReportFormat::default() {
                outer.format
            } else {
                self.format
            },
        }
    }

    /// The runtime options, rejecting run options `command` does not take.
    pub fn runtime_only(&self, command: &str) -> Result<&RuntimeArgs> {
        let mut unused = Vec::new();
        if self.fail_fast {
            unused.push("--fail-fast");
        }
        if self.format != ReportFormat::default() {
            unused.push("--format");
        }
        if unused.is_empty() {
            Ok(&self.runtime)
        } else {
            Err(ProbeError::InvalidArguments {
                message: format!("{} cannot be used with `{}`", unused.join(", "), command),
            })
        }
    }

    /// Apply runtime and policy overrides on top of a loaded config.
    pub fn apply(&self, config: &mut ProbeConfig) {
        self.runtime.apply(config);
        if self.fail_fast {
            config.policy = RunPolicy::FailFast;
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub runtime: RuntimeArgs,
}
