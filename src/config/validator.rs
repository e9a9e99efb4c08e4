//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Runtime name must be non-empty and the minimum must parse
//! - `path_join` must hold exactly two segments
//! - Module and tool names must be non-empty and unique

use crate::config::schema::ProbeConfig;
use crate::error::{ProbeError, Result};
use crate::probe::Version;
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &ProbeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_runtime(config));
    errors.extend(validate_path_join(config));
    errors.extend(validate_names(
        "module",
        config.modules.iter().map(String::as_str),
    ));
    errors.extend(validate_names(
        "tool",
        config.tools.iter().map(|t| t.name.as_str()),
    ));

    errors
}

/// Validate and convert the error list into a single `ConfigValidationError`.
pub fn ensure_valid(config: &ProbeConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(ProbeError::ConfigValidationError { message })
}

fn validate_runtime(config: &ProbeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.runtime.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-runtime",
            "runtime.name must not be empty",
        ));
    }

    if let Some(min) = &config.runtime.minimum {
        if let Err(e) = Version::parse(min) {
            errors.push(ValidationError::new(
                "invalid-minimum",
                format!("runtime.minimum: {}", e),
            ));
        }
    }

    errors
}

fn validate_path_join(config: &ProbeConfig) -> Vec<ValidationError> {
    if config.path_join.len() == 2 {
        return Vec::new();
    }
    vec![ValidationError::new(
        "path-join-arity",
        format!(
            "path_join must have exactly 2 segments, got {}",
            config.path_join.len()
        ),
    )]
}

fn validate_names<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for name in names {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                &format!("empty-{}", kind),
                format!("{} names must not be empty", kind),
            ));
            continue;
        }
        if !seen.insert(name) {
            errors.push(ValidationError::new(
                &format!("duplicate-{}", kind),
                format!("{} '{}' is listed more than once", kind, name),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ToolRequirement;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ProbeConfig::default()).is_empty());
        assert!(ensure_valid(&ProbeConfig::default()).is_ok());
    }

    #[test]
    fn empty_runtime_name_is_rejected() {
        let mut config = ProbeConfig::default();
        config.runtime.name = " ".to_string();
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "empty-runtime");
    }

    #[test]
    fn unparsable_minimum_is_rejected() {
        let mut config = ProbeConfig::default();
        config.runtime.minimum = Some("lts".to_string());
        let errors = validate_config(&config);
        assert_eq!(errors[0].rule, "invalid-minimum");
    }

    #[test]
    fn path_join_needs_two_segments() {
        let mut config = ProbeConfig::default();
        config.path_join = vec!["/only".to_string()];
        let errors = validate_config(&config);
        assert_eq!(errors[0].rule, "path-join-arity");
    }

    #[test]
    fn duplicate_modules_and_tools_are_rejected() {
        let mut config = ProbeConfig::default();
        config.modules = vec!["net".to_string(), "net".to_string()];
        config.tools = vec![
            ToolRequirement {
                name: "bwrap".to_string(),
                hint: None,
            },
            ToolRequirement {
                name: "bwrap".to_string(),
                hint: None,
            },
        ];
        let rules: Vec<String> = validate_config(&config)
            .into_iter()
            .map(|e| e.rule)
            .collect();
        assert_eq!(rules, vec!["duplicate-module", "duplicate-tool"]);
    }

    #[test]
    fn ensure_valid_joins_all_messages() {
        let mut config = ProbeConfig::default();
        config.modules = vec![String::new()];
        config.path_join = Vec::new();
        let err = ensure_valid(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("path_join"));
        assert!(msg.contains("module names must not be empty"));
    }
}
