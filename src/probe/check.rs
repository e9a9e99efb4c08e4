//! Check definitions and ordered check lists.

use crate::error::{ProbeError, Result};

/// Outcome of a check body: an optional detail on success, any error on failure.
pub type CheckOutcome = anyhow::Result<Option<String>>;

/// A single named verification of one environment capability.
pub struct Check {
    name: String,
    description: String,
    run: Box<dyn Fn() -> CheckOutcome>,
}

impl Check {
    /// Create a check from a name, a one-line description and a body.
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, run: F) -> Self
    where
        F: Fn() -> CheckOutcome + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            run: Box::new(run),
        }
    }

    /// The check's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description shown by `envprobe list`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Execute the check body.
    pub fn run(&self) -> CheckOutcome {
        (self.run)()
    }
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Checks in declaration order, with unique names.
#[derive(Debug, Default)]
pub struct CheckList {
    checks: Vec<Check>,
}

impl CheckList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check, rejecting a name already in the list.
    pub fn push(&mut self, check: Check) -> Result<()> {
        if self.checks.iter().any(|c| c.name == check.name) {
            return Err(ProbeError::DuplicateCheck { name: check.name });
        }
        self.checks.push(check);
        Ok(())
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, check: Check) -> Result<Self> {
        self.push(check)?;
        Ok(self)
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Check> {
        self.checks.iter()
    }

    /// Check names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.checks.iter().map(Check::name).collect()
    }
}

impl<'a> IntoIterator for &'a CheckList {
    type Item = &'a Check;
    type IntoIter = std::slice::Iter<'a, Check>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
