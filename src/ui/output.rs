//! Output verbosity modes.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including check descriptions.
    Verbose,
    /// Show one line per check and the summary.
    #[default]
    Normal,
    /// Show failed checks and the summary only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows passing checks.
    pub fn shows_passes(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows extra detail such as headers.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
