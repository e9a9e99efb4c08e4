//! Visual theme and styling.

use console::Style;

/// envprobe's visual theme.
#[derive(Debug, Clone)]
pub struct ProbeTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for failed checks (red bold).
    pub error: Style,
    /// Style for headers (bold).
    pub header: Style,
}

impl Default for ProbeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a failure message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = ProbeTheme::plain();
        assert_eq!(theme.format_success("sha256"), "✓ sha256");
    }

    #[test]
    fn theme_formats_error() {
        let theme = ProbeTheme::plain();
        assert_eq!(theme.format_error("platform"), "✗ platform");
    }

    #[test]
    fn plain_header_is_unstyled() {
        assert_eq!(ProbeTheme::plain().format_header("envprobe"), "envprobe");
    }

    #[test]
    fn default_theme_creates_without_panic() {
        let theme = ProbeTheme::default();
        let _ = theme.format_success("test");
    }
}
