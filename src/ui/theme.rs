//! Visual theme and styling.

use console::Style;

use super::icons::StatusKind;

/// Console styles used by the bootstrap output.
#[derive(Debug, Clone)]
pub struct BootstrapTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for section titles and detail arrows (blue).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (blue bold).
    pub header: Style,
    /// Style for remediation hints (yellow).
    pub hint: Style,
}

impl Default for BootstrapTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            header: Style::new().bold().blue(),
            hint: Style::new().yellow(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("{} {}", StatusKind::Success.icon(), msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("{} {}", StatusKind::Warning.icon(), msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("{} {}", StatusKind::Failed.icon(), msg)))
    }

    /// Format a hint line.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {} {}", self.info.apply_to("→"), self.hint.apply_to(hint))
    }

    /// Format a header banner.
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
        let msg = BootstrapTheme::plain().format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = BootstrapTheme::plain().format_warning("Caution");
        assert_eq!(msg, "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let msg = BootstrapTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_hint_with_arrow() {
        let msg = BootstrapTheme::plain().format_hint("sudo apt install git");
        assert_eq!(msg, "  → sudo apt install git");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = BootstrapTheme::default();
        let new = BootstrapTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
