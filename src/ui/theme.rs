//! Visual theme and styling.

use console::Style;

/// mxjdk's visual theme.
#[derive(Debug, Clone)]
pub struct MxTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for MxTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MxTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.header.apply_to("☕"), self.highlight.apply_to(title))
    }
}

/// Check if colors should be enabled.
///
/// Styled output only ever goes to stderr, so that is the stream checked.
pub fn should_use_colors() -> bool {
    colors_enabled(std::env::var_os("NO_COLOR").is_some(), console::Term::stderr().is_term())
}

fn colors_enabled(no_color: bool, stderr_is_term: bool) -> bool {
    // NO_COLOR (https://no-color.org/) wins over terminal detection
    !no_color && stderr_is_term
}
