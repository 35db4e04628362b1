//! Terminal UI.
//!
//! Results go to stdout so they can be captured
//! (`export JAVA_HOME=$(mxjdk find 17)`); messages, headers, warnings and
//! errors go to stderr.

use console::Term;
use std::io::Write;

use super::{should_use_colors, MxTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: MxTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            MxTheme::new()
        } else {
            MxTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn data(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", msg).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.err, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}\n", self.theme.format_header(title)).ok();
        }
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
