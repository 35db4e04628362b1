//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use mxjdk::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.data("/opt/jdk17");
//! ui.warning("No match");
//!
//! assert_eq!(ui.data_lines(), &["/opt/jdk17".to_string()]);
//! assert!(ui.has_warning("No match"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    data: Vec<String>,
    messages: Vec<String>,
    details: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Result lines written with `data`.
    pub fn data_lines(&self) -> &[String] {
        &self.data
    }

    /// Get all messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all details.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Check if any message contains the given text.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if any warning contains the given text.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if any error contains the given text.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn data(&mut self, text: &str) {
        self.data.push(text.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}
