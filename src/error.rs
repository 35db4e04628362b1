//! Error types for mxjdk operations.
//!
//! This module defines [`JdkError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Discovery never fails: unreadable env files and unresolvable
//!   candidates are logged and skipped, so most paths never see a `JdkError`
//! - Use `JdkError` for caller-facing failures (bad compliance, bad settings)
//! - Use `anyhow::Error` (via `JdkError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mxjdk operations.
#[derive(Debug, Error)]
pub enum JdkError {
    /// A compliance string had no recognizable numeric version form.
    #[error("Invalid compliance '{value}': expected a version like 8, 1.8, 11+ or 11..17")]
    InvalidCompliance { value: String },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mxjdk operations.
pub type Result<T> = std::result::Result<T, JdkError>;
