//! mx suite project layout.

use std::path::{Path, PathBuf};

/// File name of `mx` env files.
pub const ENV_FILE: &str = "env";

/// An `mx` suite checkout.
///
/// A suite named `graal` lives in a directory named `graal` and keeps its
/// metadata in `graal/mx.graal/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Create a project rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the suite containing `start` by walking up its ancestors.
    ///
    /// Falls back to `start` itself when no ancestor has a
    /// `mx.<dirname>` directory.
    pub fn discover(start: &Path) -> Self {
        for dir in start.ancestors() {
            if Self::new(dir).suite_dir().is_dir() {
                return Self::new(dir);
            }
        }
        Self::new(start)
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Suite name: the root's base name.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Suite metadata directory, `<root>/mx.<name>`.
    pub fn suite_dir(&self) -> PathBuf {
        self.root.join(format!("mx.{}", self.name()))
    }

    /// Suite env file, `<root>/mx.<name>/env`.
    pub fn suite_env(&self) -> PathBuf {
        self.suite_dir().join(ENV_FILE)
    }
}
