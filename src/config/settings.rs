//! User settings for mxjdk.
//!
//! Settings live next to the user's `mx` env file at `~/.mx/mxjdk.yml`.
//! Every field is optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{JdkError, Result};

/// File name of the settings file inside `~/.mx`.
pub const SETTINGS_FILE: &str = "mxjdk.yml";

/// Default executable looked up on `PATH` to locate the host runtime.
pub const DEFAULT_JAVA_COMMAND: &str = "java";

/// Default leaf directory name of a runtime image nested in a JDK.
pub const DEFAULT_RUNTIME_LEAF: &str = "jre";

/// Tool settings.
///
/// # Example
///
/// ```
/// use mxjdk::config::Settings;
///
/// let settings = Settings::parse("default_home: /opt/jdk17", "mxjdk.yml".as_ref()).unwrap();
/// assert_eq!(settings.default_home.unwrap().to_str(), Some("/opt/jdk17"));
/// assert_eq!(settings.java_command, "java");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Host runtime home; overrides `PATH` detection when set.
    pub default_home: Option<PathBuf>,

    /// Executable name used to find the host runtime on `PATH`.
    pub java_command: String,

    /// Leaf directory name that triggers a retry against the parent directory.
    pub runtime_leaf: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_home: None,
            java_command: DEFAULT_JAVA_COMMAND.to_string(),
            runtime_leaf: DEFAULT_RUNTIME_LEAF.to_string(),
        }
    }
}

impl Settings {
    /// Location of the user settings file, if the home directory is known.
    pub fn user_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".mx").join(SETTINGS_FILE))
    }

    /// Parse YAML settings content.
    ///
    /// `source_path` is only used for error reporting.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| JdkError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Load settings, returning defaults if the file does not exist.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if path.is_file() {
            tracing::debug!("Loading settings from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the user settings file, or defaults when there is none.
    pub fn load_user() -> Result<Self> {
        match Self::user_path() {
            Some(path) => Self::load_optional(&path),
            None => Ok(Self::default()),
        }
    }

    /// Override the host runtime home (e.g. from `--default-home`).
    pub fn with_default_home(mut self, home: Option<PathBuf>) -> Self {
        if home.is_some() {
            self.default_home = home;
        }
        self
    }
}
