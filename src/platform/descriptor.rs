//! Resolved runtime identity.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Specification name of Java SE runtimes.
pub const JAVA_SE_SPECIFICATION: &str = "j2se";

/// The resolved identity of a Java runtime.
///
/// A descriptor is only usable for matching when it carries both a
/// specification and a version; see [`is_valid`](Self::is_valid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformDescriptor {
    /// Display name, usually the home directory's leaf name.
    pub name: String,
    /// Installation root.
    pub home: PathBuf,
    /// Specification name (e.g. `j2se`).
    pub specification: Option<String>,
    /// Specification version as reported by the runtime (e.g. `17.0.2`).
    pub version: Option<String>,
    /// Vendor, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl PlatformDescriptor {
    /// Create a descriptor with no specification or version.
    pub fn unspecified(name: &str, home: &Path) -> Self {
        Self {
            name: name.to_string(),
            home: home.to_path_buf(),
            specification: None,
            version: None,
            vendor: None,
        }
    }

    /// Create a Java SE descriptor named after the home directory.
    ///
    /// # Example
    ///
    /// ```
    /// use mxjdk::platform::PlatformDescriptor;
    /// use std::path::Path;
    ///
    /// let jdk = PlatformDescriptor::java_se(Path::new("/opt/jdk-17"), "17.0.2");
    /// assert_eq!(jdk.name, "jdk-17");
    /// assert!(jdk.is_valid());
    /// ```
    pub fn java_se(home: &Path, version: &str) -> Self {
        Self {
            name: display_name(home),
            home: home.to_path_buf(),
            specification: Some(JAVA_SE_SPECIFICATION.to_string()),
            version: Some(version.to_string()),
            vendor: None,
        }
    }

    /// Set the vendor.
    pub fn with_vendor(mut self, vendor: &str) -> Self {
        self.vendor = Some(vendor.to_string());
        self
    }

    /// Whether the descriptor has both a specification and a version.
    pub fn is_valid(&self) -> bool {
        self.specification.is_some() && self.version.is_some()
    }

    /// Specification version, if known.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Leaf name of a home directory, or the whole path when it has none.
pub fn display_name(home: &Path) -> String {
    home.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| home.display().to_string())
}
