//! Registry backed by the JDK `release` file.
//!
//! Every JDK image ships a `release` file at its root:
//!
//! ```text
//! IMPLEMENTOR="Eclipse Adoptium"
//! JAVA_VERSION="17.0.9"
//! JAVA_VERSION_DATE="2023-10-17"
//! ```
//!
//! For JDK 8 the file sits in the JDK root, not under `jre/`, which is
//! why the resolver retries `.../jre` candidates against their parent.

use std::path::{Path, PathBuf};

use crate::config::EnvFileParser;

use super::descriptor::{display_name, PlatformDescriptor, JAVA_SE_SPECIFICATION};
use super::registry::PlatformRegistry;

/// Name of the metadata file at a runtime's root.
pub const RELEASE_FILE: &str = "release";

/// Name of the fallback descriptor when the host runtime is unknown.
pub const DEFAULT_PLATFORM_NAME: &str = "default";

/// Resolves runtimes by reading their `release` file.
#[derive(Debug, Clone, Default)]
pub struct ReleaseFileRegistry {
    host_home: Option<PathBuf>,
}

impl ReleaseFileRegistry {
    /// Create a registry whose fallback runtime lives at `host_home`.
    pub fn new(host_home: Option<PathBuf>) -> Self {
        Self { host_home }
    }

    /// Home of the fallback runtime, if known.
    pub fn host_home(&self) -> Option<&Path> {
        self.host_home.as_deref()
    }
}

impl PlatformRegistry for ReleaseFileRegistry {
    fn resolve_platform(&self, home: &Path) -> Option<PlatformDescriptor> {
        let release = home.join(RELEASE_FILE);
        if !release.is_file() {
            return None;
        }

        let vars = match EnvFileParser::load(&release) {
            Ok(vars) => vars,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", release.display(), e);
                return None;
            }
        };

        let version = vars
            .get("JAVA_VERSION")
            .map(|v| v.trim())
            .filter(|v| !v.is_empty());

        Some(PlatformDescriptor {
            name: display_name(home),
            home: home.to_path_buf(),
            specification: Some(JAVA_SE_SPECIFICATION.to_string()),
            version: version.map(str::to_string),
            vendor: vars.get("IMPLEMENTOR").cloned().filter(|v| !v.is_empty()),
        })
    }

    fn current_runtime(&self) -> PlatformDescriptor {
        match &self.host_home {
            Some(home) => self
                .resolve_platform(home)
                .unwrap_or_else(|| PlatformDescriptor::unspecified(&display_name(home), home)),
            None => PlatformDescriptor::unspecified(DEFAULT_PLATFORM_NAME, Path::new("")),
        }
    }
}
