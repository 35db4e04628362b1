//! In-memory registry for tests.
//!
//! `InMemoryRegistry` maps paths to prepared descriptors and records every
//! path it is asked about, so callers can assert on probe order.
//!
//! # Example
//!
//! ```
//! use mxjdk::platform::{InMemoryRegistry, PlatformDescriptor, PlatformRegistry};
//! use std::path::Path;
//!
//! let registry = InMemoryRegistry::new()
//!     .with_platform(PlatformDescriptor::java_se(Path::new("/opt/jdk17"), "17"));
//!
//! assert!(registry.resolve_platform(Path::new("/opt/jdk17")).is_some());
//! assert!(registry.resolve_platform(Path::new("/opt/jdk8")).is_none());
//! assert_eq!(registry.probed().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::descriptor::PlatformDescriptor;
use super::registry::PlatformRegistry;

/// Registry backed by a fixed map of descriptors.
#[derive(Debug)]
pub struct InMemoryRegistry {
    platforms: HashMap<PathBuf, PlatformDescriptor>,
    default: PlatformDescriptor,
    probed: RefCell<Vec<PathBuf>>,
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRegistry {
    /// Create an empty registry whose default runtime is unspecified.
    pub fn new() -> Self {
        Self {
            platforms: HashMap::new(),
            default: PlatformDescriptor::unspecified("default", Path::new("")),
            probed: RefCell::new(Vec::new()),
        }
    }

    /// Register a descriptor under its home.
    pub fn with_platform(mut self, platform: PlatformDescriptor) -> Self {
        self.platforms.insert(platform.home.clone(), platform);
        self
    }

    /// Register a descriptor under an arbitrary path.
    pub fn with_platform_at(mut self, path: &Path, platform: PlatformDescriptor) -> Self {
        self.platforms.insert(path.to_path_buf(), platform);
        self
    }

    /// Set the descriptor returned by [`current_runtime`](PlatformRegistry::current_runtime).
    pub fn with_default(mut self, platform: PlatformDescriptor) -> Self {
        self.default = platform;
        self
    }

    /// Every path passed to `resolve_platform`, in call order.
    pub fn probed(&self) -> Vec<PathBuf> {
        self.probed.borrow().clone()
    }

    /// Forget recorded probes.
    pub fn clear_probes(&self) {
        self.probed.borrow_mut().clear();
    }
}

impl PlatformRegistry for InMemoryRegistry {
    fn resolve_platform(&self, home: &Path) -> Option<PlatformDescriptor> {
        self.probed.borrow_mut().push(home.to_path_buf());
        self.platforms.get(home).cloned()
    }

    fn current_runtime(&self) -> PlatformDescriptor {
        self.default.clone()
    }
}
