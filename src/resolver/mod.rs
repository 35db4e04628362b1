//! Runtime resolution.
//!
//! Walks the candidate set in order, turns each candidate into a platform
//! descriptor and returns the first one satisfying the requested
//! compliance. When nothing matches, the registry's current runtime is
//! returned instead; resolution never fails.

use serde::Serialize;
use std::path::Path;

use crate::compliance::{satisfies, Compliance};
use crate::config::{Settings, DEFAULT_RUNTIME_LEAF};
use crate::discovery::{Candidate, CandidateCollector, Project};
use crate::platform::{PlatformDescriptor, PlatformRegistry, ReleaseFileRegistry};

/// Outcome of a search for a runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The selected runtime.
    pub platform: PlatformDescriptor,
    /// The candidate that matched, or `None` when the default was used.
    pub candidate: Option<Candidate>,
    /// The compliance that was requested, in canonical form.
    pub requested: String,
}

impl Resolution {
    /// Whether no candidate matched and the default runtime was returned.
    pub fn is_fallback(&self) -> bool {
        self.candidate.is_none()
    }
}

/// One candidate and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Probe {
    /// The candidate that was probed.
    pub candidate: Candidate,
    /// Valid descriptor for the candidate, if any.
    pub platform: Option<PlatformDescriptor>,
    /// Whether the descriptor came from the candidate's parent directory.
    pub via_parent: bool,
}

/// Finds the runtime to use for a project.
///
/// # Example
///
/// ```
/// use mxjdk::compliance::Compliance;
/// use mxjdk::discovery::{CandidateCollector, Project};
/// use mxjdk::platform::{InMemoryRegistry, PlatformDescriptor};
/// use mxjdk::resolver::Resolver;
/// use std::path::{Path, PathBuf};
///
/// let registry = InMemoryRegistry::new()
///     .with_platform(PlatformDescriptor::java_se(Path::new("/opt/jdk17"), "17.0.2"));
/// let collector = CandidateCollector::new(None, Some(PathBuf::from("/opt/jdk17")), |_: &str| {
///     Err(std::env::VarError::NotPresent)
/// });
///
/// let resolver = Resolver::new(collector, registry);
/// let jdk = resolver.find(&Project::new("/work/graal"), &Compliance::parse("17").unwrap());
/// assert_eq!(jdk.home, PathBuf::from("/opt/jdk17"));
/// ```
pub struct Resolver<R> {
    collector: CandidateCollector,
    registry: R,
    runtime_leaf: String,
}

impl Resolver<ReleaseFileRegistry> {
    /// Create a resolver over the real environment and `release` files.
    pub fn from_settings(settings: &Settings) -> Self {
        let collector = CandidateCollector::from_env(settings);
        let host = collector.host_home().map(Path::to_path_buf);
        Self::new(collector, ReleaseFileRegistry::new(host))
            .with_runtime_leaf(&settings.runtime_leaf)
    }
}

impl<R: PlatformRegistry> Resolver<R> {
    /// Create a resolver from a collector and a registry.
    pub fn new(collector: CandidateCollector, registry: R) -> Self {
        Self {
            collector,
            registry,
            runtime_leaf: DEFAULT_RUNTIME_LEAF.to_string(),
        }
    }

    /// Set the leaf directory name that triggers a retry against the parent.
    pub fn with_runtime_leaf(mut self, leaf: &str) -> Self {
        self.runtime_leaf = leaf.to_string();
        self
    }

    /// The registry used to identify runtimes.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// The candidate collector.
    pub fn collector(&self) -> &CandidateCollector {
        &self.collector
    }

    /// Resolve a single candidate path to a valid descriptor.
    ///
    /// A `.../jre` path that does not resolve is retried against its
    /// parent; the returned flag tells whether that happened. Descriptors
    /// lacking a specification or version are rejected.
    pub fn resolve_candidate(&self, path: &Path) -> Option<(PlatformDescriptor, bool)> {
        let (platform, via_parent) = match self.registry.resolve_platform(path) {
            Some(platform) => (platform, false),
            None if self.is_runtime_image(path) => {
                let parent = path.parent().filter(|p| !p.as_os_str().is_empty())?;
                tracing::debug!(
                    "Retrying {} as JDK home for {}",
                    parent.display(),
                    path.display()
                );
                match self.registry.resolve_platform(parent) {
                    Some(platform) => (platform, true),
                    None => {
                        tracing::debug!("Skipping unresolvable candidate {}", path.display());
                        return None;
                    }
                }
            }
            None => {
                tracing::debug!("Skipping unresolvable candidate {}", path.display());
                return None;
            }
        };

        if !platform.is_valid() {
            tracing::debug!(
                "Skipping {}: no specification or version",
                platform.home.display()
            );
            return None;
        }

        Some((platform, via_parent))
    }

    fn is_runtime_image(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name == self.runtime_leaf.as_str())
    }

    /// Find the first runtime satisfying `requested`, or the default runtime.
    pub fn find(&self, project: &Project, requested: &Compliance) -> PlatformDescriptor {
        self.resolve(project, requested).platform
    }

    /// Like [`find`](Self::find), but also reports which candidate matched.
    pub fn resolve(&self, project: &Project, requested: &Compliance) -> Resolution {
        for candidate in self.collector.collect(project) {
            let Some((platform, _)) = self.resolve_candidate(&candidate.path) else {
                continue;
            };
            let version = platform.version().unwrap_or_default();
            if satisfies(requested, version) {
                tracing::debug!(
                    "{} ({}) satisfies {}",
                    platform.home.display(),
                    version,
                    requested
                );
                return Resolution {
                    platform,
                    candidate: Some(candidate),
                    requested: requested.to_string(),
                };
            }
            tracing::debug!(
                "{} ({}) does not satisfy {}",
                platform.home.display(),
                version,
                requested
            );
        }

        tracing::debug!("No candidate satisfies {}; using default runtime", requested);
        Resolution {
            platform: self.registry.current_runtime(),
            candidate: None,
            requested: requested.to_string(),
        }
    }

    /// Resolve every candidate without stopping at a match.
    pub fn probe(&self, project: &Project) -> Vec<Probe> {
        self.collector
            .collect(project)
            .into_iter()
            .map(|candidate| {
                let resolved = self.resolve_candidate(&candidate.path);
                Probe {
                    candidate,
                    via_parent: resolved.as_ref().is_some_and(|(_, via)| *via),
                    platform: resolved.map(|(platform, _)| platform),
                }
            })
            .collect()
    }
}
