//! Platform registry trait.

use std::path::Path;

use super::descriptor::PlatformDescriptor;

/// Turns candidate directories into platform descriptors.
///
/// The resolver only talks to runtimes through this trait, so production
/// lookups ([`ReleaseFileRegistry`](super::ReleaseFileRegistry)) and test
/// fakes ([`InMemoryRegistry`](super::InMemoryRegistry)) are interchangeable.
pub trait PlatformRegistry {
    /// Resolve the runtime installed at `home`, if it is recognizable.
    fn resolve_platform(&self, home: &Path) -> Option<PlatformDescriptor>;

    /// The runtime to fall back on when nothing else matches.
    fn current_runtime(&self) -> PlatformDescriptor;
}

impl<R: PlatformRegistry + ?Sized> PlatformRegistry for &R {
    fn resolve_platform(&self, home: &Path) -> Option<PlatformDescriptor> {
        (**self).resolve_platform(home)
    }

    fn current_runtime(&self) -> PlatformDescriptor {
        (**self).current_runtime()
    }
}
