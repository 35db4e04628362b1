//! Java platform descriptors and the registries that produce them.
//!
//! - [`PlatformRegistry`] is the seam the resolver uses to identify runtimes
//! - [`ReleaseFileRegistry`] reads a JDK's `release` file
//! - [`InMemoryRegistry`] serves prepared descriptors for tests
//! - [`host`] locates the runtime a plain `java` would start

pub mod descriptor;
pub mod host;
pub mod memory;
pub mod registry;
pub mod release;

pub use descriptor::{PlatformDescriptor, JAVA_SE_SPECIFICATION};
pub use host::{detect_host_home, host_home};
pub use memory::InMemoryRegistry;
pub use registry::PlatformRegistry;
pub use release::ReleaseFileRegistry;
