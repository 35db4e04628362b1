//! mxjdk - Locate a Java runtime matching a compliance level for mx suites.
//!
//! Candidate JDK homes are gathered from `~/.mx/env`, the suite's
//! `mx.<suite>/env`, `$JAVA_HOME` and the host runtime, in that order. The
//! first one whose version satisfies the requested compliance wins; if none
//! does, the host runtime is returned.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compliance`] - Compliance parsing and matching
//! - [`config`] - Env file parsing and user settings
//! - [`discovery`] - Candidate collection in precedence order
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Platform descriptors and registries
//! - [`resolver`] - First-match resolution with default fallback
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use mxjdk::compliance::Compliance;
//! use mxjdk::discovery::{CandidateCollector, Project};
//! use mxjdk::platform::{InMemoryRegistry, PlatformDescriptor};
//! use mxjdk::resolver::Resolver;
//! use std::path::{Path, PathBuf};
//!
//! let registry = InMemoryRegistry::new()
//!     .with_platform(PlatformDescriptor::java_se(Path::new("/opt/jdk11"), "11.0.2"))
//!     .with_default(PlatformDescriptor::java_se(Path::new("/opt/jdk21"), "21"));
//! let collector = CandidateCollector::new(None, None, |key: &str| match key {
//!     "JAVA_HOME" => Ok("/opt/jdk11".to_string()),
//!     _ => Err(std::env::VarError::NotPresent),
//! });
//! let resolver = Resolver::new(collector, registry);
//! let project = Project::new("/work/graal");
//!
//! let jdk = resolver.find(&project, &Compliance::parse("11").unwrap());
//! assert_eq!(jdk.home, PathBuf::from("/opt/jdk11"));
//!
//! // Nothing satisfies 8, so the default runtime comes back.
//! let jdk = resolver.find(&project, &Compliance::parse("1.8").unwrap());
//! assert_eq!(jdk.home, PathBuf::from("/opt/jdk21"));
//! ```

pub mod cli;
pub mod compliance;
pub mod config;
pub mod discovery;
pub mod error;
pub mod platform;
pub mod resolver;
pub mod ui;

pub use error::{JdkError, Result};
