//! Candidate collection.
//!
//! Sources are consulted in a fixed order:
//! 1. `~/.mx/env` (`JAVA_HOME`, then `EXTRA_JAVA_HOMES`)
//! 2. `<project>/mx.<suite>/env` (same keys)
//! 3. The `JAVA_HOME` environment variable
//! 4. The host runtime home
//!
//! Explicit user and suite configuration always precedes environment
//! defaults.

use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::config::{EnvFileParser, Settings, JAVA_HOME_KEY};
use crate::platform::host_home;

use super::candidates::{CandidateSet, CandidateSource};
use super::project::{Project, ENV_FILE};

type EnvLookup = Box<dyn Fn(&str) -> Result<String, VarError> + Send + Sync>;

/// Builds the ordered candidate set for a project.
///
/// The user home, environment lookup and host home are injected so the
/// collector can be exercised without touching the real environment.
///
/// # Example
///
/// ```
/// use mxjdk::discovery::{CandidateCollector, CandidateSource, Project};
/// use std::path::PathBuf;
///
/// let collector = CandidateCollector::new(
///     None,
///     Some(PathBuf::from("/usr/lib/jvm/default")),
///     |key: &str| match key {
///         "JAVA_HOME" => Ok("/opt/jdk17".to_string()),
///         _ => Err(std::env::VarError::NotPresent),
///     },
/// );
///
/// let set = collector.collect(&Project::new("/nonexistent/graal"));
/// let sources: Vec<_> = set.iter().map(|c| c.source).collect();
/// assert_eq!(sources, vec![CandidateSource::JavaHomeVar, CandidateSource::HostRuntime]);
/// ```
pub struct CandidateCollector {
    user_home: Option<PathBuf>,
    host_home: Option<PathBuf>,
    env_fn: EnvLookup,
}

impl CandidateCollector {
    /// Create a collector from explicit inputs.
    pub fn new<F>(user_home: Option<PathBuf>, host_home: Option<PathBuf>, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError> + Send + Sync + 'static,
    {
        Self {
            user_home,
            host_home,
            env_fn: Box::new(env_fn),
        }
    }

    /// Create a collector wired to the real process environment.
    pub fn from_env(settings: &Settings) -> Self {
        Self::new(dirs::home_dir(), host_home(settings), |key: &str| {
            std::env::var(key)
        })
    }

    /// The user's `~/.mx/env`, if the home directory is known.
    pub fn user_env(&self) -> Option<PathBuf> {
        self.user_home
            .as_ref()
            .map(|home| home.join(".mx").join(ENV_FILE))
    }

    /// Host runtime home used as the last candidate.
    pub fn host_home(&self) -> Option<&Path> {
        self.host_home.as_deref()
    }

    /// Collect candidates for `project` in precedence order.
    pub fn collect(&self, project: &Project) -> CandidateSet {
        let mut set = CandidateSet::new();

        if let Some(user_env) = self.user_env() {
            set.extend(EnvFileParser::java_homes(&user_env), CandidateSource::UserEnv);
        }

        set.extend(
            EnvFileParser::java_homes(&project.suite_env()),
            CandidateSource::SuiteEnv,
        );

        if let Ok(java_home) = (self.env_fn)(JAVA_HOME_KEY) {
            if !java_home.is_empty() {
                set.extend([PathBuf::from(java_home)], CandidateSource::JavaHomeVar);
            }
        }

        if let Some(host) = &self.host_home {
            set.extend([host.clone()], CandidateSource::HostRuntime);
        }

        tracing::debug!(
            "Collected {} candidate(s) for {}",
            set.len(),
            project.root().display()
        );
        set
    }
}
