//! Candidate runtime locations.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a candidate path came from, in search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// `~/.mx/env`.
    UserEnv,
    /// `<project>/mx.<suite>/env`.
    SuiteEnv,
    /// The `JAVA_HOME` environment variable.
    JavaHomeVar,
    /// The runtime a plain `java` invocation would start.
    HostRuntime,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserEnv => write!(f, "~/.mx/env"),
            Self::SuiteEnv => write!(f, "suite env"),
            Self::JavaHomeVar => write!(f, "$JAVA_HOME"),
            Self::HostRuntime => write!(f, "host runtime"),
        }
    }
}

/// A path suspected of being a Java installation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Candidate installation root.
    pub path: PathBuf,
    /// Source that first produced this path.
    pub source: CandidateSource,
}

/// Insertion-ordered set of candidates, unique by path.
///
/// The first source to add a path keeps it; later additions of the same
/// path are ignored.
///
/// # Example
///
/// ```
/// use mxjdk::discovery::{CandidateSet, CandidateSource};
/// use std::path::PathBuf;
///
/// let mut set = CandidateSet::new();
/// set.insert(PathBuf::from("/opt/jdk17"), CandidateSource::UserEnv);
/// set.insert(PathBuf::from("/opt/jdk11"), CandidateSource::JavaHomeVar);
/// set.insert(PathBuf::from("/opt/jdk17"), CandidateSource::JavaHomeVar);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().next().unwrap().source, CandidateSource::UserEnv);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    seen: HashSet<PathBuf>,
    order: Vec<Candidate>,
}

impl CandidateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, path: PathBuf, source: CandidateSource) -> bool {
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.order.push(Candidate { path, source });
        true
    }

    /// Append every path from one source, keeping their order.
    pub fn extend<I>(&mut self, paths: I, source: CandidateSource)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for path in paths {
            if !self.insert(path.clone(), source) {
                tracing::debug!("Skipping duplicate candidate {} from {}", path.display(), source);
            }
        }
    }

    /// Whether `path` is already a candidate.
    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Candidates in search order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.order.iter()
    }

    /// Candidate paths in search order.
    pub fn paths(&self) -> Vec<&Path> {
        self.order.iter().map(|c| c.path.as_path()).collect()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for CandidateSet {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut set = CandidateSet::new();
        set.extend(
            [PathBuf::from("/c"), PathBuf::from("/a")],
            CandidateSource::UserEnv,
        );
        set.extend(
            [PathBuf::from("/b"), PathBuf::from("/c")],
            CandidateSource::SuiteEnv,
        );

        assert_eq!(
            set.paths(),
            vec![Path::new("/c"), Path::new("/a"), Path::new("/b")]
        );
    }

    #[test]
    fn duplicate_keeps_earlier_source() {
        let mut set = CandidateSet::new();
        assert!(set.insert(PathBuf::from("/jdk"), CandidateSource::SuiteEnv));
        assert!(!set.insert(PathBuf::from("/jdk"), CandidateSource::UserEnv));

        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().source, CandidateSource::SuiteEnv);
        assert!(set.contains(Path::new("/jdk")));
    }

    #[test]
    fn paths_compare_by_exact_value() {
        let mut set = CandidateSet::new();
        set.insert(PathBuf::from("/opt/jdk"), CandidateSource::UserEnv);
        set.insert(PathBuf::from("/opt/jdk/jre"), CandidateSource::UserEnv);

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_set() {
        let set = CandidateSet::new();
        assert!(set.is_empty());
        assert_eq!(set.into_iter().count(), 0);
    }

    #[test]
    fn source_display() {
        assert_eq!(CandidateSource::UserEnv.to_string(), "~/.mx/env");
        assert_eq!(CandidateSource::SuiteEnv.to_string(), "suite env");
        assert_eq!(CandidateSource::JavaHomeVar.to_string(), "$JAVA_HOME");
        assert_eq!(CandidateSource::HostRuntime.to_string(), "host runtime");
    }

    #[test]
    fn source_serializes_snake_case() {
        let json = serde_json::to_string(&CandidateSource::JavaHomeVar).unwrap();
        assert_eq!(json, "\"java_home_var\"");
    }
}
