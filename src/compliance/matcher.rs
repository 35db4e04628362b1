//! Matching discovered runtime versions against a requested compliance.

use super::level::Compliance;

/// Check whether a runtime reporting `version` satisfies `requested`.
///
/// A version string that cannot be parsed never matches.
///
/// # Example
///
/// ```
/// use mxjdk::compliance::{satisfies, Compliance};
///
/// let requested = Compliance::parse("1.8").unwrap();
/// assert!(satisfies(&requested, "1.8.0_392"));
/// assert!(!satisfies(&requested, "11.0.2"));
/// assert!(!satisfies(&requested, "unknown"));
/// ```
pub fn satisfies(requested: &Compliance, version: &str) -> bool {
    match Compliance::parse(version) {
        Ok(candidate) => requested.matches(&candidate),
        Err(_) => {
            tracing::debug!("Ignoring unparseable runtime version '{}'", version);
            false
        }
    }
}
