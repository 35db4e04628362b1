//! Compliance levels and their parsing.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{JdkError, Result};

/// Leading `major[.minor]` of a version string; anything after is ignored.
static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.(\d+))?").unwrap());

/// A normalized Java compliance constraint.
///
/// Legacy `1.N` spellings normalize to major `N`, so `"8"`, `"1.8"` and
/// `"1.8.0_292"` all read as major 8.
///
/// | Form   | Meaning                      |
/// |--------|------------------------------|
/// | `N`    | exactly major `N`            |
/// | `N+`   | major `N` or later           |
/// | `N..M` | any major from `N` to `M`    |
///
/// # Example
///
/// ```
/// use mxjdk::compliance::Compliance;
///
/// let requested: Compliance = "11+".parse().unwrap();
/// assert!(requested.matches(&Compliance::parse("17.0.2").unwrap()));
/// assert!(!requested.matches(&Compliance::parse("1.8").unwrap()));
/// assert_eq!(Compliance::parse("8").unwrap(), Compliance::parse("1.8").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compliance {
    /// Exactly this major version.
    Exact(u32),
    /// This major version or any later one.
    OrLater(u32),
    /// Any major version in the inclusive range.
    Range { low: u32, high: u32 },
}

impl Compliance {
    /// Parse a compliance or version string.
    ///
    /// # Errors
    ///
    /// Returns [`JdkError::InvalidCompliance`] when the string has no
    /// leading numeric version, or a range's bounds are reversed.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || JdkError::InvalidCompliance {
            value: value.to_string(),
        };
        let text = value.trim();

        if let Some((low, high)) = text.split_once("..") {
            let low = major_of(low.trim()).ok_or_else(invalid)?;
            let high = major_of(high.trim()).ok_or_else(invalid)?;
            if low > high {
                return Err(invalid());
            }
            return Ok(Self::Range { low, high });
        }

        if let Some(floor) = text.strip_suffix('+') {
            return major_of(floor.trim())
                .map(Self::OrLater)
                .ok_or_else(invalid);
        }

        major_of(text).map(Self::Exact).ok_or_else(invalid)
    }

    /// The canonical major version (the lower bound for floors and ranges).
    pub fn major(&self) -> u32 {
        match *self {
            Self::Exact(major) | Self::OrLater(major) => major,
            Self::Range { low, .. } => low,
        }
    }

    /// Check whether `candidate` satisfies this constraint.
    ///
    /// Only the candidate's [`major`](Self::major) is considered.
    pub fn matches(&self, candidate: &Compliance) -> bool {
        let version = candidate.major();
        match *self {
            Self::Exact(major) => version == major,
            Self::OrLater(major) => version >= major,
            Self::Range { low, high } => (low..=high).contains(&version),
        }
    }
}

/// Read the canonical major version from the start of `text`.
fn major_of(text: &str) -> Option<u32> {
    let caps = RE_VERSION.captures(text)?;
    let first: u32 = caps[1].parse().ok()?;
    match caps.get(2) {
        Some(second) if first == 1 => second.as_str().parse().ok(),
        _ => Some(first),
    }
}

impl FromStr for Compliance {
    type Err = JdkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Compliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(major) => write!(f, "{}", major),
            Self::OrLater(major) => write!(f, "{}+", major),
            Self::Range { low, high } => write!(f, "{}..{}", low, high),
        }
    }
}
