//! `mx` env file parsing.
//!
//! `mx` keeps per-user (`~/.mx/env`) and per-suite (`mx.<suite>/env`)
//! settings in plain `KEY=value` files. The same reader also handles the
//! `release` file shipped in every JDK image.

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key holding the primary JDK home.
pub const JAVA_HOME_KEY: &str = "JAVA_HOME";

/// Key holding additional JDK homes, separated by the platform path-list separator.
pub const EXTRA_JAVA_HOMES_KEY: &str = "EXTRA_JAVA_HOMES";

/// Parses env files into a map of variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Colon separator: `KEY: value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# comment` or `! comment`
/// - Continuation: a trailing `\` joins the next line
/// - Values with equals signs: `OPTS=-Dfoo=bar`
///
/// # Example
///
/// ```
/// use mxjdk::config::EnvFileParser;
///
/// let content = r#"
/// # Suite defaults
/// JAVA_HOME=/opt/jdk17
/// MX_PYTHON="python3"
/// "#;
///
/// let vars = EnvFileParser::parse(content).unwrap();
/// assert_eq!(vars.get("JAVA_HOME"), Some(&"/opt/jdk17".to_string()));
/// assert_eq!(vars.get("MX_PYTHON"), Some(&"python3".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables.
    ///
    /// When a key repeats, the last assignment wins.
    pub fn parse(content: &str) -> Result<HashMap<String, String>> {
        let mut vars = HashMap::new();

        for line in Self::logical_lines(content) {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        Ok(vars)
    }

    /// Join backslash-continued physical lines into logical lines.
    ///
    /// Only an odd run of trailing backslashes continues a line. A comment
    /// line never continues, even when it ends in a backslash.
    fn logical_lines(content: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut pending: Option<String> = None;

        for raw in content.lines() {
            let (mut current, piece) = match pending.take() {
                Some(current) => (current, raw.trim_start()),
                None if is_comment(raw) => {
                    lines.push(raw.to_string());
                    continue;
                }
                None => (String::new(), raw),
            };

            match continued_body(piece) {
                Some(body) => {
                    current.push_str(body);
                    pending = Some(current);
                }
                None => {
                    current.push_str(piece);
                    lines.push(current);
                }
            }
        }

        if let Some(rest) = pending {
            lines.push(rest);
        }

        lines
    }

    /// Parse a single line.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let sep = line.find(['=', ':'])?;
        let key = line[..sep].trim().to_string();
        if key.is_empty() {
            return None;
        }
        let value = Self::unquote(line[sep + 1..].trim());

        Some((key, value))
    }

    /// Remove surrounding quotes from a value.
    fn unquote(value: &str) -> String {
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }

    /// Load and parse an env file from a path.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// stray Latin-1 comment does not hide the assignments around it.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let bytes = std::fs::read(path)?;
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    /// Load and parse an env file, returning an empty map if it is not a regular file.
    pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(HashMap::new())
        }
    }

    /// Extract candidate JDK homes from an env file.
    ///
    /// Returns `JAVA_HOME` first, then each `EXTRA_JAVA_HOMES` entry, with
    /// empty entries and repeats dropped. A missing file yields nothing; an
    /// unreadable one is logged and also yields nothing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mxjdk::config::EnvFileParser;
    /// use std::path::Path;
    ///
    /// for home in EnvFileParser::java_homes(Path::new("mx.graal/env")) {
    ///     println!("{}", home.display());
    /// }
    /// ```
    pub fn java_homes(path: &Path) -> Vec<PathBuf> {
        if !path.is_file() {
            tracing::debug!("No env file at {}", path.display());
            return Vec::new();
        }

        match Self::load(path) {
            Ok(vars) => Self::homes_from_vars(&vars),
            Err(e) => {
                tracing::warn!("Failed to read env file {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Extract candidate JDK homes from already-parsed variables.
    pub fn homes_from_vars(vars: &HashMap<String, String>) -> Vec<PathBuf> {
        let mut homes = Vec::new();

        if let Some(java_home) = vars.get(JAVA_HOME_KEY) {
            push_home(&mut homes, PathBuf::from(java_home.trim()));
        }

        if let Some(extra) = vars.get(EXTRA_JAVA_HOMES_KEY) {
            for home in std::env::split_paths(extra.trim()) {
                push_home(&mut homes, home);
            }
        }

        homes
    }
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(['#', '!'])
}

/// The line without its continuation backslash, if it has one.
fn continued_body(line: &str) -> Option<&str> {
    let trimmed = line.trim_end();
    let backslashes = trimmed.len() - trimmed.trim_end_matches('\\').len();
    (backslashes % 2 == 1).then(|| &trimmed[..trimmed.len() - 1])
}

fn push_home(homes: &mut Vec<PathBuf>, home: PathBuf) {
    if !home.as_os_str().is_empty() && !homes.contains(&home) {
        homes.push(home);
    }
}
