//! Host runtime detection.
//!
//! mxjdk is not itself a Java process, so the "runtime we are running
//! under" is the one a plain `java` invocation would start: the first
//! `java` executable on `PATH`, followed through symlinks (e.g.
//! `/usr/bin/java` -> `/etc/alternatives/java` -> `/usr/lib/jvm/.../bin/java`)
//! to its installation root. An explicit `default_home` setting wins over
//! the `PATH` lookup.

use std::path::{Path, PathBuf};

use crate::config::Settings;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Platform file name for an executable.
#[cfg(windows)]
fn executable_name(command: &str) -> String {
    if Path::new(command).extension().is_some() {
        command.to_string()
    } else {
        format!("{}.exe", command)
    }
}

#[cfg(not(windows))]
fn executable_name(command: &str) -> String {
    command.to_string()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let file_name = executable_name(tool);
    for dir in path_entries {
        let candidate = dir.join(&file_name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Installation root of a `java` executable: the parent of its `bin` directory.
///
/// Symlinks are followed first. Returns `None` when the executable does not
/// live in a `bin` directory.
pub fn home_from_executable(executable: &Path) -> Option<PathBuf> {
    let real = executable
        .canonicalize()
        .unwrap_or_else(|_| executable.to_path_buf());
    let bin = real.parent()?;
    if bin.file_name()? != "bin" {
        return None;
    }
    bin.parent().map(Path::to_path_buf)
}

/// Find the installation root of `java_command` using the given PATH entries.
///
/// A command containing a path separator is used as-is instead of being
/// looked up.
pub fn detect_host_home(java_command: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let command = Path::new(java_command);
    let executable = if command.components().count() > 1 {
        command.is_file().then(|| command.to_path_buf())
    } else {
        resolve_tool_path(java_command, path_entries)
    }?;

    let home = home_from_executable(&executable);
    match &home {
        Some(h) => tracing::debug!("Host runtime at {} (via {})", h.display(), executable.display()),
        None => tracing::debug!("{} is not inside a bin directory", executable.display()),
    }
    home
}

/// Host runtime home from settings, falling back to the system PATH.
pub fn host_home(settings: &Settings) -> Option<PathBuf> {
    if let Some(home) = &settings.default_home {
        return Some(home.clone());
    }
    detect_host_home(&settings.java_command, &parse_system_path())
}
