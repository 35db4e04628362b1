//! Configuration sources for mxjdk.
//!
//! - [`env_file`] reads `mx` env files (`~/.mx/env`, `mx.<suite>/env`) and
//!   JDK `release` files
//! - [`settings`] loads the optional `~/.mx/mxjdk.yml` settings file
//!
//! # Example
//!
//! ```
//! use mxjdk::config::EnvFileParser;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let env = temp.path().join("env");
//! fs::write(&env, "JAVA_HOME=/opt/jdk17\n").unwrap();
//!
//! let homes = EnvFileParser::java_homes(&env);
//! assert_eq!(homes.len(), 1);
//! ```

pub mod env_file;
pub mod settings;

pub use env_file::{EnvFileParser, EXTRA_JAVA_HOMES_KEY, JAVA_HOME_KEY};
pub use settings::{Settings, DEFAULT_JAVA_COMMAND, DEFAULT_RUNTIME_LEAF, SETTINGS_FILE};
