//! Command-line interface for mxjdk.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, FindArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
