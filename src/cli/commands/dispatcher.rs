//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::discovery::Project;
use crate::error::Result;
use crate::resolver::Resolver;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::find::FindCommand;
use super::list::ListCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project: Project,
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher for a project with the given settings.
    pub fn new(project: Project, settings: Settings) -> Self {
        Self { project, settings }
    }

    /// Get the project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Get the effective settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Find(args) => {
                let resolver = Resolver::from_settings(&self.settings);
                FindCommand::new(self.project.clone(), resolver, args.clone()).execute(ui)
            }
            Commands::List(args) => {
                let resolver = Resolver::from_settings(&self.settings);
                ListCommand::new(self.project.clone(), resolver, args.clone()).execute(ui)
            }
            Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(ui),
        }
    }
}
