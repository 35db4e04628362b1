//! Find command implementation.
//!
//! The `mxjdk find <COMPLIANCE>` command prints the home of the first
//! runtime satisfying the compliance, or of the default runtime.

use anyhow::Context;

use crate::cli::args::FindArgs;
use crate::compliance::Compliance;
use crate::discovery::Project;
use crate::error::Result;
use crate::platform::PlatformRegistry;
use crate::resolver::Resolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The find command implementation.
pub struct FindCommand<R> {
    project: Project,
    resolver: Resolver<R>,
    args: FindArgs,
}

impl<R: PlatformRegistry> FindCommand<R> {
    /// Create a new find command.
    pub fn new(project: Project, resolver: Resolver<R>, args: FindArgs) -> Self {
        Self {
            project,
            resolver,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &FindArgs {
        &self.args
    }
}

impl<R: PlatformRegistry> Command for FindCommand<R> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let requested = match Compliance::parse(&self.args.compliance) {
            Ok(c) => c,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
        };

        let resolution = self.resolver.resolve(&self.project, &requested);

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolution)
                .context("Failed to serialize resolution")?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        let platform = &resolution.platform;
        let version = platform.version().unwrap_or("unknown version");

        match &resolution.candidate {
            Some(candidate) => ui.detail(&format!(
                "{} ({}) from {} satisfies {}",
                platform.name, version, candidate.source, requested
            )),
            None => {
                if platform.home.as_os_str().is_empty() {
                    ui.error(&format!(
                        "No Java runtime satisfies {} and no default runtime is available",
                        requested
                    ));
                    return Ok(CommandResult::failure(1));
                }
                ui.warning(&format!(
                    "No Java runtime satisfies {}; using default {} ({})",
                    requested, platform.name, version
                ));
            }
        }

        ui.data(&platform.home.display().to_string());
        Ok(CommandResult::success())
    }
}
