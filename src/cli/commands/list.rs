//! List command implementation.
//!
//! The `mxjdk list` command shows every candidate in search order and what
//! it resolves to.

use anyhow::Context;

use crate::cli::args::ListArgs;
use crate::discovery::Project;
use crate::error::Result;
use crate::platform::PlatformRegistry;
use crate::resolver::{Probe, Resolver};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<R> {
    project: Project,
    resolver: Resolver<R>,
    args: ListArgs,
}

impl<R: PlatformRegistry> ListCommand<R> {
    /// Create a new list command.
    pub fn new(project: Project, resolver: Resolver<R>, args: ListArgs) -> Self {
        Self {
            project,
            resolver,
            args,
        }
    }
}

/// One human-readable line for a probe.
fn format_probe(probe: &Probe) -> String {
    let status = match &probe.platform {
        Some(platform) => {
            let mut status = platform.version().unwrap_or_default().to_string();
            if let Some(vendor) = &platform.vendor {
                status.push_str(&format!(" ({})", vendor));
            }
            if probe.via_parent {
                status.push_str(&format!(" via {}", platform.home.display()));
            }
            status
        }
        None => "unresolvable".to_string(),
    };

    format!(
        "{:<14} {}  {}",
        probe.candidate.source.to_string(),
        probe.candidate.path.display(),
        status
    )
}

impl<R: PlatformRegistry> Command for ListCommand<R> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probes = self.resolver.probe(&self.project);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&probes).context("Failed to serialize candidates")?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Java runtimes for {}", self.project.name()));

        if probes.is_empty() {
            ui.warning("No candidate runtimes found");
            ui.message("Set JAVA_HOME or add JAVA_HOME/EXTRA_JAVA_HOMES to ~/.mx/env");
            return Ok(CommandResult::success());
        }

        for probe in &probes {
            ui.data(&format_probe(probe));
        }

        Ok(CommandResult::success())
    }
}
