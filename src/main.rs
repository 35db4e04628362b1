//! mxjdk CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use mxjdk::cli::{Cli, CommandDispatcher};
use mxjdk::config::Settings;
use mxjdk::discovery::Project;
use mxjdk::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout carries only results.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mxjdk=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mxjdk=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("mxjdk starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);

    let settings = match &cli.settings {
        Some(path) => Settings::load(path),
        None => Settings::load_user(),
    };
    let settings = match settings {
        Ok(s) => s.with_default_home(cli.default_home.clone()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Determine project root
    let start = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let start = start.canonicalize().unwrap_or(start);
    let project = Project::discover(&start);
    tracing::debug!("Using project root {}", project.root().display());

    let dispatcher = CommandDispatcher::new(project, settings);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
