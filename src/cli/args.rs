//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// mxjdk - Locate a Java runtime matching a compliance level for mx suites.
#[derive(Debug, Parser)]
#[command(name = "mxjdk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the suite root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Host runtime home used as the last candidate and the fallback
    #[arg(long, global = true, env = "MXJDK_DEFAULT_HOME")]
    pub default_home: Option<PathBuf>,

    /// Path to settings file (overrides default ~/.mx/mxjdk.yml)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Explain how the runtime was chosen
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the home of the first runtime satisfying a compliance
    Find(FindArgs),

    /// List every candidate runtime in search order
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `find` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FindArgs {
    /// Requested compliance (e.g. 8, 1.8, 17, 11+, 11..17)
    pub compliance: String,

    /// Output the full resolution as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
