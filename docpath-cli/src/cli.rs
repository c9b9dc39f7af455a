//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{AbsoluteCommand, CompletionsCommand, NormalizeCommand, RelativeCommand};
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line tool for resolving document link paths.
#[derive(Parser)]
#[command(name = "docpath")]
#[command(version, about = "Resolve and relativize document link paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        default_value = "plain",
        env = "DOCPATH_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a destination reference to a canonical absolute path
    Absolute(AbsoluteCommand),

    /// Compute the relative path from a source to a destination
    Relative(RelativeCommand),

    /// Normalize separators in a path string
    Normalize(NormalizeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare result on stdout
    Plain,
    /// JSON report with inputs and result
    Json,
}
