//! Main entry point for the docpath CLI.
//!
//! This is the command-line interface for document link path resolution.
//! It provides commands for working with textual paths:
//! - `absolute`: resolve a destination reference to a canonical absolute path
//! - `relative`: compute the relative path from a source to a destination
//! - `normalize`: uniformize separators in a path string

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        format: cli.format,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
