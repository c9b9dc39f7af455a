//! Utility functions for CLI operations.
//!
//! This module provides the global options shared across commands and the
//! output rendering used by all resolution commands.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Output format for results.
    pub format: OutputFormat,
}

/// A resolution outcome rendered to stdout.
#[derive(Debug, Serialize)]
pub struct ResolutionReport<'a> {
    /// The operation that produced the result.
    pub operation: &'a str,

    /// The source path.
    pub source: &'a str,

    /// The destination reference, when the operation takes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<&'a str>,

    /// The resolved path.
    pub result: &'a str,
}

/// Print a report in the requested output format.
pub fn print_report(global: &GlobalOptions, report: &ResolutionReport<'_>) -> Result<(), CliError> {
    match global.format {
        OutputFormat::Plain => println!("{}", report.result),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(report)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            println!("{rendered}");
        }
    }
    Ok(())
}
