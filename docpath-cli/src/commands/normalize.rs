//! Command to normalize separators in a path string.

use crate::error::CliError;
use crate::utils::{print_report, GlobalOptions, ResolutionReport};
use clap::Args;
use docpath::normalize;

/// Normalize separators in a path string.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let normalized = normalize(&self.path);

        print_report(
            global,
            &ResolutionReport {
                operation: "normalize",
                source: &self.path,
                destination: None,
                result: &normalized,
            },
        )
    }
}
