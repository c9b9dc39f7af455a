//! Command to compute the relative path between two references.

use crate::error::CliError;
use crate::utils::{print_report, GlobalOptions, ResolutionReport};
use clap::Args;
use docpath::resolve_relative;

/// Compute the minimal relative path from a source to a destination.
#[derive(Args)]
pub struct RelativeCommand {
    /// Source path to start from
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Destination reference (empty points back at the source itself)
    #[arg(value_name = "DESTINATION", default_value = "")]
    pub destination: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = docpath::init_logger(global.verbose, global.quiet);

        let relative = resolve_relative(&self.source, &self.destination)?;
        logger.debug(&format!(
            "relativized {:?} from {:?} -> {relative:?}",
            self.destination, self.source
        ));

        print_report(
            global,
            &ResolutionReport {
                operation: "relative",
                source: &self.source,
                destination: Some(&self.destination),
                result: &relative,
            },
        )
    }
}
