//! Command to resolve a destination reference to a canonical absolute path.

use crate::error::CliError;
use crate::utils::{print_report, GlobalOptions, ResolutionReport};
use clap::Args;
use docpath::resolve_absolute;

/// Resolve a destination reference against a source path.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Source path the reference appears in
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Destination reference to resolve (empty resolves the source itself)
    #[arg(value_name = "DESTINATION", default_value = "")]
    pub destination: String,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = docpath::init_logger(global.verbose, global.quiet);

        match resolve_absolute(&self.source, &self.destination) {
            Some(resolved) => {
                logger.debug(&format!(
                    "canonicalized {:?} against {:?} -> {resolved:?}",
                    self.destination, self.source
                ));
                print_report(
                    global,
                    &ResolutionReport {
                        operation: "absolute",
                        source: &self.source,
                        destination: Some(&self.destination),
                        result: &resolved,
                    },
                )
            }
            None => Err(CliError::Unresolvable {
                source: self.source,
                destination: self.destination,
            }),
        }
    }
}
