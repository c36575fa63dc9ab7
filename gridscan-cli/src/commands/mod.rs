//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Runs the full pipeline over one or more grid files.
pub mod analyze;
/// Single-analyzer commands: `binary`, `border` and `connectivity`.
pub mod check;
/// The `count` command.
pub mod count;

use gridscan_core::{AnalysisConfig, AnalysisConfigBuilder, CoreError};

use crate::cli::CountingArgs;
use crate::error::CliResult;

pub use analyze::run_analyze;
pub use check::{run_binary, run_border, run_connectivity};
pub use count::run_count;

/// Builds the analysis configuration: environment first, then flags.
pub fn analysis_config(args: &CountingArgs) -> AnalysisConfig {
    let mut builder = AnalysisConfigBuilder::from_env();
    if args.allow_diagonal {
        builder = builder.allow_diagonal_contacts(true);
    }
    if args.lenient {
        builder = builder.strict_consistency(false);
    }
    if args.no_cross_check {
        builder = builder.cross_check_components(false);
    }
    builder.build()
}

/// Prints a serialized report as pretty JSON on stdout.
pub(crate) fn emit_json(value: serde_json::Result<serde_json::Value>) -> CliResult<()> {
    let value = value
        .map_err(|e| CoreError::OperationFailed(format!("Failed to serialize report: {}", e)))?;
    println!("{:#}", value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = CountingArgs {
            allow_diagonal: true,
            lenient: true,
            no_cross_check: true,
        };
        let config = analysis_config(&args);
        assert!(config.allow_diagonal_contacts);
        assert!(!config.strict_consistency);
        assert!(!config.cross_check_components);
    }
}
