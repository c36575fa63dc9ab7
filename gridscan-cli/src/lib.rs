// gridscan-cli/src/lib.rs
//
// Library portion of the gridscan CLI application.
// Contains argument definitions, grid loading and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{AnalyzeArgs, BorderArgs, Cli, Commands, CountArgs, CountingArgs, GridArgs};
pub use commands::{run_analyze, run_binary, run_border, run_connectivity, run_count};
pub use error::{CliErrorContext, CliResult};
pub use input::{load_grid, parse_grid};
