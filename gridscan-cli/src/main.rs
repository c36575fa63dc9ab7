// ============================================================================
// gridscan-cli/src/main.rs
// ============================================================================
//
// MAIN ENTRY POINT: gridscan command-line application
//
// Parses arguments, configures color and logging, dispatches to the
// selected command and maps errors to exit code 1. Negative verdicts
// (not binary, border touched, count unavailable) are reported output,
// not failures.

use std::process;

use clap::Parser;
use gridscan_cli::cli::{Cli, Commands};
use gridscan_cli::error::CliResult;
use gridscan_cli::logging::init_logging;
use gridscan_cli::output::{detect_color_support, print_error, set_color};
use gridscan_cli::{run_analyze, run_binary, run_border, run_connectivity, run_count};

fn main() {
    let cli = Cli::parse();

    set_color(!cli.no_color && !cli.json && detect_color_support());

    if let Err(e) = init_logging(cli.verbose, cli.log_dir.as_deref()) {
        print_error(&e.to_string());
        process::exit(1);
    }

    if let Err(e) = dispatch(&cli) {
        log::debug!("Command failed: {:?}", e);
        print_error(&e.to_string());
        process::exit(1);
    }
}

fn dispatch(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Binary(args) => run_binary(args, cli.json),
        Commands::Border(args) => run_border(args, cli.json),
        Commands::Connectivity(args) => run_connectivity(args, cli.json),
        Commands::Count(args) => run_count(args, cli.json),
        Commands::Analyze(args) => run_analyze(args, cli.json),
    }
}
