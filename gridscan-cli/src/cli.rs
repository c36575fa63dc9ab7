// ============================================================================
// gridscan-cli/src/cli.rs
// ============================================================================
//
// COMMAND-LINE INTERFACE: Argument Definitions
//
// This module defines the command-line argument structures using clap's
// derive API. One subcommand exists per analyzer, plus `analyze` which runs
// the whole pipeline over one or more grid files.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// ============================================================================
// MAIN CLI STRUCTURE
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Gridscan: structural analysis of grayscale grids",
    long_about = "Checks whether integer grids are binary, have an empty border, are \
                  4-connected without ambiguous merges, and counts their objects."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print machine-readable JSON instead of the styled report
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging (overrides GRIDSCAN_LOG_LEVEL)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Directory for a timestamped log file
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports whether the grid holds at most two intensity levels
    Binary(GridArgs),

    /// Reports whether every border sample equals the background level
    Border(BorderArgs),

    /// Labels 4-connected components and reports merges and contacts
    Connectivity(GridArgs),

    /// Counts objects from 2x2 corner patterns
    Count(CountArgs),

    /// Runs every analyzer over one or more grid files
    Analyze(AnalyzeArgs),
}

// ============================================================================
// SUBCOMMAND ARGUMENTS
// ============================================================================

#[derive(Args, Debug)]
pub struct GridArgs {
    /// Text grid file (one row per line, whitespace or comma separated)
    #[arg(value_name = "GRID_FILE")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct BorderArgs {
    /// Text grid file (one row per line, whitespace or comma separated)
    #[arg(value_name = "GRID_FILE")]
    pub input: PathBuf,

    /// Background level to check against (defaults to the minimum of a binary grid)
    #[arg(long, value_name = "LEVEL", allow_negative_numbers = true)]
    pub background: Option<i32>,
}

/// Flags that adjust the object counter.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct CountingArgs {
    /// Count even when foreground pixels touch only diagonally
    #[arg(long)]
    pub allow_diagonal: bool,

    /// Report a non-divisible corner balance as unavailable instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Skip the comparison against the connected component count
    #[arg(long)]
    pub no_cross_check: bool,
}

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Text grid file (one row per line, whitespace or comma separated)
    #[arg(value_name = "GRID_FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub counting: CountingArgs,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text grid files, analyzed in parallel
    #[arg(value_name = "GRID_FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub counting: CountingArgs,
}
