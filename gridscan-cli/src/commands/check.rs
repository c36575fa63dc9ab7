//! The single-analyzer commands.
//!
//! `binary` always succeeds on a loadable grid. `border` needs a background
//! level, taken from `--background` or from a binary grid's minimum.
//! `connectivity` needs a binary grid.

use std::path::Path;

use gridscan_core::SampleGrid;
use gridscan_core::analysis::{classify, inspect_border, label_components};
use log::info;

use crate::cli::{BorderArgs, GridArgs};
use crate::error::{CliErrorContext, CliResult};
use crate::input::load_grid;
use crate::output::{print_binary, print_border, print_connectivity, print_heading, print_info};

use super::emit_json;

fn print_grid_heading(path: &Path, height: usize, width: usize) {
    print_heading(&path.display().to_string());
    print_info("Size", format!("{} x {}", height, width));
}

/// Execute the `binary` command
pub fn run_binary(args: &GridArgs, json: bool) -> CliResult<()> {
    let grid = load_grid(&args.input)?;
    let classification = classify(&grid)?;
    info!(
        "{}: binary={} (min {}, max {})",
        args.input.display(),
        classification.is_binary,
        classification.min,
        classification.max
    );

    if json {
        return emit_json(serde_json::to_value(classification));
    }
    print_grid_heading(&args.input, grid.height(), grid.width());
    print_binary(&classification);
    Ok(())
}

/// Execute the `border` command
pub fn run_border(args: &BorderArgs, json: bool) -> CliResult<()> {
    let grid = load_grid(&args.input)?;
    let background = match args.background {
        Some(level) => level,
        None => classify(&grid)?
            .range()
            .cli_context("Border check needs a binary grid or --background")?
            .background(),
    };
    let report = inspect_border(&grid, background)?;
    info!("{}: border empty={}", args.input.display(), report.is_empty());

    if json {
        return emit_json(serde_json::to_value(report));
    }
    print_grid_heading(&args.input, grid.height(), grid.width());
    print_border(&report);
    Ok(())
}

/// Execute the `connectivity` command
pub fn run_connectivity(args: &GridArgs, json: bool) -> CliResult<()> {
    let grid = load_grid(&args.input)?;
    let range = classify(&grid)?
        .range()
        .cli_context("Connectivity check needs a binary grid")?;
    let report = label_components(&grid, range)?;
    info!(
        "{}: {} component(s), merge={}",
        args.input.display(),
        report.component_count,
        report.merge_occurred
    );

    if json {
        return emit_json(serde_json::to_value(report));
    }
    print_grid_heading(&args.input, grid.height(), grid.width());
    print_connectivity(&report);
    Ok(())
}
