//! The `count` command.

use gridscan_core::analyze;
use log::info;

use crate::cli::CountArgs;
use crate::error::CliResult;
use crate::input::load_grid;
use crate::output::{print_heading, print_info, print_objects};

use super::{analysis_config, emit_json};

/// Execute the `count` command
///
/// Gated outcomes (not binary, border touched, diagonal contacts) are
/// verdicts, not errors: they print and exit successfully.
pub fn run_count(args: &CountArgs, json: bool) -> CliResult<()> {
    let grid = load_grid(&args.input)?;
    let config = analysis_config(&args.counting);
    let report = analyze(&grid, &config)?;

    match report.objects.objects() {
        Some(count) => info!("{}: {} object(s)", args.input.display(), count),
        None => info!("{}: object count unavailable", args.input.display()),
    }

    if json {
        return emit_json(serde_json::to_value(report.objects));
    }
    print_heading(&args.input.display().to_string());
    print_info("Size", format!("{} x {}", report.height, report.width));
    print_objects(&report.objects);
    Ok(())
}
