//! The `analyze` command: every analyzer, every file.
//!
//! Files are loaded up front and analyzed together with `analyze_batch`.
//! A file that fails to load or analyze is reported and the rest still run;
//! the command fails if any file failed.

use std::path::PathBuf;

use gridscan_core::{AnalysisReport, CoreError, CoreResult, GrayGrid, analyze_batch};
use log::{error, info};
use serde_json::json;

use crate::cli::AnalyzeArgs;
use crate::error::CliResult;
use crate::input::load_grid;
use crate::output::{print_analysis_report, print_error, print_heading, print_info};

use super::{analysis_config, emit_json};

/// Execute the `analyze` command
pub fn run_analyze(args: &AnalyzeArgs, json: bool) -> CliResult<()> {
    let config = analysis_config(&args.counting);
    info!("Analyzing {} grid file(s)", args.inputs.len());

    let mut outcomes: Vec<(PathBuf, CoreResult<AnalysisReport>)> = Vec::new();
    let mut loaded: Vec<(usize, GrayGrid)> = Vec::new();
    for path in &args.inputs {
        match load_grid(path) {
            Ok(grid) => {
                loaded.push((outcomes.len(), grid));
                let pending = CoreError::OperationFailed(format!("{} was not analyzed", path.display()));
                outcomes.push((path.clone(), Err(pending)));
            }
            Err(e) => {
                error!("{}", e);
                outcomes.push((path.clone(), Err(e)));
            }
        }
    }

    let (slots, grids): (Vec<usize>, Vec<GrayGrid>) = loaded.into_iter().unzip();
    for (slot, result) in slots.into_iter().zip(analyze_batch(&grids, &config)) {
        outcomes[slot].1 = result;
    }
    let failed = outcomes.iter().filter(|(_, result)| result.is_err()).count();

    if json {
        let entries: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|(path, result)| match result {
                Ok(report) => json!({ "file": path.display().to_string(), "report": report }),
                Err(e) => json!({ "file": path.display().to_string(), "error": e.to_string() }),
            })
            .collect();
        emit_json(Ok(serde_json::Value::Array(entries)))?;
    } else {
        for (path, result) in &outcomes {
            match result {
                Ok(report) => print_analysis_report(&path.display().to_string(), report),
                Err(e) => {
                    print_heading(&path.display().to_string());
                    print_error(&e.to_string());
                }
            }
        }
        if outcomes.len() > 1 {
            print_heading("Summary");
            print_info("Files", outcomes.len());
            print_info("Analyzed", outcomes.len() - failed);
            print_info("Failed", failed);
        }
    }

    if failed > 0 {
        return Err(CoreError::OperationFailed(format!(
            "{} of {} grid file(s) failed",
            failed,
            outcomes.len()
        )));
    }
    Ok(())
}
