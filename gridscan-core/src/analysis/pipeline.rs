//! Main analysis orchestration
//!
//! Runs the analyzers in dependency order: binary classification, border
//! inspection, connectivity labeling, object counting. Each downstream step
//! receives the upstream results as parameters instead of recomputing them.

use rayon::prelude::*;

use crate::config::AnalysisConfig;
use crate::error::CoreResult;
use crate::grid::SampleGrid;

use super::binary::classify;
use super::border::inspect_border;
use super::connectivity::label_components;
use super::objects::{GateReason, ObjectCount, count_objects};
use super::report::AnalysisReport;

/// Analyzes one grid and assembles the combined report.
pub fn analyze<G: SampleGrid>(grid: &G, config: &AnalysisConfig) -> CoreResult<AnalysisReport> {
    log::debug!("Analyzing {}x{} grid", grid.height(), grid.width());

    let binary = classify(grid)?;

    let (border, connectivity, objects) = match binary.range() {
        Ok(range) => {
            let border = inspect_border(grid, range.background())?;
            let connectivity = label_components(grid, range)?;
            let objects =
                count_objects(grid, &binary, border.is_empty(), &connectivity, config)?;
            (Some(border), Some(connectivity), objects)
        }
        Err(_) => (None, None, ObjectCount::Unavailable(GateReason::NotBinary)),
    };

    let report = AnalysisReport {
        height: grid.height(),
        width: grid.width(),
        binary,
        border,
        connectivity,
        objects,
    };

    log::debug!("Analysis result: {:?}", report.objects);

    Ok(report)
}

/// Analyzes independent grids in parallel.
///
/// Results keep the input order; one grid failing does not affect the
/// others.
pub fn analyze_batch<G>(grids: &[G], config: &AnalysisConfig) -> Vec<CoreResult<AnalysisReport>>
where
    G: SampleGrid + Sync,
{
    log::debug!("Analyzing batch of {} grids", grids.len());
    grids.par_iter().map(|grid| analyze(grid, config)).collect()
}
