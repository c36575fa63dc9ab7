//! Object counting by 2x2 corner patterns
//!
//! Every 2x2 window of a binary image is either an external corner (exactly
//! one foreground sample), an internal corner (exactly one background
//! sample) or neither. For 4-connected objects without holes and without
//! diagonal contacts, each object contributes four more external than
//! internal corners, so `(external - internal) / 4` is the object count.
//! Holes subtract one each, which is why the result is cross-checked
//! against the exact component count.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::binary::{BinaryClassification, IntensityRange};
use crate::analysis::connectivity::ConnectivityReport;
use crate::config::AnalysisConfig;
use crate::error::{CoreError, CoreResult};
use crate::grid::{Cell, SampleGrid, ensure_not_empty};

/// Classification of a single 2x2 window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    External,
    Internal,
}

/// Corner totals and the derived object count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTally {
    /// `(external_corners - internal_corners) / 4`
    pub object_count: i64,
    pub external_corners: usize,
    pub internal_corners: usize,
    /// Exact component count from the connectivity report
    pub component_count: usize,
}

impl ObjectTally {
    /// Whether the corner formula agrees with the exact component count
    pub fn agrees_with_components(&self) -> bool {
        self.object_count == self.component_count as i64
    }
}

/// Why an object count could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum GateReason {
    /// The image has more than two levels
    NotBinary,
    /// The image has a single level; there is no foreground
    Degenerate { level: i32 },
    /// Some border sample is not background
    BorderNotEmpty,
    /// Foreground touches only diagonally somewhere
    AmbiguousContact { count: usize, first: Option<Cell> },
    /// The corner difference is not a multiple of 4
    Inconsistent { external: usize, internal: usize },
}

impl fmt::Display for GateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateReason::NotBinary => write!(f, "image is not binary"),
            GateReason::Degenerate { level } => {
                write!(f, "image has a single level ({level}), no foreground to count")
            }
            GateReason::BorderNotEmpty => write!(f, "image border is not empty"),
            GateReason::AmbiguousContact { count, first } => {
                write!(f, "{count} diagonal-only contact(s)")?;
                if let Some(cell) = first {
                    write!(f, ", first at {cell}")?;
                }
                Ok(())
            }
            GateReason::Inconsistent { external, internal } => write!(
                f,
                "corner counts are inconsistent (external {external}, internal {internal})"
            ),
        }
    }
}

/// Outcome of [`count_objects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ObjectCount {
    Counted(ObjectTally),
    Unavailable(GateReason),
}

impl ObjectCount {
    /// The object count, if the preconditions held
    pub fn objects(&self) -> Option<i64> {
        match self {
            ObjectCount::Counted(tally) => Some(tally.object_count),
            ObjectCount::Unavailable(_) => None,
        }
    }

    pub fn tally(&self) -> Option<&ObjectTally> {
        match self {
            ObjectCount::Counted(tally) => Some(tally),
            ObjectCount::Unavailable(_) => None,
        }
    }
}

/// Classifies a window given as `[(r,c), (r+1,c), (r,c+1), (r+1,c+1)]`.
pub fn classify_window(window: [i32; 4], range: IntensityRange) -> Option<Corner> {
    let foreground = window.iter().filter(|&&v| v == range.foreground()).count();
    let background = window.iter().filter(|&&v| v == range.background()).count();
    match (foreground, background) {
        (1, 3) => Some(Corner::External),
        (3, 1) => Some(Corner::Internal),
        _ => None,
    }
}

/// Slides the 2x2 window over the grid and totals both corner kinds.
pub fn count_corners<G: SampleGrid>(grid: &G, range: IntensityRange) -> (usize, usize) {
    let (h, w) = (grid.height(), grid.width());
    let mut external = 0;
    let mut internal = 0;
    for r in 0..h.saturating_sub(1) {
        for c in 0..w.saturating_sub(1) {
            let window = [
                grid.sample_at(r, c),
                grid.sample_at(r + 1, c),
                grid.sample_at(r, c + 1),
                grid.sample_at(r + 1, c + 1),
            ];
            match classify_window(window, range) {
                Some(Corner::External) => external += 1,
                Some(Corner::Internal) => internal += 1,
                None => {}
            }
        }
    }
    (external, internal)
}

/// Checks that the connectivity report was produced for this grid and range.
fn ensure_matching_report<G: SampleGrid>(
    grid: &G,
    range: IntensityRange,
    connectivity: &ConnectivityReport,
) -> CoreResult<()> {
    if (connectivity.height, connectivity.width) != (grid.height(), grid.width()) {
        return Err(CoreError::Precondition(format!(
            "connectivity report is for a {}x{} grid, got {}x{}",
            connectivity.height,
            connectivity.width,
            grid.height(),
            grid.width()
        )));
    }
    if connectivity.background != range.background() {
        return Err(CoreError::Precondition(format!(
            "connectivity report used background {}, classification says {}",
            connectivity.background,
            range.background()
        )));
    }
    Ok(())
}

/// Counts foreground objects, gated on the upstream verdicts.
///
/// The classification, border verdict and connectivity report are the
/// outputs of the three upstream analyzers for this same grid. A failed
/// gate is returned as `ObjectCount::Unavailable`, distinct from a genuine
/// count of zero.
///
/// # Errors
///
/// * `CoreError::EmptyGrid` for a grid with a zero dimension
/// * `CoreError::Precondition` if the connectivity report belongs to a
///   different grid shape or background level
/// * `CoreError::InconsistentCorners` if the corner difference is not a
///   multiple of 4 and `config.strict_consistency` is set
pub fn count_objects<G: SampleGrid>(
    grid: &G,
    classification: &BinaryClassification,
    border_empty: bool,
    connectivity: &ConnectivityReport,
    config: &AnalysisConfig,
) -> CoreResult<ObjectCount> {
    ensure_not_empty(grid)?;

    if !classification.is_binary {
        return Ok(ObjectCount::Unavailable(GateReason::NotBinary));
    }
    let range = classification.range()?;
    if range.is_degenerate() {
        return Ok(ObjectCount::Unavailable(GateReason::Degenerate {
            level: range.background(),
        }));
    }
    ensure_matching_report(grid, range, connectivity)?;
    if !border_empty {
        return Ok(ObjectCount::Unavailable(GateReason::BorderNotEmpty));
    }
    if connectivity.has_ambiguous_contacts() && !config.allow_diagonal_contacts {
        return Ok(ObjectCount::Unavailable(GateReason::AmbiguousContact {
            count: connectivity.diagonal_contacts,
            first: connectivity.first_diagonal_contact,
        }));
    }

    let (external, internal) = count_corners(grid, range);
    let difference = external as i64 - internal as i64;
    if difference % 4 != 0 {
        if config.strict_consistency {
            return Err(CoreError::InconsistentCorners { external, internal });
        }
        log::warn!(
            "Corner difference {} is not a multiple of 4 (external {}, internal {})",
            difference,
            external,
            internal
        );
        return Ok(ObjectCount::Unavailable(GateReason::Inconsistent {
            external,
            internal,
        }));
    }

    let tally = ObjectTally {
        object_count: difference / 4,
        external_corners: external,
        internal_corners: internal,
        component_count: connectivity.component_count,
    };

    if config.cross_check_components && !tally.agrees_with_components() {
        log::warn!(
            "Corner count {} differs from component count {}; some objects likely have holes",
            tally.object_count,
            tally.component_count
        );
    }
    log::debug!(
        "Object count {} (external {}, internal {})",
        tally.object_count,
        external,
        internal
    );

    Ok(ObjectCount::Counted(tally))
}
