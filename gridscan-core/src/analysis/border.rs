//! Border emptiness inspection

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::grid::{Cell, SampleGrid, ensure_not_empty};

/// Per-side result of [`inspect_border`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderReport {
    /// Level every border sample was compared against
    pub background: i32,
    pub top_empty: bool,
    pub bottom_empty: bool,
    pub left_empty: bool,
    pub right_empty: bool,
    /// First mismatching cell, scanning top, bottom, left, right
    pub first_violation: Option<Cell>,
}

impl BorderReport {
    /// True only if all four sides consist of the background level
    pub fn is_empty(&self) -> bool {
        self.top_empty && self.bottom_empty && self.left_empty && self.right_empty
    }

    /// Names of the sides holding non-background samples
    pub fn failing_sides(&self) -> Vec<&'static str> {
        [
            ("top", self.top_empty),
            ("bottom", self.bottom_empty),
            ("left", self.left_empty),
            ("right", self.right_empty),
        ]
        .into_iter()
        .filter(|(_, empty)| !empty)
        .map(|(side, _)| side)
        .collect()
    }
}

/// Scans one side, stopping at the first non-background cell.
fn scan_side<G, I>(grid: &G, background: i32, cells: I) -> Option<Cell>
where
    G: SampleGrid,
    I: IntoIterator<Item = Cell>,
{
    cells
        .into_iter()
        .find(|cell| grid.sample_at(cell.row, cell.col) != background)
}

/// Checks the four sides of the grid independently.
///
/// Corner samples belong to two sides and are checked by both scans.
pub fn inspect_border<G: SampleGrid>(grid: &G, background: i32) -> CoreResult<BorderReport> {
    ensure_not_empty(grid)?;

    let (h, w) = (grid.height(), grid.width());
    let top = scan_side(grid, background, (0..w).map(|c| Cell::new(0, c)));
    let bottom = scan_side(grid, background, (0..w).map(|c| Cell::new(h - 1, c)));
    let left = scan_side(grid, background, (0..h).map(|r| Cell::new(r, 0)));
    let right = scan_side(grid, background, (0..h).map(|r| Cell::new(r, w - 1)));

    let report = BorderReport {
        background,
        top_empty: top.is_none(),
        bottom_empty: bottom.is_none(),
        left_empty: left.is_none(),
        right_empty: right.is_none(),
        first_violation: top.or(bottom).or(left).or(right),
    };

    log::debug!(
        "Border check against level {}: empty={} failing={:?}",
        background,
        report.is_empty(),
        report.failing_sides()
    );

    Ok(report)
}

/// Whether every border sample equals `background`.
pub fn is_border_empty<G: SampleGrid>(grid: &G, background: i32) -> CoreResult<bool> {
    Ok(inspect_border(grid, background)?.is_empty())
}
