//! Single-pass 4-connectivity labeling
//!
//! The labeler walks the grid once in raster order, looking only at the
//! north and west neighbours of each pixel. It does not keep the label grid
//! globally consistent: when both neighbours are labeled, only the west
//! neighbour is rewritten to the north label. The label grid itself is
//! scratch state and is dropped on return; callers observe the scalars in
//! [`ConnectivityReport`].
//!
//! Beside the as-built labels the labeler records every forced unification
//! in a union-find table. That table never feeds back into the labels, it
//! only yields the exact component count.

use serde::{Deserialize, Serialize};

use crate::analysis::binary::IntensityRange;
use crate::error::CoreResult;
use crate::grid::{Cell, SampleGrid, ensure_not_empty};

/// Result of [`label_components`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityReport {
    /// Height of the labeled grid
    pub height: usize,
    /// Width of the labeled grid
    pub width: usize,
    /// Background level the scan compared against
    pub background: i32,
    /// A foreground pixel joined an already-labeled neighbour somewhere.
    /// This is the "is 4-connected" flag of the classic check; it does not
    /// mean the foreground forms a single component.
    pub merge_occurred: bool,
    /// Pixels whose north and west neighbours carried different labels
    pub label_conflicts: usize,
    /// Number of background pixels seen by the scan
    pub background_count: usize,
    /// One background pixel, the last one scanned
    pub example_background: Option<Cell>,
    /// 2x2 windows whose two foreground samples touch only diagonally
    pub diagonal_contacts: usize,
    /// Top-left cell of the first such window
    pub first_diagonal_contact: Option<Cell>,
    /// Exact number of 4-connected foreground components
    pub component_count: usize,
}

impl ConnectivityReport {
    /// Whether some foreground is 8-adjacent without being 4-adjacent
    pub fn has_ambiguous_contacts(&self) -> bool {
        self.diagonal_contacts > 0
    }
}

/// Row-major component labels, 0 for background.
struct LabelGrid {
    width: usize,
    labels: Vec<u32>,
}

impl LabelGrid {
    fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            labels: vec![0; height * width],
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> u32 {
        self.labels[row * self.width + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, label: u32) {
        self.labels[row * self.width + col] = label;
    }
}

/// Union-find over labels. Index 0 is the background and never used.
struct Equivalences {
    parent: Vec<u32>,
}

impl Equivalences {
    fn new() -> Self {
        Self { parent: vec![0] }
    }

    /// Allocates a label that has never been used before.
    fn fresh(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    fn find(&mut self, mut label: u32) -> u32 {
        while self.parent[label as usize] != label {
            let grandparent = self.parent[self.parent[label as usize] as usize];
            self.parent[label as usize] = grandparent;
            label = grandparent;
        }
        label
    }

    fn union(&mut self, a: u32, b: u32) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[big as usize] = small;
        }
    }

    fn component_count(&mut self) -> usize {
        let labels = self.parent.len() as u32;
        (1..labels).filter(|&label| self.find(label) == label).count()
    }
}

struct Labeler<'a, G: SampleGrid> {
    grid: &'a G,
    background: i32,
    labels: LabelGrid,
    equivalences: Equivalences,
    merge_occurred: bool,
    label_conflicts: usize,
    background_count: usize,
    example_background: Option<Cell>,
    diagonal_contacts: usize,
    first_diagonal_contact: Option<Cell>,
}

impl<'a, G: SampleGrid> Labeler<'a, G> {
    fn new(grid: &'a G, background: i32) -> Self {
        Self {
            grid,
            background,
            labels: LabelGrid::new(grid.height(), grid.width()),
            equivalences: Equivalences::new(),
            merge_occurred: false,
            label_conflicts: 0,
            background_count: 0,
            example_background: None,
            diagonal_contacts: 0,
            first_diagonal_contact: None,
        }
    }

    #[inline]
    fn is_foreground(&self, row: usize, col: usize) -> bool {
        self.grid.sample_at(row, col) != self.background
    }

    fn record_background(&mut self, row: usize, col: usize) {
        self.background_count += 1;
        self.example_background = Some(Cell::new(row, col));
    }

    /// Row 0 then column 0: every foreground pixel gets its own label.
    fn seed_border(&mut self) {
        let (h, w) = (self.grid.height(), self.grid.width());
        for col in 0..w {
            self.seed(0, col);
            if col > 0 {
                self.join(0, col - 1, 0, col);
            }
        }
        for row in 1..h {
            self.seed(row, 0);
            self.join(row - 1, 0, row, 0);
        }
    }

    fn seed(&mut self, row: usize, col: usize) {
        if self.is_foreground(row, col) {
            let label = self.equivalences.fresh();
            self.labels.set(row, col, label);
        } else {
            self.record_background(row, col);
        }
    }

    /// Records that two labeled pixels are 4-adjacent.
    fn join(&mut self, r1: usize, c1: usize, r2: usize, c2: usize) {
        let (a, b) = (self.labels.get(r1, c1), self.labels.get(r2, c2));
        if a != 0 && b != 0 {
            self.equivalences.union(a, b);
        }
    }

    /// Pulls the neighbours of the origin onto the origin's label.
    fn unify_origin(&mut self) {
        let origin = self.labels.get(0, 0);
        if origin == 0 {
            return;
        }
        if self.grid.height() > 1 && self.labels.get(1, 0) != 0 {
            self.labels.set(1, 0, origin);
            self.merge_occurred = true;
        }
        if self.grid.width() > 1 && self.labels.get(0, 1) != 0 {
            self.labels.set(0, 1, origin);
            self.merge_occurred = true;
        }
    }

    fn scan_interior(&mut self) {
        let (h, w) = (self.grid.height(), self.grid.width());
        for row in 1..h {
            for col in 1..w {
                self.check_diagonal(row, col);

                if !self.is_foreground(row, col) {
                    self.labels.set(row, col, 0);
                    self.record_background(row, col);
                    continue;
                }

                let north = self.labels.get(row - 1, col);
                let west = self.labels.get(row, col - 1);
                let label = match (north, west) {
                    (0, 0) => self.equivalences.fresh(),
                    (_, 0) => {
                        self.merge_occurred = true;
                        north
                    }
                    (0, _) => {
                        self.merge_occurred = true;
                        west
                    }
                    _ => {
                        if north != west {
                            self.label_conflicts += 1;
                            self.equivalences.union(north, west);
                        }
                        // only the immediate west neighbour is rewritten
                        self.labels.set(row, col - 1, north);
                        self.merge_occurred = true;
                        north
                    }
                };
                self.labels.set(row, col, label);
            }
        }
    }

    /// Looks at the 2x2 window whose bottom-right cell is (row, col).
    fn check_diagonal(&mut self, row: usize, col: usize) {
        let nw = self.is_foreground(row - 1, col - 1);
        let n = self.is_foreground(row - 1, col);
        let w = self.is_foreground(row, col - 1);
        let here = self.is_foreground(row, col);

        let main_diagonal = nw && here && !n && !w;
        let anti_diagonal = n && w && !nw && !here;
        if main_diagonal || anti_diagonal {
            self.diagonal_contacts += 1;
            self.first_diagonal_contact
                .get_or_insert(Cell::new(row - 1, col - 1));
        }
    }

    fn into_report(mut self) -> ConnectivityReport {
        ConnectivityReport {
            height: self.grid.height(),
            width: self.grid.width(),
            background: self.background,
            merge_occurred: self.merge_occurred,
            label_conflicts: self.label_conflicts,
            background_count: self.background_count,
            example_background: self.example_background,
            diagonal_contacts: self.diagonal_contacts,
            first_diagonal_contact: self.first_diagonal_contact,
            component_count: self.equivalences.component_count(),
        }
    }
}

/// Labels the foreground of a binary grid in one raster pass.
///
/// `range` must come from a binary classification of the same grid; the
/// labeler does not re-validate that. Pixels equal to `range.background()`
/// are background, everything else is foreground.
pub fn label_components<G: SampleGrid>(
    grid: &G,
    range: IntensityRange,
) -> CoreResult<ConnectivityReport> {
    ensure_not_empty(grid)?;

    let mut labeler = Labeler::new(grid, range.background());
    labeler.seed_border();
    labeler.unify_origin();
    labeler.scan_interior();

    log::trace!(
        "Labeling used {} provisional labels",
        labeler.equivalences.parent.len() - 1
    );

    let report = labeler.into_report();
    log::debug!(
        "Connectivity on {}x{}: merged={} conflicts={} background={} diagonal={} components={}",
        report.height,
        report.width,
        report.merge_occurred,
        report.label_conflicts,
        report.background_count,
        report.diagonal_contacts,
        report.component_count
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::grid::GrayGrid;

    fn label(rows: &[[i32; 5]]) -> ConnectivityReport {
        let grid = GrayGrid::from_rows(rows).unwrap();
        label_components(&grid, IntensityRange::new(0, 1).unwrap()).unwrap()
    }

    #[test]
    fn test_single_pixel_has_no_merge() {
        let report = label(&[
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ]);
        assert!(!report.merge_occurred);
        assert_eq!(report.background_count, 5 * 5 - 1);
        assert_eq!(report.label_conflicts, 0);
        assert_eq!(report.component_count, 1);
        assert_eq!(report.example_background, Some(Cell::new(4, 4)));
    }

    #[test]
    fn test_l_shape_bend_is_not_a_conflict() {
        // Two pixels thick: at (2,2), (3,2) and (3,3) north and west are both
        // labeled, and with the same label.
        let report = label(&[
            [0, 0, 0, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ]);
        assert!(report.merge_occurred);
        assert_eq!(report.label_conflicts, 0);
        assert_eq!(report.component_count, 1);
        assert_eq!(report.diagonal_contacts, 0);
        assert_eq!(report.background_count, 25 - 8);
    }

    #[test]
    fn test_thin_l_shape_never_sees_two_labels() {
        let report = label(&[
            [0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ]);
        assert!(report.merge_occurred);
        assert_eq!(report.label_conflicts, 0);
        assert_eq!(report.component_count, 1);
        assert_eq!(report.background_count, 25 - 5);
    }

    #[test]
    fn test_block_corner_sees_same_label_twice() {
        // At (2,2) north and west both carry the label seeded at (1,1).
        let report = label(&[
            [0, 0, 0, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ]);
        assert!(report.merge_occurred);
        assert_eq!(report.label_conflicts, 0);
        assert_eq!(report.component_count, 1);
    }

    #[test]
    fn test_arms_meeting_force_a_unification() {
        let report = label(&[
            [0, 0, 0, 0, 0],
            [0, 1, 0, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ]);
        assert!(report.merge_occurred);
        assert_eq!(report.label_conflicts, 1);
        assert_eq!(report.component_count, 1);
    }

    #[test]
    fn test_separate_blobs_are_separate_components() {
        let report = label(&[
            [0, 0, 0, 0, 0],
            [0, 1, 0, 1, 0],
            [0, 1, 0, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
        ]);
        assert_eq!(report.component_count, 3);
        assert_eq!(report.label_conflicts, 0);
        assert!(!report.has_ambiguous_contacts());
    }

    #[test]
    fn test_diagonal_contacts_are_reported() {
        let report = label(&[
            [0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ]);
        assert_eq!(report.diagonal_contacts, 2);
        assert_eq!(report.first_diagonal_contact, Some(Cell::new(1, 1)));
        assert_eq!(report.component_count, 3);
        assert!(!report.merge_occurred);
    }

    #[test]
    fn test_foreground_border_is_seeded_and_unified() {
        let grid = GrayGrid::from_rows(&[[1, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        let report = label_components(&grid, IntensityRange::new(0, 1).unwrap()).unwrap();
        assert!(report.merge_occurred);
        assert_eq!(report.background_count, 1);
        assert_eq!(report.example_background, Some(Cell::new(1, 1)));
        assert_eq!(report.label_conflicts, 1);
        assert_eq!(report.component_count, 1);
    }

    #[test]
    fn test_single_column_grid() {
        let grid = GrayGrid::from_rows(&[[1], [1], [0]]).unwrap();
        let report = label_components(&grid, IntensityRange::new(0, 1).unwrap()).unwrap();
        assert!(report.merge_occurred);
        assert_eq!(report.background_count, 1);
        assert_eq!(report.component_count, 1);
    }

    #[test]
    fn test_negative_levels() {
        let grid = GrayGrid::from_rows(&[[-9, -9, -9], [-9, -2, -9], [-9, -9, -9]]).unwrap();
        let report = label_components(&grid, IntensityRange::new(-9, -2).unwrap()).unwrap();
        assert_eq!(report.background, -9);
        assert_eq!(report.background_count, 8);
        assert_eq!(report.component_count, 1);
    }

    #[test]
    fn test_labeling_is_idempotent() {
        let grid = GrayGrid::from_rows(&[
            [0, 0, 0, 0, 0],
            [0, 1, 0, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();
        let range = IntensityRange::new(0, 1).unwrap();
        assert_eq!(
            label_components(&grid, range).unwrap(),
            label_components(&grid, range).unwrap()
        );
    }

    struct EmptyGrid;

    impl SampleGrid for EmptyGrid {
        fn height(&self) -> usize {
            0
        }
        fn width(&self) -> usize {
            4
        }
        fn sample_at(&self, _row: usize, _col: usize) -> i32 {
            unreachable!("empty grid has no samples")
        }
    }

    #[test]
    fn test_empty_grid_is_a_precondition_failure() {
        let range = IntensityRange::new(0, 1).unwrap();
        assert!(matches!(
            label_components(&EmptyGrid, range),
            Err(CoreError::EmptyGrid { height: 0, width: 4 })
        ));
    }
}
