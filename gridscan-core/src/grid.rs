//! Grid abstraction shared by every analyzer.
//!
//! Analyzers only ever need three things from an image container: its
//! height, its width and the sample at a coordinate. `SampleGrid` captures
//! exactly that, so any caller-owned image type can be analyzed without
//! copying. `GrayGrid` is the owned implementation used by the CLI and the
//! tests.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A (row, column) coordinate inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Read-only, row-major view over integer samples.
///
/// Implementors guarantee that `sample_at(row, col)` is valid for every
/// `row < height()` and `col < width()`. Analyzers never read outside that
/// range and never mutate the grid.
pub trait SampleGrid {
    fn height(&self) -> usize;
    fn width(&self) -> usize;
    fn sample_at(&self, row: usize, col: usize) -> i32;

    /// Iterates every sample in row-major order.
    fn samples(&self) -> Samples<'_, Self>
    where
        Self: Sized,
    {
        Samples {
            grid: self,
            index: 0,
        }
    }

    fn len(&self) -> usize {
        self.height() * self.width()
    }

    fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }
}

/// Row-major sample iterator returned by [`SampleGrid::samples`].
pub struct Samples<'a, G: ?Sized + SampleGrid> {
    grid: &'a G,
    index: usize,
}

impl<G: SampleGrid> Iterator for Samples<'_, G> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let width = self.grid.width();
        if width == 0 || self.index >= self.grid.len() {
            return None;
        }
        let (row, col) = (self.index / width, self.index % width);
        self.index += 1;
        Some(self.grid.sample_at(row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

/// Fails fast on a grid with a zero dimension.
pub(crate) fn ensure_not_empty<G: SampleGrid + ?Sized>(grid: &G) -> CoreResult<()> {
    if grid.is_empty() {
        return Err(CoreError::EmptyGrid {
            height: grid.height(),
            width: grid.width(),
        });
    }
    Ok(())
}

/// Owned grayscale grid of `i32` samples stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrayGrid {
    height: usize,
    width: usize,
    data: Vec<i32>,
}

impl GrayGrid {
    /// Builds a grid from row-major samples.
    ///
    /// # Errors
    ///
    /// * `CoreError::EmptyGrid` if either dimension is zero
    /// * `CoreError::DimensionMismatch` if `data.len() != height * width`
    pub fn new(height: usize, width: usize, data: Vec<i32>) -> CoreResult<Self> {
        if height == 0 || width == 0 {
            return Err(CoreError::EmptyGrid { height, width });
        }
        let expected = height * width;
        if data.len() != expected {
            return Err(CoreError::DimensionMismatch {
                height,
                width,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Builds a grid from a list of equally long rows.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> CoreResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Self::new(height, width, data)
    }

    /// Builds a `height x width` grid filled with `level`.
    pub fn filled(height: usize, width: usize, level: i32) -> CoreResult<Self> {
        Self::new(height, width, vec![level; height * width])
    }

    pub fn row(&self, row: usize) -> &[i32] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Returns a copy with one sample replaced. Intended for building test
    /// fixtures; analyzers never mutate grids.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    pub fn with_sample(mut self, row: usize, col: usize, value: i32) -> Self {
        assert!(
            row < self.height && col < self.width,
            "sample ({row},{col}) outside {}x{} grid",
            self.height,
            self.width
        );
        self.data[row * self.width + col] = value;
        self
    }
}

impl SampleGrid for GrayGrid {
    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn sample_at(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.width + col]
    }
}

impl<G: SampleGrid + ?Sized> SampleGrid for &G {
    fn height(&self) -> usize {
        (**self).height()
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn sample_at(&self, row: usize, col: usize) -> i32 {
        (**self).sample_at(row, col)
    }
}
