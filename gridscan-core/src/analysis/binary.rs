//! Two-level (binary) image classification

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::grid::{SampleGrid, ensure_not_empty};

/// Background and foreground levels of a binary image.
///
/// `min` is the background ("off") level and `max` the foreground ("on")
/// level. A range with `min == max` is degenerate: there is no
/// foreground/background distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityRange {
    min: i32,
    max: i32,
}

impl IntensityRange {
    pub fn new(min: i32, max: i32) -> CoreResult<Self> {
        if min > max {
            return Err(CoreError::Precondition(format!(
                "intensity range min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn background(&self) -> i32 {
        self.min
    }

    pub fn foreground(&self) -> i32 {
        self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryClassification {
    /// Whether every sample equals `min` or `max`
    pub is_binary: bool,
    /// Smallest sample in the grid
    pub min: i32,
    /// Largest sample in the grid
    pub max: i32,
}

impl BinaryClassification {
    /// The background/foreground levels, available only for binary images.
    ///
    /// # Errors
    ///
    /// `CoreError::NotBinary` when the image has more than two levels; its
    /// `min`/`max` must not be treated as background/foreground.
    pub fn range(&self) -> CoreResult<IntensityRange> {
        if !self.is_binary {
            return Err(CoreError::NotBinary {
                min: self.min,
                max: self.max,
            });
        }
        Ok(IntensityRange {
            min: self.min,
            max: self.max,
        })
    }

    /// Constant image: binary, but without a foreground.
    pub fn is_degenerate(&self) -> bool {
        self.is_binary && self.min == self.max
    }
}

/// Classifies a grid as binary or not.
///
/// The range is a reduction seeded from the first sample, so grids whose
/// levels are all negative or never include 0 get their true extremes. The
/// second scan stops at the first sample that is neither extreme.
pub fn classify<G: SampleGrid>(grid: &G) -> CoreResult<BinaryClassification> {
    ensure_not_empty(grid)?;

    let mut samples = grid.samples();
    // ensure_not_empty guarantees at least one sample
    let first = samples
        .next()
        .ok_or(CoreError::EmptyGrid {
            height: grid.height(),
            width: grid.width(),
        })?;
    let (min, max) = samples.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let is_binary = grid.samples().all(|v| v == min || v == max);

    log::debug!(
        "Binary check on {}x{}: binary={} min={} max={}",
        grid.height(),
        grid.width(),
        is_binary,
        min,
        max
    );

    Ok(BinaryClassification {
        is_binary,
        min,
        max,
    })
}
