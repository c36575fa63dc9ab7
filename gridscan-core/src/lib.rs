//! Core library for structural analysis of grayscale raster grids.
//!
//! This crate answers four increasingly dependent questions about a grid of
//! integer intensities: is it binary, is its border empty, is its
//! foreground 4-connected without ambiguous merges, and how many objects
//! does it contain.
//!
//! ## Usage Example
//!
//! ```rust
//! use gridscan_core::{AnalysisConfig, GrayGrid, analyze};
//!
//! let grid = GrayGrid::from_rows(&[
//!     [0, 0, 0, 0, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 0, 0, 0, 0],
//! ])
//! .unwrap();
//!
//! let report = analyze(&grid, &AnalysisConfig::default()).unwrap();
//! assert!(report.is_binary());
//! assert_eq!(report.objects.objects(), Some(1));
//! ```
//!
//! The analyzers can also be driven one by one, feeding each upstream
//! result into the next step:
//!
//! ```rust
//! use gridscan_core::{AnalysisConfig, GrayGrid};
//! use gridscan_core::analysis::{classify, count_objects, is_border_empty, label_components};
//!
//! let grid = GrayGrid::from_rows(&[[0, 0, 0], [0, 9, 0], [0, 0, 0]]).unwrap();
//! let binary = classify(&grid).unwrap();
//! let range = binary.range().unwrap();
//! let border_empty = is_border_empty(&grid, range.background()).unwrap();
//! let connectivity = label_components(&grid, range).unwrap();
//! let count = count_objects(&grid, &binary, border_empty, &connectivity, &AnalysisConfig::default())
//!     .unwrap();
//! assert_eq!(count.objects(), Some(1));
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod grid;

// Re-exports for public API
pub use analysis::{AnalysisReport, ObjectCount, analyze, analyze_batch};
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use grid::{Cell, GrayGrid, SampleGrid};
