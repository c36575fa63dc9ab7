//! Structural analysis of binary grids
//!
//! This module provides the four analyzers and the orchestration that runs
//! them in dependency order.
//!
//! # Organization
//!
//! - `binary`: two-level classification and the intensity range
//! - `border`: border emptiness inspection
//! - `connectivity`: single-pass 4-connectivity labeling
//! - `objects`: corner-pattern object counting
//! - `report`: combined report structure and display logic
//! - `pipeline`: main analysis orchestration

pub mod binary;
pub mod border;
pub mod connectivity;
pub mod objects;
mod pipeline;
mod report;

pub use self::binary::{BinaryClassification, IntensityRange, classify};
pub use self::border::{BorderReport, inspect_border, is_border_empty};
pub use self::connectivity::{ConnectivityReport, label_components};
pub use self::objects::{
    Corner, GateReason, ObjectCount, ObjectTally, classify_window, count_corners, count_objects,
};
pub use self::pipeline::{analyze, analyze_batch};
pub use self::report::AnalysisReport;
