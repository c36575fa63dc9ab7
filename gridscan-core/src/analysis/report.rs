//! Analysis report structure and display logic

use serde::{Deserialize, Serialize};

use super::binary::BinaryClassification;
use super::border::BorderReport;
use super::connectivity::ConnectivityReport;
use super::objects::ObjectCount;

/// Combined verdicts of the four analyzers for one grid.
///
/// `border` and `connectivity` are `None` when the image is not binary,
/// since neither has a background level to work with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub height: usize,
    pub width: usize,
    pub binary: BinaryClassification,
    pub border: Option<BorderReport>,
    pub connectivity: Option<ConnectivityReport>,
    pub objects: ObjectCount,
}

impl AnalysisReport {
    pub fn is_binary(&self) -> bool {
        self.binary.is_binary
    }

    pub fn is_border_empty(&self) -> bool {
        self.border.as_ref().is_some_and(BorderReport::is_empty)
    }

    /// Returns individual analysis step results as (name, passed, detail)
    pub fn get_analysis_steps(&self) -> Vec<(String, bool, String)> {
        let mut steps = Vec::new();

        // Binary classification
        let binary_detail = if self.binary.is_degenerate() {
            format!("Single level {}", self.binary.min)
        } else if self.binary.is_binary {
            format!(
                "Binary (background {}, foreground {})",
                self.binary.min, self.binary.max
            )
        } else {
            format!(
                "More than two levels (min {}, max {})",
                self.binary.min, self.binary.max
            )
        };
        steps.push(("Binary image".to_string(), self.binary.is_binary, binary_detail));

        // Border inspection
        match &self.border {
            Some(border) if border.is_empty() => steps.push((
                "Empty border".to_string(),
                true,
                format!("All border samples are {}", border.background),
            )),
            Some(border) => {
                let mut detail = format!("Non-background on {}", border.failing_sides().join(", "));
                if let Some(cell) = border.first_violation {
                    detail.push_str(&format!(", first at {cell}"));
                }
                steps.push(("Empty border".to_string(), false, detail));
            }
            None => steps.push((
                "Empty border".to_string(),
                false,
                "Skipped (no background level)".to_string(),
            )),
        }

        // Connectivity labeling
        match &self.connectivity {
            Some(conn) => {
                let mut detail = format!(
                    "merge {}, {} label conflict(s), {} component(s), {} background pixel(s)",
                    if conn.merge_occurred { "occurred" } else { "not needed" },
                    conn.label_conflicts,
                    conn.component_count,
                    conn.background_count
                );
                if let Some(cell) = conn.example_background {
                    detail.push_str(&format!(", e.g. {cell}"));
                }
                if let Some(cell) = conn.first_diagonal_contact {
                    detail.push_str(&format!(
                        "; {} diagonal contact(s), first at {cell}",
                        conn.diagonal_contacts
                    ));
                }
                steps.push((
                    "4-connectivity".to_string(),
                    !conn.has_ambiguous_contacts(),
                    detail,
                ));
            }
            None => steps.push((
                "4-connectivity".to_string(),
                false,
                "Skipped (no background level)".to_string(),
            )),
        }

        // Object count
        match &self.objects {
            ObjectCount::Counted(tally) => steps.push((
                "Object count".to_string(),
                true,
                format!(
                    "{} object(s) (external {}, internal {}, components {})",
                    tally.object_count,
                    tally.external_corners,
                    tally.internal_corners,
                    tally.component_count
                ),
            )),
            ObjectCount::Unavailable(reason) => steps.push((
                "Object count".to_string(),
                false,
                format!("Unavailable: {reason}"),
            )),
        }

        steps
    }

    /// Returns a list of failed steps
    pub fn get_failures(&self) -> Vec<String> {
        self.get_analysis_steps()
            .into_iter()
            .filter(|(_, passed, _)| !passed)
            .map(|(name, _, detail)| format!("{name}: {detail}"))
            .collect()
    }
}
