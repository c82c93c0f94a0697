//! Output contracts of one run: per-cel commits, the success summary, and
//! the guard conditions under which the run is skipped without mutation.

use serde::{Deserialize, Serialize};

use crate::data::{FrameIndex, PixelPoint};
use crate::host::CelId;

/// One embedded-pivot write, recorded at the frame where the cel first
/// occurs inside the range.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PivotCommit {
    pub frame: FrameIndex,
    pub cel: CelId,
    pub pixel: PixelPoint,
}

/// Summary of a completed run.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    pub commits: Vec<PivotCommit>,
}

impl RunSummary {
    /// Number of distinct cels that received a pivot.
    pub fn cels_set(&self) -> usize {
        self.commits.len()
    }
}

/// Precondition that stopped a run before any mutation.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Guard {
    /// Selection is absent or not a drawing node.
    NoDrawingNode,
    /// Fewer than three frames selected, or every interior frame repeats a
    /// boundary cel.
    InsufficientCels,
}

impl Guard {
    /// Dialog text shown to the user when the guard fires.
    pub fn message(&self) -> &'static str {
        match self {
            Guard::NoDrawingNode => "Please select a drawing node before running the script.",
            Guard::InsufficientCels => {
                "At least 3 cels need to be selected for the script to work."
            }
        }
    }
}

/// Result of a run that did not hit a host failure.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Outcome {
    /// Pivots were committed; the summary lists them in frame order.
    Applied(RunSummary),
    /// A guard fired; no undo group was opened and nothing was mutated.
    Skipped(Guard),
}
