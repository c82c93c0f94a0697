//! Core data model for one pivot interpolation run.
//!
//! All values are constructed fresh from host state at invocation start and
//! discarded at invocation end; nothing here persists across runs.

use serde::{Deserialize, Serialize};

/// 1-based position along the host timeline.
pub type FrameIndex = u32;

/// Smallest usable selection: first cel + last cel + at least one in-between.
pub const MIN_SELECTED_FRAMES: u32 = 3;

/// Inclusive frame range as selected in the host timeline.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameRange {
    pub first: FrameIndex,
    pub last: FrameIndex,
}

impl FrameRange {
    /// Build a range from the host's (first frame, frame count) selection shape.
    pub fn from_selection(first_frame: FrameIndex, num_frames: u32) -> Self {
        Self {
            first: first_frame,
            last: first_frame + num_frames.saturating_sub(1),
        }
    }

    /// Number of frames in the range, boundaries included.
    pub fn len(&self) -> u32 {
        if self.last < self.first {
            0
        } else {
            self.last - self.first + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All frames of the range in increasing order.
    pub fn frames(&self) -> impl Iterator<Item = FrameIndex> {
        self.first..=self.last
    }

    /// Strictly interior frames, in increasing order. Empty for ranges
    /// shorter than three frames.
    pub fn interior(&self) -> impl Iterator<Item = FrameIndex> {
        (self.first + 1)..=self.last.saturating_sub(1)
    }
}

/// Pivot position in the host's normalized scene-unit space.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PivotPoint {
    pub x: f32,
    pub y: f32,
}

/// Pivot position in the host's pixel-addressed space, ready for the
/// interactive pivot tool.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

/// Scene unit aspect components as reported by the host.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UnitsAspect {
    pub x: f32,
    pub y: f32,
}

impl UnitsAspect {
    /// Vertical correction factor applied to pixel-space Y.
    pub fn ratio(&self) -> f32 {
        self.y / self.x
    }
}

impl Default for UnitsAspect {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}
