//! Host session trait: the narrow seam between the core and the authoring
//! tool it drives.
//!
//! Adapters implement this against the live host's scripting surface; tests
//! substitute a scripted fake. The core only ever touches host state through
//! this trait, so the whole run is checkable without a host process.

use serde::{Deserialize, Serialize};

use crate::data::{FrameIndex, PivotPoint, PixelPoint, UnitsAspect};
use crate::error::HostError;

/// Opaque node reference (small string key).
pub type NodeRef = String;

/// Opaque reference to a column linked to a drawing node.
pub type ColumnRef = String;

/// Identifier of one unique piece of artwork. Multiple frames may expose the
/// same cel; equality is by value.
pub type CelId = String;

/// Which linked column supplies cel identifiers for a node.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ColumnKind {
    /// The element column, used when the node is in element mode.
    Element,
    /// The custom-name timing column.
    Timing,
}

/// A drawing node's pivot-application mode.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PivotMode {
    ApplyOnParentPeg,
    DontUse,
    ApplyOnDrawing,
}

/// Timeline selection as the host reports it: first frame plus a count.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameSelection {
    pub first_frame: FrameIndex,
    pub num_frames: u32,
}

/// Synchronous host primitives consumed by the run.
///
/// Every fallible call either succeeds or is fatal to the run; there are no
/// retries. The undo-group and messaging calls cannot fail.
pub trait HostSession {
    /// Currently selected node, or `None` when the selection is absent or is
    /// not a drawing node.
    fn selected_drawing_node(&self) -> Result<Option<NodeRef>, HostError>;

    fn frame_selection(&self) -> Result<FrameSelection, HostError>;

    /// Whether the node reads cel timing from its element column.
    fn element_mode(&self, node: &NodeRef) -> Result<bool, HostError>;

    fn linked_column(&self, node: &NodeRef, kind: ColumnKind) -> Result<ColumnRef, HostError>;

    fn cel_at(&self, column: &ColumnRef, frame: FrameIndex) -> Result<CelId, HostError>;

    fn pivot_mode(&self, node: &NodeRef) -> Result<PivotMode, HostError>;

    fn set_pivot_mode(&mut self, node: &NodeRef, mode: PivotMode) -> Result<(), HostError>;

    /// Pivot position of the node at a frame, in normalized scene units.
    fn pivot_at(&self, node: &NodeRef, frame: FrameIndex) -> Result<PivotPoint, HostError>;

    fn set_current_frame(&mut self, frame: FrameIndex) -> Result<(), HostError>;

    /// Make the node's cel at `frame` the active drawing for tool operations.
    fn set_current_drawing(&mut self, node: &NodeRef, frame: FrameIndex) -> Result<(), HostError>;

    /// Switch the host's active interactive tool to pivot placement.
    fn select_pivot_tool(&mut self) -> Result<(), HostError>;

    /// Simulate pointer-down/pointer-up with the active pivot tool, setting
    /// the current drawing's embedded pivot.
    fn commit_pivot_at(&mut self, pixel: PixelPoint) -> Result<(), HostError>;

    fn units_aspect(&self) -> Result<UnitsAspect, HostError>;

    fn begin_undo_group(&mut self, label: &str);

    fn end_undo_group(&mut self);

    /// Modal informational dialog shown on guard failures.
    fn info_message(&mut self, text: &str);
}
