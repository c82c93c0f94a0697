//! Celpivot Core (host-agnostic)
//!
//! Batch tool logic for setting interpolated embedded pivots on the
//! in-between cels of a selected frame range. The crate defines the data
//! model, the cel deduplicator, the pure interpolation math, the
//! `HostSession` trait that adapters and fakes implement, and the run
//! orchestration that ties them together inside one undo group.

pub mod data;
pub mod dedup;
pub mod error;
pub mod host;
pub mod interp;
pub mod outputs;
pub mod run;

// Re-exports for consumers (adapters and test fakes)
pub use data::{FrameIndex, FrameRange, PivotPoint, PixelPoint, UnitsAspect, MIN_SELECTED_FRAMES};
pub use dedup::in_between_cels;
pub use error::HostError;
pub use host::{CelId, ColumnKind, ColumnRef, FrameSelection, HostSession, NodeRef, PivotMode};
pub use interp::{step_pivot, to_pixels, FIELD_SCALE};
pub use outputs::{Guard, Outcome, PivotCommit, RunSummary};
pub use run::{run, UNDO_LABEL};
