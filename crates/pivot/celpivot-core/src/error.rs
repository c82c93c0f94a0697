//! Error contract for host primitives.
//!
//! Guard conditions (nothing selected, too few cels) are not errors; they are
//! modeled as `Outcome::Skipped` in outputs.rs. Everything here is a failed
//! host call, which aborts the run without retry.

use thiserror::Error;

use crate::data::FrameIndex;
use crate::host::ColumnKind;

/// Errors produced by host primitives during a run.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("node '{node}' has no linked {kind:?} column")]
    MissingColumn { node: String, kind: ColumnKind },
    #[error("column has no entry at frame {frame}")]
    MissingEntry { frame: FrameIndex },
    #[error("pivot tool rejected commit at ({x}, {y})")]
    CommitRejected { x: f32, y: f32 },
    #[error("host call failed: {0}")]
    Call(String),
}
