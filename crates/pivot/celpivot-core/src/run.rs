//! Run orchestration: guards, undo-group wrapping, the commit-once walk over
//! the frame range, and restoration of the host state the run touches.

use crate::data::{FrameRange, PixelPoint, MIN_SELECTED_FRAMES};
use crate::dedup::in_between_cels;
use crate::error::HostError;
use crate::host::{CelId, ColumnKind, ColumnRef, HostSession, NodeRef, PivotMode};
use crate::interp::{step_pivot, to_pixels};
use crate::outputs::{Guard, Outcome, PivotCommit, RunSummary};

/// Label of the single undo group wrapping the whole run.
pub const UNDO_LABEL: &str = "Set Interpolated drawing pivots";

/// Execute one batch interpolation run against the host.
///
/// Guard failures surface as `Outcome::Skipped` after an informational
/// dialog, with no undo group opened and no host state mutated. Host
/// failures propagate; pivots committed before the failure stay committed
/// (the host's undo group is the only recovery), but the pivot mode and
/// current frame are still restored and the undo group is still closed.
pub fn run(session: &mut dyn HostSession) -> Result<Outcome, HostError> {
    let node = match session.selected_drawing_node()? {
        Some(node) => node,
        None => {
            session.info_message(Guard::NoDrawingNode.message());
            return Ok(Outcome::Skipped(Guard::NoDrawingNode));
        }
    };

    let selection = session.frame_selection()?;
    let range = FrameRange::from_selection(selection.first_frame, selection.num_frames);
    if range.len() < MIN_SELECTED_FRAMES {
        session.info_message(Guard::InsufficientCels.message());
        return Ok(Outcome::Skipped(Guard::InsufficientCels));
    }

    let kind = if session.element_mode(&node)? {
        ColumnKind::Element
    } else {
        ColumnKind::Timing
    };
    let column = session.linked_column(&node, kind)?;

    let cels = in_between_cels(|f| session.cel_at(&column, f), range)?;
    if cels.is_empty() {
        session.info_message(Guard::InsufficientCels.message());
        return Ok(Outcome::Skipped(Guard::InsufficientCels));
    }

    session.begin_undo_group(UNDO_LABEL);
    let result = set_pivots_on_middle_frames(session, &node, &column, range, &cels)
        .and_then(|summary| {
            // Park the timeline on the last selected frame before the
            // transaction closes. The commit loop has already rewound to the
            // first frame; callers must not rely on ending there.
            session.set_current_frame(range.last)?;
            Ok(summary)
        });
    session.end_undo_group();

    let summary = result?;
    log::info!("finished setting drawing pivots on {} cels", summary.cels_set());
    Ok(Outcome::Applied(summary))
}

/// Force the embedded-pivot mode to apply-on-drawing, walk the range, and
/// restore the original mode and the current frame on every exit path.
fn set_pivots_on_middle_frames(
    session: &mut dyn HostSession,
    node: &NodeRef,
    column: &ColumnRef,
    range: FrameRange,
    cels: &[CelId],
) -> Result<RunSummary, HostError> {
    let original_mode = session.pivot_mode(node)?;
    if original_mode != PivotMode::ApplyOnDrawing {
        session.set_pivot_mode(node, PivotMode::ApplyOnDrawing)?;
    }

    let result = commit_interpolated_pivots(session, node, column, range, cels);

    // Restoration runs regardless of the loop's outcome; the loop result
    // still takes precedence when surfacing an error.
    let mode_restore = session.set_pivot_mode(node, original_mode);
    let frame_restore = session.set_current_frame(range.first);

    let summary = result?;
    mode_restore?;
    frame_restore?;
    Ok(summary)
}

/// Walk every frame of the range in increasing order and commit one pivot
/// per distinct in-between cel, at that cel's first occurrence.
fn commit_interpolated_pivots(
    session: &mut dyn HostSession,
    node: &NodeRef,
    column: &ColumnRef,
    range: FrameRange,
    cels: &[CelId],
) -> Result<RunSummary, HostError> {
    let first_pivot = session.pivot_at(node, range.first)?;
    let last_pivot = session.pivot_at(node, range.last)?;
    let aspect = session.units_aspect()?.ratio();

    session.select_pivot_tool()?;

    let mut committed: Vec<CelId> = Vec::new();
    let mut commits: Vec<PivotCommit> = Vec::new();

    for f in range.frames() {
        // The pivot tool operates against "current frame" state, so the
        // frame and drawing are selected before each potential commit.
        session.set_current_frame(f)?;
        session.set_current_drawing(node, f)?;

        let cur = session.cel_at(column, f)?;
        let index = match cels.iter().position(|c| c == &cur) {
            Some(i) => i,
            None => continue,
        };
        if committed.contains(&cur) {
            continue;
        }

        // The cel's position in the deduplicated list fixes its step, not
        // the frame being visited.
        let frac = step_pivot(first_pivot, last_pivot, cels.len(), index + 1);
        let pixel: PixelPoint = to_pixels(frac, aspect);
        session.commit_pivot_at(pixel)?;
        log::debug!(
            "set pivot for cel '{}' at frame {}: ({}, {})",
            cur,
            f,
            pixel.x,
            pixel.y
        );

        committed.push(cur.clone());
        commits.push(PivotCommit {
            frame: f,
            cel: cur,
            pixel,
        });
    }

    Ok(RunSummary { commits })
}
