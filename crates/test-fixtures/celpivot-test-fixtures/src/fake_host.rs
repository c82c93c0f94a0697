//! Scripted in-memory implementation of `HostSession`.
//!
//! The fake plays back a scene description and records every mutation the
//! run performs, so tests can assert commit order, mode restoration, frame
//! restoration, and undo-group pairing without a live host.

use std::collections::HashMap;

use celpivot_core::{
    CelId, ColumnKind, ColumnRef, FrameIndex, FrameSelection, HostError, HostSession, NodeRef,
    PivotMode, PivotPoint, PixelPoint, UnitsAspect,
};

use crate::SceneFixture;

/// Fake host session backed by scripted scene state.
#[derive(Clone, Debug)]
pub struct FakeHost {
    // Scripted scene state
    pub node: Option<NodeRef>,
    pub node_is_drawing: bool,
    pub element_mode: bool,
    pub selection: FrameSelection,
    pub cels: Vec<CelId>,
    pub pivots: HashMap<FrameIndex, PivotPoint>,
    pub pivot_mode: PivotMode,
    pub units_aspect: UnitsAspect,
    /// When set, the commit with this zero-based ordinal fails.
    pub fail_commit_at: Option<usize>,

    // Recorded observations
    pub current_frame: FrameIndex,
    pub frame_history: Vec<FrameIndex>,
    pub current_drawings: Vec<(NodeRef, FrameIndex)>,
    pub pivot_tool_selections: usize,
    pub mode_writes: Vec<PivotMode>,
    pub commits: Vec<(FrameIndex, PixelPoint)>,
    pub undo_begins: Vec<String>,
    pub undo_ends: usize,
    pub messages: Vec<String>,
}

impl FakeHost {
    /// Ad-hoc host with one drawing node whose selection covers frames
    /// `1..=cels.len()`.
    pub fn new(node: &str, cels: &[&str]) -> Self {
        Self {
            node: Some(node.to_string()),
            node_is_drawing: true,
            element_mode: true,
            selection: FrameSelection {
                first_frame: 1,
                num_frames: cels.len() as u32,
            },
            cels: cels.iter().map(|c| c.to_string()).collect(),
            pivots: HashMap::new(),
            pivot_mode: PivotMode::ApplyOnDrawing,
            units_aspect: UnitsAspect::default(),
            fail_commit_at: None,
            current_frame: 1,
            frame_history: Vec::new(),
            current_drawings: Vec::new(),
            pivot_tool_selections: 0,
            mode_writes: Vec::new(),
            commits: Vec::new(),
            undo_begins: Vec::new(),
            undo_ends: 0,
            messages: Vec::new(),
        }
    }

    pub fn from_fixture(fixture: &SceneFixture) -> Self {
        let mut host = Self::new("fixture-node", &[]);
        host.node = fixture.node.clone();
        host.node_is_drawing = fixture.node_is_drawing;
        host.element_mode = fixture.element_mode;
        host.selection = fixture.selection;
        host.cels = fixture.cels.clone();
        host.pivots = fixture.pivots.clone();
        host.pivot_mode = fixture.pivot_mode;
        host.units_aspect = fixture.units_aspect;
        host
    }

    pub fn with_pivots(mut self, first: PivotPoint, last: PivotPoint) -> Self {
        self.pivots.insert(self.selection.first_frame, first);
        let last_frame = self.selection.first_frame + self.selection.num_frames.saturating_sub(1);
        self.pivots.insert(last_frame, last);
        self
    }

    pub fn with_units_aspect(mut self, x: f32, y: f32) -> Self {
        self.units_aspect = UnitsAspect { x, y };
        self
    }

    pub fn with_pivot_mode(mut self, mode: PivotMode) -> Self {
        self.pivot_mode = mode;
        self
    }

    /// Make the commit with the given zero-based ordinal fail.
    pub fn failing_commit(mut self, ordinal: usize) -> Self {
        self.fail_commit_at = Some(ordinal);
        self
    }

    fn cel_index(&self, frame: FrameIndex) -> Option<usize> {
        if frame < self.selection.first_frame {
            return None;
        }
        let idx = (frame - self.selection.first_frame) as usize;
        if idx < self.cels.len() {
            Some(idx)
        } else {
            None
        }
    }
}

impl HostSession for FakeHost {
    fn selected_drawing_node(&self) -> Result<Option<NodeRef>, HostError> {
        Ok(self.node.clone().filter(|_| self.node_is_drawing))
    }

    fn frame_selection(&self) -> Result<FrameSelection, HostError> {
        Ok(self.selection)
    }

    fn element_mode(&self, _node: &NodeRef) -> Result<bool, HostError> {
        Ok(self.element_mode)
    }

    fn linked_column(&self, node: &NodeRef, kind: ColumnKind) -> Result<ColumnRef, HostError> {
        if self.cels.is_empty() {
            return Err(HostError::MissingColumn {
                node: node.clone(),
                kind,
            });
        }
        Ok(format!("{node}:{kind:?}"))
    }

    fn cel_at(&self, _column: &ColumnRef, frame: FrameIndex) -> Result<CelId, HostError> {
        self.cel_index(frame)
            .map(|i| self.cels[i].clone())
            .ok_or(HostError::MissingEntry { frame })
    }

    fn pivot_mode(&self, _node: &NodeRef) -> Result<PivotMode, HostError> {
        Ok(self.pivot_mode)
    }

    fn set_pivot_mode(&mut self, _node: &NodeRef, mode: PivotMode) -> Result<(), HostError> {
        self.pivot_mode = mode;
        self.mode_writes.push(mode);
        Ok(())
    }

    fn pivot_at(&self, _node: &NodeRef, frame: FrameIndex) -> Result<PivotPoint, HostError> {
        Ok(self.pivots.get(&frame).copied().unwrap_or_default())
    }

    fn set_current_frame(&mut self, frame: FrameIndex) -> Result<(), HostError> {
        self.current_frame = frame;
        self.frame_history.push(frame);
        Ok(())
    }

    fn set_current_drawing(&mut self, node: &NodeRef, frame: FrameIndex) -> Result<(), HostError> {
        self.current_drawings.push((node.clone(), frame));
        Ok(())
    }

    fn select_pivot_tool(&mut self) -> Result<(), HostError> {
        self.pivot_tool_selections += 1;
        Ok(())
    }

    fn commit_pivot_at(&mut self, pixel: PixelPoint) -> Result<(), HostError> {
        if self.fail_commit_at == Some(self.commits.len()) {
            return Err(HostError::CommitRejected {
                x: pixel.x,
                y: pixel.y,
            });
        }
        self.commits.push((self.current_frame, pixel));
        Ok(())
    }

    fn units_aspect(&self) -> Result<UnitsAspect, HostError> {
        Ok(self.units_aspect)
    }

    fn begin_undo_group(&mut self, label: &str) {
        self.undo_begins.push(label.to_string());
    }

    fn end_undo_group(&mut self) {
        self.undo_ends += 1;
    }

    fn info_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
