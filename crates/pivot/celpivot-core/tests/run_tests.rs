use celpivot_core::{
    run, Guard, HostError, Outcome, PivotMode, PivotPoint, RunSummary, FIELD_SCALE, UNDO_LABEL,
};
use celpivot_test_fixtures::{scenes, FakeHost};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn applied(outcome: Outcome) -> RunSummary {
    match outcome {
        Outcome::Applied(summary) => summary,
        other => panic!("expected Applied, got {other:?}"),
    }
}

/// it should commit one interpolated pivot per distinct in-between cel, in
/// increasing frame order
#[test]
fn walk_cycle_sets_two_pivots_in_frame_order() {
    let mut host = scenes::fake_host("walk_cycle").unwrap();
    let summary = applied(run(&mut host).unwrap());

    assert_eq!(summary.cels_set(), 2);

    // arm_tween_1 is step 1 of 3, first seen at frame 2.
    assert_eq!(summary.commits[0].frame, 2);
    assert_eq!(summary.commits[0].cel, "arm_tween_1");
    approx(summary.commits[0].pixel.x, FIELD_SCALE, 1e-3);
    approx(summary.commits[0].pixel.y, 0.0, 1e-3);

    // arm_tween_2 is step 2 of 3, first seen at frame 3.
    assert_eq!(summary.commits[1].frame, 3);
    assert_eq!(summary.commits[1].cel, "arm_tween_2");
    approx(summary.commits[1].pixel.x, 2.0 * FIELD_SCALE, 1e-3);
    approx(summary.commits[1].pixel.y, 0.0, 1e-3);

    // The host saw exactly two tool commits, at frames 2 and 3; the repeat
    // of arm_tween_1 at frame 4 triggered nothing.
    let frames: Vec<_> = host.commits.iter().map(|(f, _)| *f).collect();
    assert_eq!(frames, vec![2, 3]);
    assert_eq!(host.pivot_tool_selections, 1);
}

/// it should force apply-on-drawing for the run and write the original mode
/// back afterward
#[test]
fn pivot_mode_forced_and_restored() {
    let mut host = scenes::fake_host("walk_cycle").unwrap();
    applied(run(&mut host).unwrap());

    assert_eq!(
        host.mode_writes,
        vec![PivotMode::ApplyOnDrawing, PivotMode::ApplyOnParentPeg]
    );
    assert_eq!(host.pivot_mode, PivotMode::ApplyOnParentPeg);
}

/// it should not force the mode when it is already apply-on-drawing, but
/// still restore it on exit
#[test]
fn apply_on_drawing_mode_restored_without_forcing() {
    let mut host = FakeHost::new("Top/cut-out/leg", &["key_a", "tween", "key_b"]).with_pivots(
        PivotPoint { x: 0.0, y: 0.0 },
        PivotPoint { x: 2.0, y: 2.0 },
    );
    applied(run(&mut host).unwrap());

    assert_eq!(host.mode_writes, vec![PivotMode::ApplyOnDrawing]);
    assert_eq!(host.pivot_mode, PivotMode::ApplyOnDrawing);
}

#[test]
fn run_is_wrapped_in_one_undo_group() {
    let mut host = scenes::fake_host("walk_cycle").unwrap();
    applied(run(&mut host).unwrap());

    assert_eq!(host.undo_begins, vec![UNDO_LABEL.to_string()]);
    assert_eq!(host.undo_ends, 1);
}

/// it should park the timeline on the last selected frame after a
/// successful run (the commit loop itself rewinds to the first frame)
#[test]
fn timeline_parked_on_last_frame_after_success() {
    let mut host = scenes::fake_host("walk_cycle").unwrap();
    applied(run(&mut host).unwrap());

    assert_eq!(host.current_frame, 5);
    // Loop visits 1..=5, restoration rewinds to 1, then the runner parks
    // on the last frame.
    assert_eq!(host.frame_history, vec![1, 2, 3, 4, 5, 1, 5]);
}

#[test]
fn held_cel_selection_is_a_guarded_noop() {
    let mut host = scenes::fake_host("held_cel").unwrap();
    let outcome = run(&mut host).unwrap();

    assert_eq!(outcome, Outcome::Skipped(Guard::InsufficientCels));
    assert_eq!(host.messages, vec![Guard::InsufficientCels.message()]);
    assert!(host.commits.is_empty());
    assert!(host.mode_writes.is_empty());
    assert!(host.undo_begins.is_empty());
}

#[test]
fn two_frame_selection_is_a_guarded_noop() {
    let mut host = scenes::fake_host("short_selection").unwrap();
    let outcome = run(&mut host).unwrap();

    assert_eq!(outcome, Outcome::Skipped(Guard::InsufficientCels));
    assert!(host.commits.is_empty());
}

#[test]
fn non_drawing_selection_is_a_guarded_noop() {
    let mut host = scenes::fake_host("not_a_drawing").unwrap();
    let outcome = run(&mut host).unwrap();

    assert_eq!(outcome, Outcome::Skipped(Guard::NoDrawingNode));
    assert_eq!(host.messages, vec![Guard::NoDrawingNode.message()]);
    assert!(host.undo_begins.is_empty());
}

/// it should apply the vertical unit-aspect correction to pixel Y only
#[test]
fn tall_aspect_scales_pixel_y() {
    let mut host = scenes::fake_host("tall_aspect").unwrap();
    let summary = applied(run(&mut host).unwrap());

    assert_eq!(summary.cels_set(), 1);
    // Midpoint of (1,1)..(2,3) is (1.5, 2); aspect y/x = 2.
    approx(summary.commits[0].pixel.x, 1.5 * FIELD_SCALE, 1e-3);
    approx(summary.commits[0].pixel.y, 2.0 * 2.0 * FIELD_SCALE, 1e-2);
}

/// it should assign step indices 1..=N in first-occurrence order, giving
/// strictly increasing positions along the first->last segment
#[test]
fn step_positions_cover_the_segment_evenly() {
    let cels = ["k0", "t1", "t2", "t3", "t4", "t5", "k1"];
    let mut host = FakeHost::new("Top/fx/streak", &cels).with_pivots(
        PivotPoint { x: 0.0, y: 0.0 },
        PivotPoint { x: 6.0, y: 0.0 },
    );
    let summary = applied(run(&mut host).unwrap());

    assert_eq!(summary.cels_set(), 5);
    for (i, commit) in summary.commits.iter().enumerate() {
        approx(commit.pixel.x, (i + 1) as f32 * FIELD_SCALE, 1e-2);
    }
}

/// it should propagate a failed commit without retry, keep earlier commits,
/// and still restore the pivot mode, the current frame, and the undo group
#[test]
fn host_failure_aborts_but_restores_state() {
    let mut host = scenes::fake_host("walk_cycle").unwrap();
    host = host.failing_commit(1);

    let err = run(&mut host).unwrap_err();
    assert!(matches!(err, HostError::CommitRejected { .. }));

    assert_eq!(host.commits.len(), 1);
    assert_eq!(host.pivot_mode, PivotMode::ApplyOnParentPeg);
    assert_eq!(host.current_frame, 1);
    assert_eq!(host.undo_begins.len(), 1);
    assert_eq!(host.undo_ends, 1);
}
