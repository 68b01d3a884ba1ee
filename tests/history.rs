use image::Rgba;
use paintbox::canvas::PixelBuffer;
use paintbox::{PaintSession, Tool, UNDO_STACK_LIMIT};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// One committed pencil edit: a click that paints a dot at (x, y).
fn dot(session: &mut PaintSession, x: f32, y: f32) {
    session.pointer_down(x, y);
    session.pointer_up(x, y);
}

fn session_with_pencil() -> PaintSession {
    let mut session = PaintSession::new(64, 64);
    session.set_tool(Tool::Pencil);
    session.set_color(BLACK);
    session.set_stroke_size(1);
    session
}

#[test]
fn single_undo_then_redo_restores_the_state_after_the_first_edit() {
    let mut session = session_with_pencil();
    let blank = session.buffer().clone();

    dot(&mut session, 3.0, 3.0);
    let after_e1 = session.buffer().clone();
    dot(&mut session, 9.0, 9.0);

    session.undo();
    assert!(*session.buffer() == blank);
    session.redo();
    assert!(*session.buffer() == after_e1);
}

#[test]
fn undo_and_redo_walk_the_snapshot_stacks_symmetrically() {
    // Snapshots are taken before each edit, so k-1 undos reach the initial
    // state and k-1 redos come forward to the state after edit k-1. This
    // mirrors the pre-edit-snapshot stack discipline exactly.
    let mut session = session_with_pencil();
    let blank = session.buffer().clone();

    let k = 5;
    let mut states: Vec<PixelBuffer> = Vec::new();
    for i in 0..k {
        dot(&mut session, (i * 3) as f32, (i * 3) as f32);
        states.push(session.buffer().clone());
    }

    for _ in 0..k - 1 {
        session.undo();
    }
    assert!(*session.buffer() == blank);

    for _ in 0..k - 1 {
        session.redo();
    }
    assert!(*session.buffer() == states[k - 2]);
}

#[test]
fn undo_at_the_floor_is_a_noop() {
    let mut session = session_with_pencil();
    let blank = session.buffer().clone();
    assert!(!session.can_undo());
    session.undo();
    session.undo();
    assert!(*session.buffer() == blank);
}

#[test]
fn history_evicts_oldest_snapshots_first() {
    let mut session = session_with_pencil();

    let edits = UNDO_STACK_LIMIT + 5;
    let mut states: Vec<PixelBuffer> = Vec::new();
    for i in 0..edits {
        dot(&mut session, (i * 2) as f32, 0.0);
        states.push(session.buffer().clone());
    }

    let mut undos = 0;
    while session.can_undo() {
        session.undo();
        undos += 1;
    }

    // The stack held the last UNDO_STACK_LIMIT pre-edit snapshots, so the
    // deepest reachable state is the one left after the evicted edits.
    assert_eq!(undos, UNDO_STACK_LIMIT - 1);
    let evicted = edits - UNDO_STACK_LIMIT;
    assert!(*session.buffer() == states[evicted - 1]);
}

#[test]
fn new_edit_invalidates_redo_history() {
    let mut session = session_with_pencil();
    dot(&mut session, 5.0, 5.0);
    dot(&mut session, 10.0, 10.0);
    session.undo();
    assert!(session.can_redo());

    dot(&mut session, 20.0, 20.0);
    assert!(!session.can_redo());
    session.redo(); // no-op
    assert_eq!(session.buffer().get_pixel(20, 20), BLACK);
}

#[test]
fn snapshots_do_not_alias_the_live_buffer() {
    let mut session = session_with_pencil();
    dot(&mut session, 8.0, 8.0);
    // Scribble over a different spot; the snapshot taken before this edit
    // must not see it.
    dot(&mut session, 30.0, 30.0);
    session.undo();
    assert_eq!(session.buffer().get_pixel(30, 30), paintbox::BACKGROUND);
}
