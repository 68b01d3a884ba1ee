use std::collections::VecDeque;

use crate::canvas::PixelBuffer;

/// Maximum number of snapshots retained on the undo stack. The oldest is
/// evicted first when the cap is reached.
pub const UNDO_STACK_LIMIT: usize = 25;

/// Bounded undo/redo stacks of full-buffer snapshots.
///
/// The undo stack always holds at least one entry once seeded — the floor
/// snapshot of the blank canvas — so undo can never pop the session into a
/// stateless void. Snapshots are deep copies: pushing and restoring clone
/// the pixel grid, so no stack entry aliases the live buffer.
pub struct HistoryManager {
    undo: VecDeque<PixelBuffer>,
    redo: Vec<PixelBuffer>,
}

impl HistoryManager {
    /// Create a history seeded with one snapshot of `initial`.
    pub fn new(initial: &PixelBuffer) -> Self {
        let mut undo = VecDeque::new();
        undo.push_back(initial.clone());
        Self { undo, redo: Vec::new() }
    }

    /// Record the pre-edit state of `live`. Evicts the oldest snapshot at
    /// capacity and invalidates all redo history.
    pub fn push_undo(&mut self, live: &PixelBuffer) {
        if self.undo.len() >= UNDO_STACK_LIMIT {
            self.undo.pop_front();
        }
        self.undo.push_back(live.clone());
        self.redo.clear();
    }

    /// Step back one edit. A no-op when only the floor snapshot remains.
    pub fn undo(&mut self, live: &mut PixelBuffer) {
        if self.undo.len() > 1 {
            // The popped entry is the state being left; what remains on top
            // is the state to return to.
            let top = self.undo.pop_back().expect("undo stack checked non-empty");
            self.redo.push(top);
            let restore = self.undo.back().expect("floor snapshot always present");
            *live = restore.clone();
        }
    }

    /// Step forward one undone edit. A no-op when the redo stack is empty.
    pub fn redo(&mut self, live: &mut PixelBuffer) {
        if let Some(state) = self.redo.pop() {
            *live = state.clone();
            self.undo.push_back(state);
        }
    }

    /// Drop all history and re-seed with one snapshot of `live`. Used on
    /// new-file and on canvas resize.
    pub fn clear(&mut self, live: &PixelBuffer) {
        self.undo.clear();
        self.redo.clear();
        self.undo.push_back(live.clone());
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
