//! Snapshot-based undo/redo history.

use crate::schema::DesignData;

/// Maximum number of undo states to keep. When the limit is reached the
/// oldest snapshot is evicted first.
pub const MAX_HISTORY: usize = 50;

/// Linear undo/redo history over serialized document snapshots.
///
/// Entries are full [`DesignData`] snapshots, never references into the live
/// document, so later mutations cannot corrupt recorded states. Recording a
/// new snapshot discards the redo branch.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<DesignData>,
    redo_stack: Vec<DesignData>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the document state as it was before a mutation. Call this
    /// right before applying the change so the first undo reverts exactly
    /// that change.
    pub fn record(&mut self, snapshot: DesignData) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Step back one entry. `current` is the live state, which becomes
    /// redoable. Returns the snapshot to restore, or `None` at the start
    /// of history.
    pub fn undo(&mut self, current: DesignData) -> Option<DesignData> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snapshot)
    }

    /// Step forward one entry. `current` is the live state, which becomes
    /// undoable again. Returns the snapshot to restore, or `None` at the
    /// end of history.
    pub fn redo(&mut self, current: DesignData) -> Option<DesignData> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(snapshot)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of retrievable undo entries.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Check if there are no undo entries.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Drop all recorded states, e.g. after loading a new document.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
