// SPDX-License-Identifier: GPL-3.0-or-later
// src/session/history.rs
//
// Bounded two-stack undo/redo over editor snapshots.

use std::collections::VecDeque;

use super::snapshot::EditorSnapshot;

/// Undo/redo history with a bounded depth.
///
/// `save` is called with the state as it was immediately before a discrete
/// action mutates it (save-before-mutate). A new save discards any pending
/// redo branch.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: VecDeque<EditorSnapshot>,
    redo_stack: VecDeque<EditorSnapshot>,
    depth: usize,
}

impl EditHistory {
    pub fn new(depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            depth: depth.max(1),
        }
    }

    /// Push a pre-action snapshot. Evicts the oldest entry past the depth
    /// bound and clears the redo stack.
    pub fn save(&mut self, snapshot: EditorSnapshot) {
        self.redo_stack.clear();
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.depth {
            self.undo_stack.pop_front();
        }
    }

    /// Pop the most recent snapshot, pushing `current` onto the redo
    /// stack. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: EditorSnapshot) -> Option<EditorSnapshot> {
        let restored = self.undo_stack.pop_back()?;
        self.redo_stack.push_back(current);
        Some(restored)
    }

    /// Symmetric to `undo`.
    pub fn redo(&mut self, current: EditorSnapshot) -> Option<EditorSnapshot> {
        let restored = self.redo_stack.pop_back()?;
        self.undo_stack.push_back(current);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;
