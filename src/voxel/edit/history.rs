//! Bounded undo/redo history of edit records.
//!
//! Records live in one ordered buffer split by a cursor: entries before the
//! cursor can be undone, entries from the cursor on can be redone. Recording a
//! new edit drops everything redoable, so the history is always a single line.

use std::collections::VecDeque;

use super::record::EditRecord;
use super::supply::BlockSupply;

/// Default number of edits kept per session
pub const DEFAULT_HISTORY_CAPACITY: usize = 15;

/// Result of an undo or redo.
#[derive(Debug)]
pub struct Replayed<'a, E> {
    /// The history entry that was undone or redone. It stays in the history.
    pub original: &'a E,
    /// Sibling record holding the changes the replay just made
    pub applied: E,
}

/// Cursor-addressed history of edit records.
///
/// Invariant: `cursor <= entries.len() <= capacity`.
#[derive(Debug)]
pub struct EditHistory<E> {
    entries: VecDeque<E>,
    cursor: usize,
    capacity: usize,
}

impl<E: EditRecord> EditHistory<E> {
    /// Create an empty history keeping at most `capacity` edits (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Record an applied edit.
    ///
    /// Empty edits are ignored. Anything still redoable is discarded, and the
    /// oldest entries are evicted once the history is over capacity.
    pub fn remember(&mut self, edit: E) {
        if edit.is_empty() {
            return;
        }

        let abandoned = self.entries.len() - self.cursor;
        if abandoned > 0 {
            self.entries.truncate(self.cursor);
            log::debug!("Discarded {} redoable edit(s)", abandoned);
        }

        self.entries.push_back(edit);

        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            log::debug!("Evicted {} edit(s) from history (capacity {})", evicted, self.capacity);
        }

        self.cursor = self.entries.len();
    }

    /// Undo the most recent undoable edit. `None` if there is nothing to undo.
    pub fn undo(&mut self, supply: Option<&mut dyn BlockSupply>) -> Option<Replayed<'_, E>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let original = &self.entries[self.cursor];
        let applied = original.undo(supply);
        log::trace!("Undid edit {} ({} changes)", self.cursor, original.size());
        Some(Replayed { original, applied })
    }

    /// Redo the oldest redoable edit. `None` if there is nothing to redo.
    pub fn redo(&mut self, supply: Option<&mut dyn BlockSupply>) -> Option<Replayed<'_, E>> {
        if self.cursor == self.entries.len() {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        let original = &self.entries[index];
        let applied = original.redo(supply);
        log::trace!("Redid edit {} ({} changes)", index, original.size());
        Some(Replayed { original, applied })
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

impl<E> EditHistory<E> {
    /// Number of stored edits
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no edits are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored edits
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Boundary between undoable and redoable entries
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of edits that can be undone
    pub fn undo_count(&self) -> usize {
        self.cursor
    }

    /// Number of edits that can be redone
    pub fn redo_count(&self) -> usize {
        self.entries.len() - self.cursor
    }

    /// Check if there is an edit to undo
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if there is an edit to redo
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Stored edits, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }
}

impl<E: EditRecord> Default for EditHistory<E> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
