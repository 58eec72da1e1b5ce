// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every binding of a logic variable records the value it replaced. When the
//! engine backtracks it rewinds the trail to a checkpoint, restoring those
//! values newest first.

use crate::context::{Bindings, Variable};

/// A single entry in the trail, recording one binding.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    var: Variable,
    old_value: Option<i64>,
}

/// Undo log for variable bindings.
///
/// A checkpoint is simply the trail length at some moment; the engine keeps
/// one per stack entry.
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum trail size. The triple program binds at most three variables
    /// per path, so hitting this means a predicate forgot to backtrack.
    const MAX_SIZE: usize = 1024;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(16),
        }
    }

    /// Record a binding change.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search program).
    pub(crate) fn record_change(&mut self, var: Variable, old_value: Option<i64>) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry { var, old_value });
    }

    /// Undo all changes recorded after `checkpoint`.
    ///
    /// Rewinding to a checkpoint at or beyond the current length is a no-op.
    pub fn rewind_to(&mut self, checkpoint: usize, bindings: &mut Bindings) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                bindings.replace(entry.var, entry.old_value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
