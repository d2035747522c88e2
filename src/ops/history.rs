// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;

use super::{apply_ops, ApplyError, ApplyResult, Op};
use crate::model::{Matrix, StratGraph};

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Undo/redo over whole-graph snapshots.
///
/// Every successful, non-empty batch stores the graph it replaced. Undo and redo swap snapshots
/// in and out and bump the matrix revision like any other edit.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<StratGraph>,
    redo: Vec<StratGraph>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { undo: VecDeque::new(), redo: Vec::new(), capacity: capacity.max(1) }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Applies `ops` and remembers the previous graph. A new edit drops everything redoable.
    pub fn apply(
        &mut self,
        matrix: &mut Matrix,
        base_rev: u64,
        ops: &[Op],
    ) -> Result<ApplyResult, ApplyError> {
        let before = matrix.graph().clone();
        let result = apply_ops(matrix, base_rev, ops)?;
        if result.applied > 0 {
            self.record(before);
        }
        Ok(result)
    }

    /// Stores a snapshot taken before an edit made outside of [`History::apply`].
    pub fn record(&mut self, snapshot: StratGraph) {
        if self.undo.len() == self.capacity {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
        self.redo.clear();
    }

    /// Restores the previous snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, matrix: &mut Matrix) -> bool {
        let Some(snapshot) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(matrix.graph().clone());
        matrix.replace_graph(snapshot);
        matrix.bump_rev();
        tracing::debug!(rev = matrix.rev(), "undo");
        true
    }

    /// Re-applies the most recently undone snapshot. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self, matrix: &mut Matrix) -> bool {
        let Some(snapshot) = self.redo.pop() else {
            return false;
        };
        if self.undo.len() == self.capacity {
            self.undo.pop_front();
        }
        self.undo.push_back(matrix.graph().clone());
        matrix.replace_graph(snapshot);
        matrix.bump_rev();
        tracing::debug!(rev = matrix.rev(), "redo");
        true
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
