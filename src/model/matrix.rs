// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::graph::StratGraph;

/// The editable document: a named matrix snapshot plus a revision counter.
///
/// The revision is bumped once per applied op batch and lets callers detect stale edits.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    name: String,
    graph: StratGraph,
    rev: u64,
}

impl Matrix {
    pub fn new(name: impl Into<String>, graph: StratGraph) -> Self {
        Self { name: name.into(), graph, rev: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn graph(&self) -> &StratGraph {
        &self.graph
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub(crate) fn replace_graph(&mut self, graph: StratGraph) {
        self.graph = graph;
    }

    pub(crate) fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }
}
