// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Consistency checks for a matrix snapshot.
//!
//! The validator reads a [`StratGraph`] and reports what it finds; it never changes the graph.
//! Relations and object members that point at missing units are skipped everywhere.

mod issue;
mod phasing;
mod report;
mod structure;


pub use issue::{Issue, IssueKind, Severity};
pub use report::{render_report, IssueCounts, ValidationReport};

use crate::model::{Adjacency, StratGraph};

pub(crate) struct CheckContext<'a> {
    graph: &'a StratGraph,
    adjacency: Adjacency,
    /// Resolved phase index per unit slot.
    phase_of: Vec<Option<usize>>,
}

impl<'a> CheckContext<'a> {
    fn new(graph: &'a StratGraph) -> Self {
        let phase_of = graph.units().iter().map(|unit| graph.unit_phase_index(unit)).collect();
        Self { graph, adjacency: graph.adjacency(), phase_of }
    }
}

type Check = fn(&CheckContext<'_>, &mut Vec<Issue>);

const CHECKS: [(&str, Check); 8] = [
    ("duplicate_labels", structure::duplicate_labels),
    ("cycles", structure::cycles),
    ("phase_direction", phasing::phase_direction),
    ("phase_skips", phasing::phase_skips),
    ("isolated_units", structure::isolated_units),
    ("missing_phases", phasing::missing_phases),
    ("dangling_ends", phasing::dangling_ends),
    ("redundant_relations", structure::redundant_relations),
];

/// Runs every check and returns the issues ordered error, warning, info.
pub fn validate_stratigraphy(graph: &StratGraph) -> ValidationReport {
    let _span = tracing::debug_span!(
        "validate_stratigraphy",
        units = graph.units().len(),
        relations = graph.relations().len()
    )
    .entered();

    let ctx = CheckContext::new(graph);
    let mut issues = Vec::new();
    for (name, check) in CHECKS {
        let before = issues.len();
        check(&ctx, &mut issues);
        tracing::trace!(check = name, found = issues.len() - before, "check done");
    }

    let report = ValidationReport::from_issues(issues);
    let counts = report.counts();
    tracing::debug!(
        errors = counts.error,
        warnings = counts.warning,
        infos = counts.info,
        "validation finished"
    );
    report
}
