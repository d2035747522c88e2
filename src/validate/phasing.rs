// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashSet, VecDeque};

use super::issue::{Issue, IssueKind};
use super::CheckContext;

/// Relations whose source lies in an older phase than their target.
pub(crate) fn phase_direction(ctx: &CheckContext<'_>, issues: &mut Vec<Issue>) {
    let units = ctx.graph.units();
    let phases = ctx.graph.phases();
    for edge in ctx.adjacency.resolved() {
        let (Some(source_phase), Some(target_phase)) =
            (ctx.phase_of[edge.source], ctx.phase_of[edge.target])
        else {
            continue;
        };
        if source_phase <= target_phase {
            continue;
        }

        let (source, target) = (&units[edge.source], &units[edge.target]);
        let relation = &ctx.graph.relations()[edge.relation];
        issues.push(
            Issue::new(
                IssueKind::PhaseDirection,
                format!(
                    "{} ({}) → {} ({}): older phase above younger",
                    source.label(),
                    phases[source_phase].name(),
                    target.label(),
                    phases[target_phase].name()
                ),
                vec![source.unit_id().clone(), target.unit_id().clone()],
            )
            .with_relation(relation.relation_id().clone()),
        );
    }
}

/// Downward relations jumping over at least one phase with no alternative path through any
/// of the skipped phases.
pub(crate) fn phase_skips(ctx: &CheckContext<'_>, issues: &mut Vec<Issue>) {
    let units = ctx.graph.units();
    let phases = ctx.graph.phases();
    for edge in ctx.adjacency.resolved() {
        let (Some(source_phase), Some(target_phase)) =
            (ctx.phase_of[edge.source], ctx.phase_of[edge.target])
        else {
            continue;
        };
        if target_phase < source_phase + 2 {
            continue;
        }
        if has_path_through_skipped(ctx, edge.source, edge.target, source_phase, target_phase) {
            continue;
        }

        let skipped = phases[source_phase + 1..target_phase]
            .iter()
            .map(|phase| phase.name())
            .collect::<Vec<_>>()
            .join(", ");
        let (source, target) = (&units[edge.source], &units[edge.target]);
        let relation = &ctx.graph.relations()[edge.relation];
        issues.push(
            Issue::new(
                IssueKind::PhaseSkip,
                format!("{} → {} skips {}", source.label(), target.label(), skipped),
                vec![source.unit_id().clone(), target.unit_id().clone()],
            )
            .with_relation(relation.relation_id().clone()),
        );
    }
}

/// Breadth-first search from `source` that never steps onto `target`, stopping at the first
/// unit whose phase lies strictly between the two.
fn has_path_through_skipped(
    ctx: &CheckContext<'_>,
    source: usize,
    target: usize,
    source_phase: usize,
    target_phase: usize,
) -> bool {
    let mut visited = HashSet::from([source]);
    let mut queue = VecDeque::from([source]);
    while let Some(current) = queue.pop_front() {
        for &next in ctx.adjacency.successors(current) {
            if next == target || !visited.insert(next) {
                continue;
            }
            if ctx.phase_of[next].is_some_and(|phase| phase > source_phase && phase < target_phase) {
                return true;
            }
            queue.push_back(next);
        }
    }
    false
}

/// Units without a phase, or pointing at a phase that no longer exists.
pub(crate) fn missing_phases(ctx: &CheckContext<'_>, issues: &mut Vec<Issue>) {
    for (slot, unit) in ctx.graph.units().iter().enumerate() {
        if ctx.phase_of[slot].is_none() {
            issues.push(Issue::new(
                IssueKind::NoPhase,
                format!("{} has no phase assigned", unit.label()),
                vec![unit.unit_id().clone()],
            ));
        }
    }
}

/// Phased units that end the sequence early: nothing below outside the oldest phase, or
/// nothing above outside the youngest phase.
pub(crate) fn dangling_ends(ctx: &CheckContext<'_>, issues: &mut Vec<Issue>) {
    let phases = ctx.graph.phases();
    let Some(oldest) = phases.len().checked_sub(1) else {
        return;
    };

    for (slot, unit) in ctx.graph.units().iter().enumerate() {
        let Some(phase) = ctx.phase_of[slot] else {
            continue;
        };
        let name = phases[phase].name();
        if ctx.adjacency.successors(slot).is_empty() && phase != oldest {
            issues.push(Issue::new(
                IssueKind::DanglingLeaf,
                format!("{} ({}) has no units below", unit.label(), name),
                vec![unit.unit_id().clone()],
            ));
        }
        if ctx.adjacency.predecessors(slot).is_empty() && phase != 0 {
            issues.push(Issue::new(
                IssueKind::DanglingRoot,
                format!("{} ({}) has no units above", unit.label(), name),
                vec![unit.unit_id().clone()],
            ));
        }
    }
}
