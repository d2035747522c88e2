// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use super::issue::{Issue, IssueKind};
use super::CheckContext;

/// Labels that collide once case and whitespace are ignored, one issue per group.
pub(crate) fn duplicate_labels(ctx: &CheckContext<'_>, issues: &mut Vec<Issue>) {
    let units = ctx.graph.units();
    let mut group_of = HashMap::<String, usize>::new();
    let mut groups = Vec::<Vec<usize>>::new();
    for (slot, unit) in units.iter().enumerate() {
        let key = normalize_label(unit.label());
        match group_of.get(&key) {
            Some(&group) => groups[group].push(slot),
            None => {
                group_of.insert(key, groups.len());
                groups.push(vec![slot]);
            }
        }
    }

    for group in groups.into_iter().filter(|group| group.len() > 1) {
        let first = &units[group[0]];
        issues.push(Issue::new(
            IssueKind::DuplicateLabel,
            format!("Duplicate label \"{}\" used by {} units", first.label(), group.len()),
            group.iter().map(|&slot| units[slot].unit_id().clone()).collect(),
        ));
    }
}

pub(crate) fn normalize_label(label: &str) -> String {
    label.chars().filter(|ch| !ch.is_whitespace()).flat_map(char::to_lowercase).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    White,
    Gray,
    Black,
}

/// Depth-first search over all units in unit order; every back edge to a unit still on the
/// stack yields one cycle, listed from that unit down to the unit closing it.
pub(crate) fn cycles(ctx: &CheckContext<'_>, issues: &mut Vec<Issue>) {
    let units = ctx.graph.units();
    let len = units.len();
    let mut marks = vec![Mark::White; len];
    let mut parent = vec![None::<usize>; len];
    // (unit, index of the next successor to look at)
    let mut stack = Vec::<(usize, usize)>::new();

    for root in 0..len {
        if marks[root] != Mark::White {
            continue;
        }
        marks[root] = Mark::Gray;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, next) = *frame;
            let Some(&child) = ctx.adjacency.successors(current).get(next) else {
                marks[current] = Mark::Black;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match marks[child] {
                Mark::Gray => {
                    let mut path = vec![child];
                    let mut tail = Vec::new();
                    let mut cursor = Some(current);
                    while let Some(slot) = cursor {
                        if slot == child {
                            break;
                        }
                        tail.push(slot);
                        cursor = parent[slot];
                    }
                    path.extend(tail.into_iter().rev());

                    let labels = path
                        .iter()
                        .chain(std::iter::once(&child))
                        .map(|&slot| units[slot].label())
                        .collect::<Vec<_>>();
                    issues.push(Issue::new(
                        IssueKind::Cycle,
                        format!("Cycle: {}", labels.join(" → ")),
                        path.iter().map(|&slot| units[slot].unit_id().clone()).collect(),
                    ));
                }
                Mark::White => {
                    parent[child] = Some(current);
                    marks[child] = Mark::Gray;
                    stack.push((child, 0));
                }
                Mark::Black => {}
            }
        }
    }
}

/// Units without any relation to an existing unit.
pub(crate) fn isolated_units(ctx: &CheckContext<'_>, issues: &mut Vec<Issue>) {
    for (slot, unit) in ctx.graph.units().iter().enumerate() {
        if ctx.adjacency.neighbors(slot).is_empty() {
            issues.push(Issue::new(
                IssueKind::Isolated,
                format!("{} has no stratigraphic relations", unit.label()),
                vec![unit.unit_id().clone()],
            ));
        }
    }
}

/// A relation `u → v` is redundant when another direct successor of `u` already reaches `v`.
pub(crate) fn redundant_relations(ctx: &CheckContext<'_>, issues: &mut Vec<Issue>) {
    let units = ctx.graph.units();
    let mut reachable = HashMap::new();

    for edge in ctx.adjacency.resolved() {
        let implied = ctx
            .adjacency
            .successors(edge.source)
            .iter()
            .copied()
            .filter(|&child| child != edge.target)
            .any(|child| {
                reachable
                    .entry(child)
                    .or_insert_with(|| ctx.adjacency.reachable_from(child))
                    .contains(&edge.target)
            });
        if !implied {
            continue;
        }

        let relation = &ctx.graph.relations()[edge.relation];
        let (source, target) = (&units[edge.source], &units[edge.target]);
        issues.push(
            Issue::new(
                IssueKind::RedundantEdge,
                format!("{} → {} is redundant (transitively implied)", source.label(), target.label()),
                vec![source.unit_id().clone(), target.unit_id().clone()],
            )
            .with_relation(relation.relation_id().clone()),
        );
    }
}
