// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::columns::Column;
use super::position::{center_x, ColumnOrder, SlotPositions};
use crate::model::{Adjacency, StratGraph};

/// Minimum phase distance for a relation to count as long.
pub const LONG_EDGE_SPAN: usize = 2;

/// Flags both endpoints of every relation whose endpoints sit in real phases at least
/// [`LONG_EDGE_SPAN`] apart.
pub fn long_edge_slots(graph: &StratGraph, adjacency: &Adjacency) -> Vec<bool> {
    let phase_of = graph
        .units()
        .iter()
        .map(|unit| graph.unit_phase_index(unit))
        .collect::<Vec<_>>();

    let mut marked = vec![false; graph.units().len()];
    for edge in adjacency.resolved() {
        let (Some(source), Some(target)) = (phase_of[edge.source], phase_of[edge.target]) else {
            continue;
        };
        if source.abs_diff(target) >= LONG_EDGE_SPAN {
            marked[edge.source] = true;
            marked[edge.target] = true;
        }
    }
    marked
}

/// Moves the columns holding long-edge endpoints to the flanks of their band.
///
/// A flagged column goes left when the mean center of all its units' neighbors lies left of the
/// band's bounding-box center, right otherwise. Left columns are ordered by ascending mean, right
/// columns by descending mean, so the columns nearest the center stay innermost. Bands with two
/// columns or fewer are left alone.
pub fn place_long_edges_outside(
    columns: &[Column],
    order: &[usize],
    positions: &SlotPositions,
    widths: &[f64],
    adjacency: &Adjacency,
    marked: &[bool],
) -> ColumnOrder {
    if order.len() <= 2 {
        return order.to_vec();
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &column_idx in order {
        for slot in columns[column_idx].slots() {
            if let Some(point) = positions.get(slot).copied().flatten() {
                min_x = min_x.min(point.x());
                max_x = max_x.max(point.x() + widths[slot]);
            }
        }
    }
    let center = (min_x + max_x) / 2.0;

    let mut left = Vec::<(usize, f64)>::new();
    let mut right = Vec::<(usize, f64)>::new();
    let mut inner = Vec::<usize>::new();
    for &column_idx in order {
        let column = &columns[column_idx];
        if !column.slots().any(|slot| marked[slot]) {
            inner.push(column_idx);
            continue;
        }

        let centers = column
            .slots()
            .flat_map(|slot| adjacency.neighbors(slot).iter().copied())
            .filter_map(|other| center_x(positions, widths, other))
            .collect::<Vec<_>>();
        let mean = if centers.is_empty() {
            center
        } else {
            centers.iter().sum::<f64>() / centers.len() as f64
        };

        if mean < center {
            left.push((column_idx, mean));
        } else {
            right.push((column_idx, mean));
        }
    }

    if left.is_empty() && right.is_empty() {
        return order.to_vec();
    }

    left.sort_by(|a, b| a.1.total_cmp(&b.1));
    right.sort_by(|a, b| b.1.total_cmp(&a.1));

    left.into_iter()
        .map(|(idx, _)| idx)
        .chain(inner)
        .chain(right.into_iter().map(|(idx, _)| idx))
        .collect()
}
