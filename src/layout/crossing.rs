// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use super::columns::{BandColumns, Column};
use super::position::{center_x, compile_positions, ColumnOrder, SlotPositions};
use super::settings::LayoutSettings;
use crate::model::Adjacency;

/// Number of down+up sweep pairs.
pub const CROSSING_PASSES: usize = 4;

/// Spacing of the fallback median for columns without placed neighbors.
const FALLBACK_STRIDE: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Order by the units above (relation sources).
    Down,
    /// Order by the units below (relation targets).
    Up,
}

#[derive(Debug, Clone, Copy)]
struct MedianKey {
    median: f64,
    connected: bool,
}

/// Reorders one band's columns by the median center of their neighbors in `direction`.
///
/// Columns with at least one placed neighbor sort before columns with none; ties keep the
/// current order. A column without neighbors gets `current index * 1000` as its median.
pub fn order_by_median(
    columns: &[Column],
    order: &[usize],
    positions: &SlotPositions,
    widths: &[f64],
    adjacency: &Adjacency,
    direction: SweepDirection,
) -> ColumnOrder {
    let keys = order
        .iter()
        .enumerate()
        .map(|(pos, &column_idx)| {
            let mut centers = Vec::new();
            for slot in columns[column_idx].slots() {
                let neighbors = match direction {
                    SweepDirection::Down => adjacency.predecessors(slot),
                    SweepDirection::Up => adjacency.successors(slot),
                };
                centers.extend(
                    neighbors.iter().filter_map(|&other| center_x(positions, widths, other)),
                );
            }
            match median(&mut centers) {
                Some(median) => MedianKey { median, connected: true },
                None => MedianKey { median: pos as f64 * FALLBACK_STRIDE, connected: false },
            }
        })
        .collect::<Vec<_>>();

    let mut ranked = (0..order.len()).collect::<Vec<_>>();
    ranked.sort_by(|&a, &b| compare_keys(keys[a], keys[b]));
    ranked.into_iter().map(|pos| order[pos]).collect()
}

fn compare_keys(a: MedianKey, b: MedianKey) -> Ordering {
    match (a.connected, b.connected) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.median.total_cmp(&b.median),
    }
}

fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Iterated median heuristic over all bands.
///
/// Each pass sweeps youngest to oldest using parents, then oldest to youngest using children.
/// Positions are recompiled after every band so the next band sees the updated order.
pub fn reduce_crossings(
    bands: &[BandColumns],
    widths: &[f64],
    adjacency: &Adjacency,
    settings: &LayoutSettings,
    passes: usize,
) -> Vec<ColumnOrder> {
    let mut orders = bands
        .iter()
        .map(|band| (0..band.columns().len()).collect::<ColumnOrder>())
        .collect::<Vec<_>>();

    for pass in 0..passes {
        let mut positions = compile_positions(bands, &orders, widths, settings);
        let sweep = |band_idx: usize,
                     direction: SweepDirection,
                     orders: &mut Vec<ColumnOrder>,
                     positions: &mut SlotPositions| {
            let band = &bands[band_idx];
            if band.is_empty() {
                return;
            }
            orders[band_idx] = order_by_median(
                band.columns(),
                &orders[band_idx],
                positions,
                widths,
                adjacency,
                direction,
            );
            *positions = compile_positions(bands, orders.as_slice(), widths, settings);
        };

        for band_idx in 0..bands.len() {
            sweep(band_idx, SweepDirection::Down, &mut orders, &mut positions);
        }
        for band_idx in (0..bands.len()).rev() {
            sweep(band_idx, SweepDirection::Up, &mut orders, &mut positions);
        }
        tracing::trace!(pass, "crossing reduction pass done");
    }

    orders
}
