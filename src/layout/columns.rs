// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, HashMap};

use smallvec::SmallVec;

use super::rank::{BandKey, RankedBand};
use super::settings::LayoutSettings;
use crate::model::{ObjectId, StratGraph};

/// Units sharing one rank row of a column.
pub type Cell = SmallVec<[usize; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    Object(ObjectId),
    Loose,
}

/// A vertical strip of a band: either every unit of one object, or a single loose unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    kind: ColumnKind,
    cells: BTreeMap<usize, Cell>,
    width: f64,
}

impl Column {
    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, ColumnKind::Object(_))
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Units at `rank`, sorted by label.
    pub fn cell(&self, rank: usize) -> &[usize] {
        self.cells.get(&rank).map(|cell| cell.as_slice()).unwrap_or(&[])
    }

    /// Every unit slot of the column, top row first.
    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.values().flat_map(|cell| cell.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BandColumns {
    key: BandKey,
    max_rank: usize,
    columns: Vec<Column>,
}

impl BandColumns {
    pub fn key(&self) -> BandKey {
        self.key
    }

    pub fn max_rank(&self) -> usize {
        self.max_rank
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Splits a ranked band into columns.
///
/// A unit belonging to an object lands in the column of its first object (object insertion order);
/// every other unit gets a loose column of its own. Object columns come first, ordered by the
/// smallest label among all of the object's units; loose columns follow, ordered by label.
pub fn build_columns(
    graph: &StratGraph,
    band: &RankedBand,
    widths: &[f64],
    settings: &LayoutSettings,
) -> BandColumns {
    let units = graph.units();
    let label = |slot: usize| units[slot].label();
    let rank_of = band.ranked().collect::<HashMap<_, _>>();

    let mut object_order = Vec::<usize>::new();
    let mut loose = Vec::<usize>::new();
    for &slot in band.slots() {
        let first = graph.first_object_of(units[slot].unit_id());
        match first.and_then(|object_id| graph.objects().iter().position(|o| o.object_id() == object_id)) {
            Some(object_idx) => {
                if !object_order.contains(&object_idx) {
                    object_order.push(object_idx);
                }
            }
            None => loose.push(slot),
        }
    }

    let min_label = |object_idx: usize| {
        graph.objects()[object_idx]
            .unit_ids()
            .iter()
            .filter_map(|unit_id| graph.unit(unit_id))
            .map(|unit| unit.label())
            .min()
            .unwrap_or("")
    };
    object_order.sort_by(|&a, &b| min_label(a).cmp(min_label(b)));
    loose.sort_by(|&a, &b| label(a).cmp(label(b)));

    let mut columns = Vec::with_capacity(object_order.len() + loose.len());
    for object_idx in object_order {
        let object = &graph.objects()[object_idx];
        let mut cells = BTreeMap::<usize, Cell>::new();
        for unit_id in object.unit_ids() {
            let Some(slot) = graph.unit_slot(unit_id) else {
                continue;
            };
            let Some(&rank) = rank_of.get(&slot) else {
                continue;
            };
            if graph.first_object_of(unit_id) != Some(object.object_id()) {
                continue;
            }
            cells.entry(rank).or_default().push(slot);
        }
        for cell in cells.values_mut() {
            cell.sort_by(|&a, &b| label(a).cmp(label(b)));
        }
        let width = cells
            .values()
            .map(|cell| row_width(cell, widths, settings.horizontal_gap))
            .fold(0.0, f64::max);
        columns.push(Column { kind: ColumnKind::Object(object.object_id().clone()), cells, width });
    }

    for slot in loose {
        let rank = rank_of.get(&slot).copied().unwrap_or(0);
        let mut cells = BTreeMap::new();
        cells.insert(rank, Cell::from_slice(&[slot]));
        columns.push(Column { kind: ColumnKind::Loose, cells, width: widths[slot] });
    }

    BandColumns { key: band.key(), max_rank: band.max_rank(), columns }
}

/// Width of units packed side by side with `gap` between neighbors.
pub fn row_width(slots: &[usize], widths: &[f64], gap: f64) -> f64 {
    if slots.is_empty() {
        return 0.0;
    }
    slots.iter().map(|&slot| widths[slot]).sum::<f64>() + gap * (slots.len() - 1) as f64
}
