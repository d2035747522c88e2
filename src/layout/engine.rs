// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::Serialize;

use super::columns::{build_columns, BandColumns, ColumnKind};
use super::crossing::{reduce_crossings, CROSSING_PASSES};
use super::outer::{long_edge_slots, place_long_edges_outside};
use super::position::{compile_positions, Point};
use super::rank::{rank_bands, BandKey};
use super::settings::LayoutSettings;
use crate::model::{ObjectId, PhaseId, StratGraph, UnitId};

/// Result of [`compute_layout`]: a fresh position for every unit plus the structure behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixLayout {
    positions: BTreeMap<UnitId, Point>,
    ranks: BTreeMap<UnitId, usize>,
    bands: Vec<LayoutBand>,
}

impl MatrixLayout {
    pub fn positions(&self) -> &BTreeMap<UnitId, Point> {
        &self.positions
    }

    pub fn position(&self, unit_id: &UnitId) -> Option<Point> {
        self.positions.get(unit_id).copied()
    }

    /// Depth of each unit inside its band.
    pub fn ranks(&self) -> &BTreeMap<UnitId, usize> {
        &self.ranks
    }

    pub fn rank(&self, unit_id: &UnitId) -> Option<usize> {
        self.ranks.get(unit_id).copied()
    }

    /// Non-empty bands, top to bottom.
    pub fn bands(&self) -> &[LayoutBand] {
        &self.bands
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBand {
    /// `None` for the band of unphased units.
    phase_id: Option<PhaseId>,
    max_rank: usize,
    columns: Vec<LayoutColumn>,
}

impl LayoutBand {
    pub fn phase_id(&self) -> Option<&PhaseId> {
        self.phase_id.as_ref()
    }

    pub fn max_rank(&self) -> usize {
        self.max_rank
    }

    /// Columns in their final left-to-right order.
    pub fn columns(&self) -> &[LayoutColumn] {
        &self.columns
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    object_id: Option<ObjectId>,
    unit_ids: Vec<UnitId>,
}

impl LayoutColumn {
    pub fn object_id(&self) -> Option<&ObjectId> {
        self.object_id.as_ref()
    }

    pub fn unit_ids(&self) -> &[UnitId] {
        &self.unit_ids
    }

    pub fn contains(&self, unit_id: &UnitId) -> bool {
        self.unit_ids.contains(unit_id)
    }
}

/// Phase-aware layered layout of a matrix snapshot.
///
/// Pipeline: rank each band, split bands into columns, reduce crossings with repeated median
/// sweeps, push long-edge columns to the flanks, then compile the final coordinates. The input
/// is never touched; the same snapshot and settings always give the same layout.
pub fn compute_layout(graph: &StratGraph, settings: &LayoutSettings) -> MatrixLayout {
    let _span = tracing::debug_span!(
        "compute_layout",
        units = graph.units().len(),
        relations = graph.relations().len(),
        phases = graph.phases().len()
    )
    .entered();

    let adjacency = graph.adjacency();
    let widths = graph.units().iter().map(|unit| unit.width()).collect::<Vec<_>>();

    let ranked = rank_bands(graph, &adjacency);
    let bands = ranked
        .iter()
        .map(|band| build_columns(graph, band, &widths, settings))
        .collect::<Vec<_>>();

    let mut orders = reduce_crossings(&bands, &widths, &adjacency, settings, CROSSING_PASSES);

    let marked = long_edge_slots(graph, &adjacency);
    let before_outer = compile_positions(&bands, &orders, &widths, settings);
    for (band, order) in bands.iter().zip(orders.iter_mut()) {
        if band.is_empty() {
            continue;
        }
        *order = place_long_edges_outside(
            band.columns(),
            order,
            &before_outer,
            &widths,
            &adjacency,
            &marked,
        );
    }

    let final_positions = compile_positions(&bands, &orders, &widths, settings);

    let units = graph.units();
    let positions = final_positions
        .iter()
        .enumerate()
        .filter_map(|(slot, point)| point.map(|point| (units[slot].unit_id().clone(), point)))
        .collect::<BTreeMap<_, _>>();
    let ranks = ranked
        .iter()
        .flat_map(|band| band.ranked())
        .map(|(slot, rank)| (units[slot].unit_id().clone(), rank))
        .collect::<BTreeMap<_, _>>();
    let bands = bands
        .iter()
        .zip(&orders)
        .filter(|(band, _)| !band.is_empty())
        .map(|(band, order)| summarize_band(graph, band, order))
        .collect::<Vec<_>>();

    tracing::debug!(placed = positions.len(), bands = bands.len(), "layout computed");
    MatrixLayout { positions, ranks, bands }
}

fn summarize_band(graph: &StratGraph, band: &BandColumns, order: &[usize]) -> LayoutBand {
    let phase_id = match band.key() {
        BandKey::Phase(idx) => Some(graph.phases()[idx].phase_id().clone()),
        BandKey::Unphased => None,
    };
    let columns = order
        .iter()
        .map(|&idx| {
            let column = &band.columns()[idx];
            let object_id = match column.kind() {
                ColumnKind::Object(object_id) => Some(object_id.clone()),
                ColumnKind::Loose => None,
            };
            let unit_ids =
                column.slots().map(|slot| graph.units()[slot].unit_id().clone()).collect();
            LayoutColumn { object_id, unit_ids }
        })
        .collect();
    LayoutBand { phase_id, max_rank: band.max_rank(), columns }
}
