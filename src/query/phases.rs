// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{PhaseId, StratGraph, NODE_HEIGHT};

/// Vertical span covered by the units of one phase, from the top of the highest box to the
/// bottom of the lowest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseExtent {
    pub phase_id: PhaseId,
    pub min_y: f64,
    pub max_y: f64,
}

/// Extents of every phase that currently has units, in phase order.
pub fn phase_extents(graph: &StratGraph) -> Vec<PhaseExtent> {
    let mut spans = vec![None::<(f64, f64)>; graph.phases().len()];
    for unit in graph.units() {
        let Some(phase) = graph.unit_phase_index(unit) else {
            continue;
        };
        let (top, bottom) = (unit.y(), unit.y() + NODE_HEIGHT);
        spans[phase] = Some(match spans[phase] {
            Some((min_y, max_y)) => (min_y.min(top), max_y.max(bottom)),
            None => (top, bottom),
        });
    }

    graph
        .phases()
        .iter()
        .zip(spans)
        .filter_map(|(phase, span)| {
            let (min_y, max_y) = span?;
            Some(PhaseExtent { phase_id: phase.phase_id().clone(), min_y, max_y })
        })
        .collect()
}
