// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use strata::model::{
    Object, ObjectId, Phase, PhaseId, Relation, RelationId, StratGraph, Unit, UnitId,
};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    LargeDense,
}

#[derive(Debug, Clone, Copy)]
pub struct MatrixParams {
    phases: usize,
    units_per_phase: usize,
    width: usize,
    /// Every n-th unit gets an extra relation skipping two rows down.
    long_edge_every: usize,
    /// Every n-th unit of a phase joins that phase's object.
    object_every: usize,
}

impl MatrixParams {
    pub const fn new(
        phases: usize,
        units_per_phase: usize,
        width: usize,
        long_edge_every: usize,
        object_every: usize,
    ) -> Self {
        Self { phases, units_per_phase, width, long_edge_every, object_every }
    }
}

pub fn fixture(case: Case) -> StratGraph {
    match case {
        Case::Small => matrix(MatrixParams::new(3, 12, 3, 5, 4)),
        Case::Medium => matrix(MatrixParams::new(6, 60, 6, 7, 9)),
        Case::LargeDense => matrix(MatrixParams::new(10, 200, 12, 3, 11)),
    }
}

fn unit_id(n: usize) -> UnitId {
    UnitId::new(n.to_string()).expect("unit id")
}

/// A grid of units per phase: each unit lies above the unit below it and, for every other
/// column, the diagonal neighbour too. The last row of a phase lies above the first row of the
/// next phase.
pub fn matrix(params: MatrixParams) -> StratGraph {
    let MatrixParams { phases, units_per_phase, width, long_edge_every, object_every } = params;
    let width = width.max(1);

    let mut units = Vec::with_capacity(phases * units_per_phase);
    let mut relations = Vec::new();
    let mut phase_list = Vec::with_capacity(phases);
    let mut objects = Vec::new();
    let mut next_relation = 0usize;
    let mut relate = |relations: &mut Vec<Relation>, source: usize, target: usize| {
        let relation_id = RelationId::new(format!("e{next_relation}")).expect("relation id");
        next_relation += 1;
        relations.push(Relation::new(relation_id, unit_id(source), unit_id(target)));
    };

    for phase in 0..phases {
        let phase_id = PhaseId::new(format!("p{phase}")).expect("phase id");
        phase_list.push(Phase::new(phase_id.clone(), format!("Phase {phase}"), "#3b82f6"));
        let mut object = Object::new(
            ObjectId::new(format!("o{phase}")).expect("object id"),
            format!("Feature {phase}"),
            "#8b5cf6",
        );

        let base = phase * units_per_phase;
        for local in 0..units_per_phase {
            let n = base + local;
            let label = format!("SU {:03}{}", n, if n % 13 == 0 { " (robber trench)" } else { "" });
            units.push(Unit::new(unit_id(n), label).with_phase(Some(phase_id.clone())));

            if object_every > 0 && local % object_every == 0 {
                object.insert_unit(unit_id(n));
            }

            let below = local + width;
            if below < units_per_phase {
                relate(&mut relations, n, base + below);
                if local % 2 == 0 && (local + 1) % width != 0 && below + 1 < units_per_phase {
                    relate(&mut relations, n, base + below + 1);
                }
            } else if phase + 1 < phases {
                relate(&mut relations, n, base + units_per_phase + local % width);
            }

            let skip = local + 2 * width;
            if long_edge_every > 0 && n % long_edge_every == 0 && skip < units_per_phase {
                relate(&mut relations, n, base + skip);
            }
        }
        objects.push(object);
    }

    StratGraph::from_parts(units, relations, phase_list, objects)
}

pub fn checksum_positions(graph: &StratGraph, layout: &strata::layout::MatrixLayout) -> u64 {
    let mut acc = 0u64;
    for unit in graph.units() {
        if let Some(point) = layout.position(unit.unit_id()) {
            acc = acc.wrapping_mul(131).wrapping_add(point.x().to_bits());
            acc = acc.wrapping_mul(131).wrapping_add(point.y().to_bits());
        }
    }
    acc
}
