// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::graph::StratGraph;
use super::ids::{ObjectId, PhaseId, RelationId, UnitId};
use super::object::Object;
use super::phase::Phase;
use super::relation::Relation;
use super::unit::Unit;

pub(crate) fn uid(value: &str) -> UnitId {
    UnitId::new(value).expect("unit id")
}

pub(crate) fn rid(value: &str) -> RelationId {
    RelationId::new(value).expect("relation id")
}

pub(crate) fn pid(value: &str) -> PhaseId {
    PhaseId::new(value).expect("phase id")
}

pub(crate) fn oid(value: &str) -> ObjectId {
    ObjectId::new(value).expect("object id")
}

/// Terse graph construction for tests.
#[derive(Debug, Default)]
pub(crate) struct GraphBuilder {
    units: Vec<Unit>,
    relations: Vec<Relation>,
    phases: Vec<Phase>,
    objects: Vec<Object>,
}

impl GraphBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a phase (phases are added youngest first).
    pub(crate) fn phase(mut self, id: &str) -> Self {
        self.phases.push(Phase::new(pid(id), format!("Phase {id}"), "#3b82f6"));
        self
    }

    pub(crate) fn unit(mut self, id: &str, label: &str, phase: Option<&str>) -> Self {
        self.units.push(Unit::new(uid(id), label).with_phase(phase.map(pid)));
        self
    }

    pub(crate) fn rel(mut self, id: &str, source: &str, target: &str) -> Self {
        self.relations.push(Relation::new(rid(id), uid(source), uid(target)));
        self
    }

    pub(crate) fn object(mut self, id: &str, members: &[&str]) -> Self {
        let mut object = Object::new(oid(id), format!("Object {id}"), "#8b5cf6");
        for member in members {
            object.insert_unit(uid(member));
        }
        self.objects.push(object);
        self
    }

    pub(crate) fn build(self) -> StratGraph {
        StratGraph::from_parts(self.units, self.relations, self.phases, self.objects)
    }
}

/// Three phases; a wall object spanning two units of phase 2; one long edge from phase 1 into
/// phase 3; one transitive edge.
pub(crate) fn trench_matrix() -> StratGraph {
    GraphBuilder::new()
        .phase("p1")
        .phase("p2")
        .phase("p3")
        .unit("1", "SU 001", Some("p1"))
        .unit("2", "SU 002", Some("p1"))
        .unit("3", "SU 003", Some("p2"))
        .unit("4", "SU 004", Some("p2"))
        .unit("5", "SU 005", Some("p2"))
        .unit("6", "SU 006", Some("p2"))
        .unit("7", "SU 007", Some("p3"))
        .unit("8", "SU 008", Some("p3"))
        .rel("e1", "1", "3")
        .rel("e2", "2", "4")
        .rel("e3", "3", "5")
        .rel("e4", "4", "6")
        .rel("e5", "5", "7")
        .rel("e6", "6", "8")
        .rel("e7", "2", "8")
        .rel("e8", "1", "5")
        .object("wall", &["4", "6"])
        .build()
}

/// A → B → C → A, all in one phase.
pub(crate) fn three_cycle() -> StratGraph {
    GraphBuilder::new()
        .phase("p1")
        .unit("a", "A", Some("p1"))
        .unit("b", "B", Some("p1"))
        .unit("c", "C", Some("p1"))
        .rel("ab", "a", "b")
        .rel("bc", "b", "c")
        .rel("ca", "c", "a")
        .build()
}
