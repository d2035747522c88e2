// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};

use super::ids::{ObjectId, PhaseId, RelationId, UnitId};
use super::object::Object;
use super::phase::Phase;
use super::relation::Relation;
use super::unit::Unit;

/// An immutable-by-convention snapshot of the whole matrix: units, relations, ordered phases and
/// objects.
///
/// Units live in an arena (`Vec`, insertion order) with an id index next to it, so lookups are
/// O(1) and iteration order is stable. Relations and object memberships may reference units that
/// do not exist; every consumer skips those entries instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StratGraph {
    units: Vec<Unit>,
    unit_index: HashMap<UnitId, usize>,
    relations: Vec<Relation>,
    phases: Vec<Phase>,
    objects: Vec<Object>,
}

impl StratGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from raw parts. A unit whose id is already taken is dropped.
    pub fn from_parts(
        units: impl IntoIterator<Item = Unit>,
        relations: Vec<Relation>,
        phases: Vec<Phase>,
        objects: Vec<Object>,
    ) -> Self {
        let mut graph = Self { relations, phases, objects, ..Self::default() };
        for unit in units {
            let unit_id = unit.unit_id().clone();
            if !graph.insert_unit(unit) {
                tracing::warn!(unit_id = %unit_id, "dropping unit with duplicate id");
            }
        }
        graph
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn units_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.iter_mut()
    }

    pub fn unit(&self, unit_id: &UnitId) -> Option<&Unit> {
        self.unit_index.get(unit_id).map(|&idx| &self.units[idx])
    }

    pub fn unit_mut(&mut self, unit_id: &UnitId) -> Option<&mut Unit> {
        let idx = *self.unit_index.get(unit_id)?;
        self.units.get_mut(idx)
    }

    /// Arena position of a unit; stable until a unit is removed.
    pub fn unit_slot(&self, unit_id: &UnitId) -> Option<usize> {
        self.unit_index.get(unit_id).copied()
    }

    pub fn contains_unit(&self, unit_id: &UnitId) -> bool {
        self.unit_index.contains_key(unit_id)
    }

    /// Appends a unit. Returns `false` (and leaves the graph untouched) if the id is taken.
    pub fn insert_unit(&mut self, unit: Unit) -> bool {
        if self.unit_index.contains_key(unit.unit_id()) {
            return false;
        }
        self.unit_index.insert(unit.unit_id().clone(), self.units.len());
        self.units.push(unit);
        true
    }

    /// Removes a unit only; incident relations and memberships are left to the caller.
    pub fn remove_unit(&mut self, unit_id: &UnitId) -> Option<Unit> {
        let idx = self.unit_index.remove(unit_id)?;
        let removed = self.units.remove(idx);
        for slot in self.unit_index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn relations_mut(&mut self) -> &mut Vec<Relation> {
        &mut self.relations
    }

    pub fn relation(&self, relation_id: &RelationId) -> Option<&Relation> {
        self.relations.iter().find(|relation| relation.relation_id() == relation_id)
    }

    pub fn relation_mut(&mut self, relation_id: &RelationId) -> Option<&mut Relation> {
        self.relations.iter_mut().find(|relation| relation.relation_id() == relation_id)
    }

    /// Phases ordered youngest (index 0) to oldest.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn phases_mut(&mut self) -> &mut Vec<Phase> {
        &mut self.phases
    }

    pub fn phase(&self, phase_id: &PhaseId) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.phase_id() == phase_id)
    }

    pub fn phase_index(&self, phase_id: &PhaseId) -> Option<usize> {
        self.phases.iter().position(|phase| phase.phase_id() == phase_id)
    }

    /// Index of the unit's phase, or `None` when it is unphased or points at a missing phase.
    pub fn unit_phase_index(&self, unit: &Unit) -> Option<usize> {
        unit.phase_id().and_then(|phase_id| self.phase_index(phase_id))
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut Vec<Object> {
        &mut self.objects
    }

    pub fn object(&self, object_id: &ObjectId) -> Option<&Object> {
        self.objects.iter().find(|object| object.object_id() == object_id)
    }

    pub fn object_mut(&mut self, object_id: &ObjectId) -> Option<&mut Object> {
        self.objects.iter_mut().find(|object| object.object_id() == object_id)
    }

    /// The object that decides a unit's layout column when it belongs to several: the first one
    /// in object insertion order.
    pub fn first_object_of(&self, unit_id: &UnitId) -> Option<&ObjectId> {
        self.objects.iter().find(|object| object.contains(unit_id)).map(Object::object_id)
    }

    pub fn adjacency(&self) -> Adjacency {
        Adjacency::new(self)
    }
}

/// A relation whose endpoints both resolved to units, expressed as arena slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRelation {
    pub relation: usize,
    pub source: usize,
    pub target: usize,
}

/// Arena-indexed adjacency over the relations whose endpoints both exist.
///
/// Every list preserves relation order, which keeps all consumers deterministic.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
    incident: Vec<Vec<usize>>,
    resolved: Vec<ResolvedRelation>,
}

impl Adjacency {
    pub fn new(graph: &StratGraph) -> Self {
        let len = graph.units().len();
        let mut adjacency = Self {
            successors: vec![Vec::new(); len],
            predecessors: vec![Vec::new(); len],
            incident: vec![Vec::new(); len],
            resolved: Vec::with_capacity(graph.relations().len()),
        };

        for (relation, edge) in graph.relations().iter().enumerate() {
            let (Some(source), Some(target)) =
                (graph.unit_slot(edge.source()), graph.unit_slot(edge.target()))
            else {
                continue;
            };
            adjacency.successors[source].push(target);
            adjacency.predecessors[target].push(source);
            adjacency.incident[source].push(target);
            if source != target {
                adjacency.incident[target].push(source);
            }
            adjacency.resolved.push(ResolvedRelation { relation, source, target });
        }

        adjacency
    }

    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Targets of relations leaving `slot` (the units directly below it).
    pub fn successors(&self, slot: usize) -> &[usize] {
        self.successors.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sources of relations entering `slot` (the units directly above it).
    pub fn predecessors(&self, slot: usize) -> &[usize] {
        self.predecessors.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The other endpoint of every relation touching `slot`, one entry per relation.
    pub fn neighbors(&self, slot: usize) -> &[usize] {
        self.incident.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn resolved(&self) -> &[ResolvedRelation] {
        &self.resolved
    }

    /// Every slot reachable from `start` by following at least one relation.
    pub fn reachable_from(&self, start: usize) -> HashSet<usize> {
        let mut visited = HashSet::new();
        let mut stack = self.successors(start).to_vec();
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            stack.extend_from_slice(self.successors(current));
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::StratGraph;
    use crate::model::{Object, ObjectId, Relation, RelationId, Unit, UnitId};

    fn uid(value: &str) -> UnitId {
        UnitId::new(value).expect("unit id")
    }

    fn rel(id: &str, source: &str, target: &str) -> Relation {
        Relation::new(RelationId::new(id).expect("relation id"), uid(source), uid(target))
    }

    #[test]
    fn from_parts_drops_duplicate_unit_ids() {
        let graph = StratGraph::from_parts(
            [Unit::new(uid("1"), "SU 001"), Unit::new(uid("1"), "SU 999")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(graph.units().len(), 1);
        assert_eq!(graph.unit(&uid("1")).unwrap().label(), "SU 001");
    }

    #[test]
    fn remove_unit_keeps_index_consistent() {
        let mut graph = StratGraph::new();
        for id in ["a", "b", "c"] {
            assert!(graph.insert_unit(Unit::new(uid(id), id)));
        }
        assert!(graph.remove_unit(&uid("a")).is_some());
        assert_eq!(graph.unit_slot(&uid("b")), Some(0));
        assert_eq!(graph.unit_slot(&uid("c")), Some(1));
        assert_eq!(graph.unit(&uid("c")).unwrap().label(), "c");
        assert!(graph.remove_unit(&uid("a")).is_none());
    }

    #[test]
    fn adjacency_skips_relations_with_missing_endpoints() {
        let graph = StratGraph::from_parts(
            [Unit::new(uid("a"), "A"), Unit::new(uid("b"), "B")],
            vec![rel("e1", "a", "b"), rel("e2", "a", "ghost"), rel("e3", "ghost", "b")],
            Vec::new(),
            Vec::new(),
        );
        let adjacency = graph.adjacency();
        assert_eq!(adjacency.successors(0), &[1]);
        assert_eq!(adjacency.predecessors(1), &[0]);
        assert_eq!(adjacency.neighbors(0), &[1]);
        assert_eq!(adjacency.resolved().len(), 1);
    }

    #[test]
    fn reachable_from_follows_paths_transitively() {
        let graph = StratGraph::from_parts(
            [Unit::new(uid("a"), "A"), Unit::new(uid("b"), "B"), Unit::new(uid("c"), "C")],
            vec![rel("e1", "a", "b"), rel("e2", "b", "c")],
            Vec::new(),
            Vec::new(),
        );
        let adjacency = graph.adjacency();
        let reachable = adjacency.reachable_from(0);
        assert!(reachable.contains(&1));
        assert!(reachable.contains(&2));
        assert!(!reachable.contains(&0));
    }

    #[test]
    fn first_object_follows_object_insertion_order() {
        let mut first = Object::new(ObjectId::new("o2").unwrap(), "Wall", "#000");
        let mut second = Object::new(ObjectId::new("o1").unwrap(), "Pit", "#fff");
        first.insert_unit(uid("a"));
        second.insert_unit(uid("a"));
        let graph = StratGraph::from_parts(
            [Unit::new(uid("a"), "A")],
            Vec::new(),
            Vec::new(),
            vec![first, second],
        );
        assert_eq!(graph.first_object_of(&uid("a")).map(|id| id.as_str()), Some("o2"));
        assert_eq!(graph.first_object_of(&uid("zzz")), None);
    }
}
