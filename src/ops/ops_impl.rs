// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Per-entity mutation helpers used by `apply_ops`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_unit_op(
    graph: &mut StratGraph,
    op: &UnitOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        UnitOp::Add { unit_id, label, unit_type, phase_id, x, y } => {
            if graph.contains_unit(unit_id) {
                return Err(ApplyError::already_exists(EntityKind::Unit, unit_id));
            }
            if let Some(phase_id) = phase_id {
                ensure_phase(graph, phase_id)?;
            }
            let unit = Unit::new(unit_id.clone(), label.clone())
                .with_type(*unit_type)
                .with_phase(phase_id.clone())
                .with_position(*x, *y);
            graph.insert_unit(unit);
            delta.record_added(EntityRef::Unit(unit_id.clone()));
            Ok(())
        }
        UnitOp::Update { unit_id, patch } => {
            if let Some(Some(phase_id)) = &patch.phase_id {
                ensure_phase(graph, phase_id)?;
            }
            let Some(unit) = graph.unit_mut(unit_id) else {
                return Err(ApplyError::not_found(EntityKind::Unit, unit_id));
            };

            if let Some(label) = &patch.label {
                unit.set_label(label.clone());
            }
            if let Some(description) = &patch.description {
                unit.set_description(description.clone());
            }
            if let Some(unit_type) = patch.unit_type {
                unit.set_unit_type(unit_type);
            }
            if let Some(phase_id) = &patch.phase_id {
                unit.set_phase_id(phase_id.clone());
            }
            delta.record_updated(EntityRef::Unit(unit_id.clone()));
            Ok(())
        }
        UnitOp::Move { unit_id, x, y } => {
            let Some(unit) = graph.unit_mut(unit_id) else {
                return Err(ApplyError::not_found(EntityKind::Unit, unit_id));
            };
            unit.set_position(*x, *y);
            delta.record_updated(EntityRef::Unit(unit_id.clone()));
            Ok(())
        }
        UnitOp::Remove { unit_id } => {
            if graph.remove_unit(unit_id).is_none() {
                return Err(ApplyError::not_found(EntityKind::Unit, unit_id));
            }

            let removed_relation_ids = graph
                .relations()
                .iter()
                .filter(|relation| relation.touches(unit_id))
                .map(|relation| relation.relation_id().clone())
                .collect::<Vec<_>>();
            graph.relations_mut().retain(|relation| !relation.touches(unit_id));
            for relation_id in removed_relation_ids {
                delta.record_removed(EntityRef::Relation(relation_id));
            }

            for object in graph.objects_mut().iter_mut() {
                if object.remove_unit(unit_id) {
                    delta.record_updated(EntityRef::Object(object.object_id().clone()));
                }
            }
            delta.record_removed(EntityRef::Unit(unit_id.clone()));
            Ok(())
        }
    }
}

fn apply_relation_op(
    graph: &mut StratGraph,
    op: &RelationOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        RelationOp::Add { relation_id, source, target } => {
            if graph.relation(relation_id).is_some() {
                return Err(ApplyError::already_exists(EntityKind::Relation, relation_id));
            }
            for endpoint in [source, target] {
                if !graph.contains_unit(endpoint) {
                    return Err(ApplyError::not_found(EntityKind::Unit, endpoint));
                }
            }
            if source == target {
                return Err(ApplyError::SelfRelation { unit_id: source.clone() });
            }
            let related = graph.relations().iter().any(|relation| {
                (relation.source() == source && relation.target() == target)
                    || (relation.source() == target && relation.target() == source)
            });
            if related {
                return Err(ApplyError::DuplicateRelation {
                    source: source.clone(),
                    target: target.clone(),
                });
            }

            graph.relations_mut().push(Relation::new(
                relation_id.clone(),
                source.clone(),
                target.clone(),
            ));
            delta.record_added(EntityRef::Relation(relation_id.clone()));
            Ok(())
        }
        RelationOp::Reverse { relation_id } => {
            let Some(relation) = graph.relation_mut(relation_id) else {
                return Err(ApplyError::not_found(EntityKind::Relation, relation_id));
            };
            relation.reverse();
            delta.record_updated(EntityRef::Relation(relation_id.clone()));
            Ok(())
        }
        RelationOp::Remove { relation_id } => {
            let relations = graph.relations_mut();
            let before_len = relations.len();
            relations.retain(|relation| relation.relation_id() != relation_id);
            if relations.len() == before_len {
                return Err(ApplyError::not_found(EntityKind::Relation, relation_id));
            }
            delta.record_removed(EntityRef::Relation(relation_id.clone()));
            Ok(())
        }
    }
}

fn apply_phase_op(
    graph: &mut StratGraph,
    op: &PhaseOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        PhaseOp::Add { phase_id, name, color } => {
            if graph.phase(phase_id).is_some() {
                return Err(ApplyError::already_exists(EntityKind::Phase, phase_id));
            }
            graph.phases_mut().push(Phase::new(phase_id.clone(), name.clone(), color.clone()));
            delta.record_added(EntityRef::Phase(phase_id.clone()));
            Ok(())
        }
        PhaseOp::Update { phase_id, patch } => {
            let Some(phase) = graph.phases_mut().iter_mut().find(|p| p.phase_id() == phase_id)
            else {
                return Err(ApplyError::not_found(EntityKind::Phase, phase_id));
            };
            if let Some(name) = &patch.name {
                phase.set_name(name.clone());
            }
            if let Some(color) = &patch.color {
                phase.set_color(color.clone());
            }
            delta.record_updated(EntityRef::Phase(phase_id.clone()));
            Ok(())
        }
        PhaseOp::Reorder { from, to } => {
            let phases = graph.phases_mut();
            let len = phases.len();
            for index in [*from, *to] {
                if index >= len {
                    return Err(ApplyError::PhaseIndexOutOfRange { index, len });
                }
            }
            if from == to {
                return Ok(());
            }
            let moved = phases.remove(*from);
            phases.insert(*to, moved);

            let (low, high) = ((*from).min(*to), (*from).max(*to));
            for phase in &phases[low..=high] {
                delta.record_updated(EntityRef::Phase(phase.phase_id().clone()));
            }
            Ok(())
        }
        PhaseOp::Remove { phase_id } => {
            let Some(index) = graph.phase_index(phase_id) else {
                return Err(ApplyError::not_found(EntityKind::Phase, phase_id));
            };
            graph.phases_mut().remove(index);

            for unit in graph.units_mut() {
                if unit.phase_id() == Some(phase_id) {
                    unit.set_phase_id(None);
                    delta.record_updated(EntityRef::Unit(unit.unit_id().clone()));
                }
            }
            delta.record_removed(EntityRef::Phase(phase_id.clone()));
            Ok(())
        }
    }
}

fn apply_object_op(
    graph: &mut StratGraph,
    op: &ObjectOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        ObjectOp::Add { object_id, name, color } => {
            if graph.object(object_id).is_some() {
                return Err(ApplyError::already_exists(EntityKind::Object, object_id));
            }
            graph.objects_mut().push(Object::new(object_id.clone(), name.clone(), color.clone()));
            delta.record_added(EntityRef::Object(object_id.clone()));
            Ok(())
        }
        ObjectOp::Update { object_id, patch } => {
            let Some(object) = graph.object_mut(object_id) else {
                return Err(ApplyError::not_found(EntityKind::Object, object_id));
            };
            if let Some(name) = &patch.name {
                object.set_name(name.clone());
            }
            if let Some(color) = &patch.color {
                object.set_color(color.clone());
            }
            delta.record_updated(EntityRef::Object(object_id.clone()));
            Ok(())
        }
        ObjectOp::AddMembers { object_id, unit_ids } => {
            if let Some(missing) = unit_ids.iter().find(|unit_id| !graph.contains_unit(unit_id)) {
                return Err(ApplyError::not_found(EntityKind::Unit, missing));
            }
            let Some(object) = graph.object_mut(object_id) else {
                return Err(ApplyError::not_found(EntityKind::Object, object_id));
            };
            let mut changed = false;
            for unit_id in unit_ids {
                changed |= object.insert_unit(unit_id.clone());
            }
            if changed {
                delta.record_updated(EntityRef::Object(object_id.clone()));
            }
            Ok(())
        }
        ObjectOp::RemoveMember { object_id, unit_id } => {
            let Some(object) = graph.object_mut(object_id) else {
                return Err(ApplyError::not_found(EntityKind::Object, object_id));
            };
            if !object.remove_unit(unit_id) {
                return Err(ApplyError::not_found(EntityKind::Unit, unit_id));
            }
            delta.record_updated(EntityRef::Object(object_id.clone()));
            Ok(())
        }
        ObjectOp::Remove { object_id } => {
            let objects = graph.objects_mut();
            let before_len = objects.len();
            objects.retain(|object| object.object_id() != object_id);
            if objects.len() == before_len {
                return Err(ApplyError::not_found(EntityKind::Object, object_id));
            }
            delta.record_removed(EntityRef::Object(object_id.clone()));
            Ok(())
        }
    }
}

fn ensure_phase(graph: &StratGraph, phase_id: &PhaseId) -> Result<(), ApplyError> {
    if graph.phase(phase_id).is_none() {
        return Err(ApplyError::not_found(EntityKind::Phase, phase_id));
    }
    Ok(())
}
