// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for matrices.
//!
//! Operations are applied with optimistic concurrency (revision checks), all-or-nothing per
//! batch, and produce a minimal delta that callers can use to refresh derived state.

mod history;

pub use history::{History, DEFAULT_HISTORY_CAPACITY};

use std::collections::HashSet;
use std::fmt;

use crate::layout::MatrixLayout;
use crate::model::{
    Matrix, Object, ObjectId, Phase, PhaseId, Relation, RelationId, StratGraph, Unit, UnitId,
    UnitType,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Unit(UnitOp),
    Relation(RelationOp),
    Phase(PhaseOp),
    Object(ObjectOp),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnitOp {
    Add {
        unit_id: UnitId,
        label: String,
        unit_type: UnitType,
        phase_id: Option<PhaseId>,
        x: f64,
        y: f64,
    },
    Update {
        unit_id: UnitId,
        patch: UnitPatch,
    },
    Move {
        unit_id: UnitId,
        x: f64,
        y: f64,
    },
    Remove {
        unit_id: UnitId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitPatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub unit_type: Option<UnitType>,
    /// `Some(None)` clears the phase.
    pub phase_id: Option<Option<PhaseId>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationOp {
    Add { relation_id: RelationId, source: UnitId, target: UnitId },
    Reverse { relation_id: RelationId },
    Remove { relation_id: RelationId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOp {
    /// Appends the phase as the new oldest phase.
    Add { phase_id: PhaseId, name: String, color: String },
    Update { phase_id: PhaseId, patch: PhasePatch },
    /// Moves the phase at `from` so that it ends up at index `to`.
    Reorder { from: usize, to: usize },
    Remove { phase_id: PhaseId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhasePatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectOp {
    Add { object_id: ObjectId, name: String, color: String },
    Update { object_id: ObjectId, patch: ObjectPatch },
    AddMembers { object_id: ObjectId, unit_ids: Vec<UnitId> },
    RemoveMember { object_id: ObjectId, unit_id: UnitId },
    Remove { object_id: ObjectId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// A reference to one entity of a matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityRef {
    Unit(UnitId),
    Relation(RelationId),
    Phase(PhaseId),
    Object(ObjectId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(id) => write!(f, "unit:{id}"),
            Self::Relation(id) => write!(f, "relation:{id}"),
            Self::Phase(id) => write!(f, "phase:{id}"),
            Self::Object(id) => write!(f, "object:{id}"),
        }
    }
}

/// Minimal delta describing which entities changed as the result of applying ops.
///
/// This is intentionally coarse: it reports only added/removed/updated `EntityRef`s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<EntityRef>,
    pub removed: Vec<EntityRef>,
    pub updated: Vec<EntityRef>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<EntityRef>,
    removed: HashSet<EntityRef>,
    updated: HashSet<EntityRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, entity: EntityRef) {
        self.removed.remove(&entity);
        self.updated.remove(&entity);
        self.added.insert(entity);
    }

    fn record_removed(&mut self, entity: EntityRef) {
        // Added and removed within one batch: nothing to report.
        if self.added.remove(&entity) {
            self.updated.remove(&entity);
            return;
        }
        self.updated.remove(&entity);
        self.removed.insert(entity);
    }

    fn record_updated(&mut self, entity: EntityRef) {
        if self.added.contains(&entity) || self.removed.contains(&entity) {
            return;
        }
        self.updated.insert(entity);
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort();
        removed.sort();
        updated.sort();

        Delta { added, removed, updated }
    }
}

pub fn apply_ops(
    matrix: &mut Matrix,
    base_rev: u64,
    ops: &[Op],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = matrix.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict { base_rev, current_rev });
    }

    if ops.is_empty() {
        return Ok(ApplyResult { new_rev: current_rev, applied: 0, delta: Delta::default() });
    }

    let mut graph = matrix.graph().clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        match op {
            Op::Unit(unit_op) => apply_unit_op(&mut graph, unit_op, &mut delta)?,
            Op::Relation(relation_op) => apply_relation_op(&mut graph, relation_op, &mut delta)?,
            Op::Phase(phase_op) => apply_phase_op(&mut graph, phase_op, &mut delta)?,
            Op::Object(object_op) => apply_object_op(&mut graph, object_op, &mut delta)?,
        }
    }

    matrix.replace_graph(graph);
    matrix.bump_rev();
    let new_rev = matrix.rev();
    tracing::debug!(applied = ops.len(), new_rev, "ops applied");

    Ok(ApplyResult { new_rev, applied: ops.len(), delta: delta.finish() })
}

/// Move ops that put every unit where `layout` placed it; units already in place are skipped.
pub fn layout_ops(graph: &StratGraph, layout: &MatrixLayout) -> Vec<Op> {
    graph
        .units()
        .iter()
        .filter_map(|unit| {
            let point = layout.position(unit.unit_id())?;
            if point.x() == unit.x() && point.y() == unit.y() {
                return None;
            }
            Some(Op::Unit(UnitOp::Move {
                unit_id: unit.unit_id().clone(),
                x: point.x(),
                y: point.y(),
            }))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Unit,
    Relation,
    Phase,
    Object,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Conflict { base_rev: u64, current_rev: u64 },
    AlreadyExists { kind: EntityKind, id: String },
    NotFound { kind: EntityKind, id: String },
    SelfRelation { unit_id: UnitId },
    DuplicateRelation { source: UnitId, target: UnitId },
    PhaseIndexOutOfRange { index: usize, len: usize },
}

impl ApplyError {
    fn already_exists(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::AlreadyExists { kind, id: id.to_string() }
    }

    fn not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFound { kind, id: id.to_string() }
    }
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { base_rev, current_rev } => {
                write!(f, "stale base_rev (base_rev={base_rev}, current_rev={current_rev})")
            }
            Self::AlreadyExists { kind, id } => {
                write!(f, "entity already exists ({kind:?}, id={id})")
            }
            Self::NotFound { kind, id } => write!(f, "entity not found ({kind:?}, id={id})"),
            Self::SelfRelation { unit_id } => {
                write!(f, "a unit cannot be related to itself (id={unit_id})")
            }
            Self::DuplicateRelation { source, target } => {
                write!(f, "units {source} and {target} are already related")
            }
            Self::PhaseIndexOutOfRange { index, len } => {
                write!(f, "phase index {index} out of range (phases={len})")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

// Extracted op-application implementation for unit/relation/phase/object mutations.
include!("ops_impl.rs");
