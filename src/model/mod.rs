// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A matrix is a set of stratigraphic units joined by directed "lies above" relations, an ordered
//! list of phases (youngest first) and free-form objects grouping units for layout.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod matrix;
pub mod object;
pub mod phase;
pub mod relation;
pub mod unit;

pub use graph::{Adjacency, ResolvedRelation, StratGraph};
pub use ids::{Id, IdError, ObjectId, PhaseId, RelationId, UnitId};
pub use matrix::Matrix;
pub use object::{Object, OBJECT_PALETTE};
pub use phase::{Phase, PHASE_PALETTE};
pub use relation::Relation;
pub use unit::{
    display_label, node_width, ParseUnitTypeError, Unit, UnitType, MIN_NODE_WIDTH, NODE_HEIGHT,
};
