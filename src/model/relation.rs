// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{RelationId, UnitId};

/// A directed "lies above" relation.
///
/// `source` is the younger unit (drawn above), `target` the older one (drawn below). Every
/// downstream rule depends on this direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    relation_id: RelationId,
    source: UnitId,
    target: UnitId,
}

impl Relation {
    pub fn new(relation_id: RelationId, source: UnitId, target: UnitId) -> Self {
        Self { relation_id, source, target }
    }

    pub fn relation_id(&self) -> &RelationId {
        &self.relation_id
    }

    pub fn source(&self) -> &UnitId {
        &self.source
    }

    pub fn target(&self) -> &UnitId {
        &self.target
    }

    pub fn touches(&self, unit_id: &UnitId) -> bool {
        &self.source == unit_id || &self.target == unit_id
    }

    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }
}
