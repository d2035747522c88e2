// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{ObjectId, UnitId};

pub const OBJECT_PALETTE: [&str; 8] =
    ["#8b5cf6", "#06b6d4", "#10b981", "#f59e0b", "#ef4444", "#ec4899", "#6366f1", "#84cc16"];

/// A non-stratigraphic grouping of units (e.g. one wall cut by several contexts).
///
/// Only biases layout and presentation; it carries no ordering semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    object_id: ObjectId,
    name: String,
    color: String,
    unit_ids: Vec<UnitId>,
}

impl Object {
    pub fn new(object_id: ObjectId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { object_id, name: name.into(), color: color.into(), unit_ids: Vec::new() }
    }

    pub fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Members in insertion order. Entries may reference units that no longer exist.
    pub fn unit_ids(&self) -> &[UnitId] {
        &self.unit_ids
    }

    pub fn contains(&self, unit_id: &UnitId) -> bool {
        self.unit_ids.contains(unit_id)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Appends `unit_id` unless it is already a member. Returns whether it was added.
    pub fn insert_unit(&mut self, unit_id: UnitId) -> bool {
        if self.contains(&unit_id) {
            return false;
        }
        self.unit_ids.push(unit_id);
        true
    }

    pub fn remove_unit(&mut self, unit_id: &UnitId) -> bool {
        let before = self.unit_ids.len();
        self.unit_ids.retain(|member| member != unit_id);
        self.unit_ids.len() != before
    }
}
