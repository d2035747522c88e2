// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::PhaseId;

/// Colours handed out to new phases, cycling.
pub const PHASE_PALETTE: [&str; 8] =
    ["#ef4444", "#f97316", "#eab308", "#22c55e", "#14b8a6", "#3b82f6", "#8b5cf6", "#ec4899"];

/// A named stage of the sequence. Phases live in an ordered list: index 0 is the youngest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    phase_id: PhaseId,
    name: String,
    color: String,
}

impl Phase {
    pub fn new(phase_id: PhaseId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { phase_id, name: name.into(), color: color.into() }
    }

    pub fn phase_id(&self) -> &PhaseId {
        &self.phase_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}
