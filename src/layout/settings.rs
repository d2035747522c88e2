// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// User-tunable spacing for the automatic layout, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSettings {
    /// Gap between boxes in one row, and between two loose columns.
    pub horizontal_gap: f64,
    /// Gap between consecutive rank rows of one phase.
    pub vertical_gap: f64,
    /// Extra gap between two phase bands.
    pub phase_gap: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self { horizontal_gap: 20.0, vertical_gap: 50.0, phase_gap: 70.0 }
    }
}

impl LayoutSettings {
    /// Gap on either side of an object column.
    pub fn object_gap(&self) -> f64 {
        self.horizontal_gap * 3.0
    }
}
