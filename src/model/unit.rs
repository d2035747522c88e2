// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ids::{PhaseId, UnitId};

/// Rendered height of every unit box.
pub const NODE_HEIGHT: f64 = 28.0;

/// Narrowest a unit box ever gets.
pub const MIN_NODE_WIDTH: f64 = 50.0;

const CHAR_WIDTH: f64 = 9.0;
const LABEL_PADDING: f64 = 30.0;

static SU_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^SU\s*").expect("static SU prefix regex"));

/// The label as drawn inside the unit box: a leading `SU` (any case, plus whitespace) is dropped.
pub fn display_label(label: &str) -> &str {
    match SU_PREFIX.find(label) {
        Some(found) => &label[found.end()..],
        None => label,
    }
}

/// Width of a unit box for the given label.
///
/// Shared with the rendering layer for hit-testing, so it must stay in lockstep with it:
/// `max(50, len(display_label) * 9 + 30)`, where the length is counted in UTF-16 code units
/// (a character outside the BMP counts twice).
pub fn node_width(label: &str) -> f64 {
    let units = display_label(label).encode_utf16().count() as f64;
    (units * CHAR_WIDTH + LABEL_PADDING).max(MIN_NODE_WIDTH)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    #[default]
    Layer,
    Deposit,
    Fill,
    Structure,
    Interface,
}

impl UnitType {
    pub const ALL: [UnitType; 5] =
        [Self::Layer, Self::Deposit, Self::Fill, Self::Structure, Self::Interface];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Layer => "layer",
            Self::Deposit => "deposit",
            Self::Fill => "fill",
            Self::Structure => "structure",
            Self::Interface => "interface",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitTypeError {
    raw: String,
}

impl fmt::Display for ParseUnitTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit type '{}'", self.raw)
    }
}

impl std::error::Error for ParseUnitTypeError {}

impl FromStr for UnitType {
    type Err = ParseUnitTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseUnitTypeError { raw: s.to_owned() })
    }
}

/// A stratigraphic unit (SU).
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    unit_id: UnitId,
    label: String,
    description: String,
    unit_type: UnitType,
    phase_id: Option<PhaseId>,
    x: f64,
    y: f64,
    geometry: Option<serde_json::Value>,
}

impl Unit {
    pub fn new(unit_id: UnitId, label: impl Into<String>) -> Self {
        Self {
            unit_id,
            label: label.into(),
            description: String::new(),
            unit_type: UnitType::default(),
            phase_id: None,
            x: 0.0,
            y: 0.0,
            geometry: None,
        }
    }

    pub fn with_type(mut self, unit_type: UnitType) -> Self {
        self.unit_type = unit_type;
        self
    }

    pub fn with_phase(mut self, phase_id: Option<PhaseId>) -> Self {
        self.phase_id = phase_id;
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn unit_id(&self) -> &UnitId {
        &self.unit_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }

    /// The referenced phase; may name a phase that no longer exists.
    pub fn phase_id(&self) -> Option<&PhaseId> {
        self.phase_id.as_ref()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Opaque polygon attached by GIS import; never interpreted by the core.
    pub fn geometry(&self) -> Option<&serde_json::Value> {
        self.geometry.as_ref()
    }

    pub fn width(&self) -> f64 {
        node_width(&self.label)
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_unit_type(&mut self, unit_type: UnitType) {
        self.unit_type = unit_type;
    }

    pub fn set_phase_id(&mut self, phase_id: Option<PhaseId>) {
        self.phase_id = phase_id;
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_geometry(&mut self, geometry: Option<serde_json::Value>) {
        self.geometry = geometry;
    }
}
