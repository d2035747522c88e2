// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

use crate::model::{RelationId, UnitId};

/// How serious an issue is. Orders most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    DuplicateLabel,
    Cycle,
    PhaseDirection,
    PhaseSkip,
    Isolated,
    NoPhase,
    DanglingLeaf,
    DanglingRoot,
    RedundantEdge,
}

impl IssueKind {
    pub fn severity(self) -> Severity {
        match self {
            Self::DuplicateLabel | Self::Cycle | Self::PhaseDirection => Severity::Error,
            Self::PhaseSkip | Self::Isolated | Self::NoPhase => Severity::Warning,
            Self::DanglingLeaf | Self::DanglingRoot | Self::RedundantEdge => Severity::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateLabel => "duplicate_label",
            Self::Cycle => "cycle",
            Self::PhaseDirection => "phase_direction",
            Self::PhaseSkip => "phase_skip",
            Self::Isolated => "isolated",
            Self::NoPhase => "no_phase",
            Self::DanglingLeaf => "dangling_leaf",
            Self::DanglingRoot => "dangling_root",
            Self::RedundantEdge => "redundant_edge",
        }
    }

    /// Fixed explanation shown next to every issue of this kind.
    pub fn description(self) -> &'static str {
        match self {
            Self::DuplicateLabel => {
                "Each unit must have a unique label. Rename the duplicates to avoid confusion."
            }
            Self::Cycle => {
                "A Harris Matrix must be a DAG. Cycles represent logical contradictions in the \
                 stratigraphy."
            }
            Self::PhaseDirection => {
                "A unit from an older phase cannot lie above a unit from a younger phase."
            }
            Self::PhaseSkip => {
                "Relation crosses phases without intermediate units. May indicate missing \
                 stratigraphy or incorrect phasing."
            }
            Self::Isolated => "Every unit should be connected to at least one other unit.",
            Self::NoPhase => "Consider assigning a phase based on its stratigraphic relationships.",
            Self::DanglingLeaf => "Not in the oldest phase but has no underlying relations.",
            Self::DanglingRoot => "Not in the youngest phase but has no overlying relations.",
            Self::RedundantEdge => {
                "Already implied through other paths. Removing simplifies the matrix."
            }
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding of the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    kind: IssueKind,
    severity: Severity,
    message: String,
    #[serde(rename = "nodeIds")]
    unit_ids: Vec<UnitId>,
    #[serde(rename = "edgeId", skip_serializing_if = "Option::is_none")]
    relation_id: Option<RelationId>,
    description: &'static str,
}

impl Issue {
    pub(crate) fn new(kind: IssueKind, message: String, unit_ids: Vec<UnitId>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message,
            unit_ids,
            relation_id: None,
            description: kind.description(),
        }
    }

    pub(crate) fn with_relation(mut self, relation_id: RelationId) -> Self {
        self.relation_id = Some(relation_id);
        self
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn unit_ids(&self) -> &[UnitId] {
        &self.unit_ids
    }

    pub fn relation_id(&self) -> Option<&RelationId> {
        self.relation_id.as_ref()
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.kind, self.message)
    }
}
