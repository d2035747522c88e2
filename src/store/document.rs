// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    Id, Object, ObjectId, Phase, PhaseId, Relation, RelationId, StratGraph, Unit, UnitId, UnitType,
};

pub const DOCUMENT_VERSION: &str = "1.0";

/// On-disk shape of a matrix document.
///
/// Every field is optional on read so that hand-edited or older exports still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MatrixFile {
    pub version: String,
    /// RFC 3339 timestamp of the export.
    pub export_date: String,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub phases: Vec<PhaseRecord>,
    pub objects: Vec<ObjectRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
    pub description: String,
    /// One of `layer`, `deposit`, `fill`, `structure`, `interface`.
    #[serde(rename = "type")]
    pub unit_type: String,
    /// Phase id; empty when the unit is unphased.
    pub phase: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EdgeRecord {
    pub id: String,
    /// The upper (younger) unit.
    pub source: String,
    /// The lower (older) unit.
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PhaseRecord {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectRecord {
    pub id: String,
    pub name: String,
    pub color: String,
    pub node_ids: Vec<String>,
}

impl MatrixFile {
    /// Snapshot of `graph` stamped with the current time.
    pub fn from_graph(graph: &StratGraph) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_owned(),
            export_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            nodes: graph.units().iter().map(NodeRecord::from_unit).collect(),
            edges: graph
                .relations()
                .iter()
                .map(|relation| EdgeRecord {
                    id: relation.relation_id().to_string(),
                    source: relation.source().to_string(),
                    target: relation.target().to_string(),
                })
                .collect(),
            phases: graph
                .phases()
                .iter()
                .map(|phase| PhaseRecord {
                    id: phase.phase_id().to_string(),
                    name: phase.name().to_owned(),
                    color: phase.color().to_owned(),
                })
                .collect(),
            objects: graph
                .objects()
                .iter()
                .map(|object| ObjectRecord {
                    id: object.object_id().to_string(),
                    name: object.name().to_owned(),
                    color: object.color().to_owned(),
                    node_ids: object.unit_ids().iter().map(ToString::to_string).collect(),
                })
                .collect(),
        }
    }

    /// Builds a graph snapshot, skipping records that cannot be represented.
    ///
    /// Records with invalid ids are dropped, as are repeated unit, relation, phase and object
    /// ids (first one wins). References to missing units or phases are kept as they are.
    pub fn to_graph(&self) -> StratGraph {
        let mut graph = StratGraph::new();

        for node in &self.nodes {
            let Some(unit) = node.to_unit() else {
                continue;
            };
            let unit_id = unit.unit_id().clone();
            if !graph.insert_unit(unit) {
                tracing::warn!(unit_id = %unit_id, "skipping node with duplicate id");
            }
        }

        for edge in &self.edges {
            let (Some(relation_id), Some(source), Some(target)): (
                Option<RelationId>,
                Option<UnitId>,
                Option<UnitId>,
            ) = (
                parse_id(&edge.id, "edge id"),
                parse_id(&edge.source, "edge source"),
                parse_id(&edge.target, "edge target"),
            ) else {
                continue;
            };
            if graph.relation(&relation_id).is_some() {
                tracing::warn!(relation_id = %relation_id, "skipping edge with duplicate id");
                continue;
            }
            graph.relations_mut().push(Relation::new(relation_id, source, target));
        }

        for record in &self.phases {
            let Some(phase_id): Option<PhaseId> = parse_id(&record.id, "phase id") else {
                continue;
            };
            if graph.phase(&phase_id).is_some() {
                tracing::warn!(phase_id = %phase_id, "skipping phase with duplicate id");
                continue;
            }
            graph.phases_mut().push(Phase::new(phase_id, &record.name, &record.color));
        }

        for record in &self.objects {
            let Some(object_id): Option<ObjectId> = parse_id(&record.id, "object id") else {
                continue;
            };
            if graph.object(&object_id).is_some() {
                tracing::warn!(object_id = %object_id, "skipping object with duplicate id");
                continue;
            }
            let mut object = Object::new(object_id, &record.name, &record.color);
            for raw in &record.node_ids {
                if let Some(unit_id) = parse_id(raw, "object member") {
                    object.insert_unit(unit_id);
                }
            }
            graph.objects_mut().push(object);
        }

        graph
    }
}

impl NodeRecord {
    fn from_unit(unit: &Unit) -> Self {
        Self {
            id: unit.unit_id().to_string(),
            label: unit.label().to_owned(),
            description: unit.description().to_owned(),
            unit_type: unit.unit_type().as_str().to_owned(),
            phase: unit.phase_id().map(ToString::to_string).unwrap_or_default(),
            x: unit.x(),
            y: unit.y(),
            geometry: unit.geometry().cloned(),
        }
    }

    fn to_unit(&self) -> Option<Unit> {
        let unit_id: UnitId = parse_id(&self.id, "node id")?;
        let unit_type = if self.unit_type.trim().is_empty() {
            UnitType::default()
        } else {
            self.unit_type.parse().unwrap_or_else(|err| {
                tracing::warn!(unit_id = %unit_id, error = %err, "falling back to layer");
                UnitType::default()
            })
        };
        let phase_id = if self.phase.trim().is_empty() {
            None
        } else {
            parse_id(&self.phase, "node phase")
        };

        let mut unit = Unit::new(unit_id, &self.label)
            .with_type(unit_type)
            .with_phase(phase_id)
            .with_position(self.x, self.y);
        unit.set_description(&self.description);
        unit.set_geometry(self.geometry.clone());
        Some(unit)
    }
}

fn parse_id<T>(raw: &str, field: &'static str) -> Option<Id<T>> {
    match Id::new(raw) {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::warn!(field, value = raw, error = %err, "skipping record");
            None
        }
    }
}
