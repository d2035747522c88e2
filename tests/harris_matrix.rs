// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use strata::layout::{compute_layout, LayoutSettings};
use strata::model::{StratGraph, UnitId};
use strata::ops::{apply_ops, layout_ops, History};
use strata::store::{DocumentStore, MatrixFile};
use strata::validate::{render_report, validate_stratigraphy, IssueKind, Severity};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = std::env::temp_dir();
        path.push(format!("strata-it-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn excavation() -> StratGraph {
    DocumentStore::new(fixture_path("excavation.json")).load().unwrap().graph().clone()
}

fn graph(json: &str) -> StratGraph {
    serde_json::from_str::<MatrixFile>(json).unwrap().to_graph()
}

fn uid(value: &str) -> UnitId {
    UnitId::new(value).unwrap()
}

fn id_set(ids: &[UnitId]) -> BTreeSet<&str> {
    ids.iter().map(UnitId::as_str).collect()
}

#[test]
fn excavation_document_is_clean() {
    let graph = excavation();
    assert_eq!(graph.units().len(), 7);

    let report = validate_stratigraphy(&graph);
    assert!(report.is_clean(), "{}", render_report(&report));
    assert_eq!(render_report(&report), "No issues found.\n");
    assert_eq!(report.of_kind(IssueKind::Cycle).count(), 0);
}

#[test]
fn layout_positions_every_unit_and_respects_ranks() {
    let graph = excavation();
    let layout = compute_layout(&graph, &LayoutSettings::default());
    assert_eq!(layout.positions().len(), graph.units().len());

    for relation in graph.relations() {
        let source = graph.unit(relation.source()).unwrap();
        let target = graph.unit(relation.target()).unwrap();
        if source.phase_id() == target.phase_id() {
            let upper = layout.rank(relation.source()).unwrap();
            let lower = layout.rank(relation.target()).unwrap();
            assert!(lower > upper, "{} -> {}", relation.source(), relation.target());
        }
        // every relation points downwards on the canvas
        let above = layout.position(relation.source()).unwrap();
        let below = layout.position(relation.target()).unwrap();
        assert!(below.y() > above.y(), "{} -> {}", relation.source(), relation.target());
    }
}

#[test]
fn layout_keeps_object_members_in_one_column() {
    let graph = excavation();
    let layout = compute_layout(&graph, &LayoutSettings::default());

    let medieval = &layout.bands()[1];
    let wall = medieval
        .columns()
        .iter()
        .find(|column| column.object_id().is_some_and(|id| id.as_str() == "wall"))
        .unwrap();
    assert!(wall.contains(&uid("4")));
    assert!(wall.contains(&uid("5")));
    assert!(!wall.contains(&uid("3")));
}

#[test]
fn layout_is_deterministic() {
    let graph = excavation();
    let settings = LayoutSettings { horizontal_gap: 24.0, vertical_gap: 40.0, phase_gap: 90.0 };
    let first = compute_layout(&graph, &settings);
    let second = compute_layout(&graph, &settings);
    assert_eq!(first.positions(), second.positions());

    let reloaded = excavation();
    assert_eq!(compute_layout(&reloaded, &settings).positions(), first.positions());
}

#[test]
fn three_unit_cycle_yields_one_issue() {
    let graph = graph(
        r#"{
  "nodes": [
    { "id": "A", "label": "SU A", "phase": "p1" },
    { "id": "B", "label": "SU B", "phase": "p1" },
    { "id": "C", "label": "SU C", "phase": "p1" }
  ],
  "edges": [
    { "id": "ab", "source": "A", "target": "B" },
    { "id": "bc", "source": "B", "target": "C" },
    { "id": "ca", "source": "C", "target": "A" }
  ],
  "phases": [ { "id": "p1", "name": "Only" } ]
}"#,
    );

    let report = validate_stratigraphy(&graph);
    let cycles: Vec<_> = report.of_kind(IssueKind::Cycle).collect();
    assert_eq!(cycles.len(), 1);
    assert_eq!(id_set(cycles[0].unit_ids()), BTreeSet::from(["A", "B", "C"]));
    assert_eq!(cycles[0].severity(), Severity::Error);

    // the layout still positions every unit of the stalled phase
    let layout = compute_layout(&graph, &LayoutSettings::default());
    assert_eq!(layout.positions().len(), 3);
}

#[test]
fn transitive_relation_is_info_only() {
    let graph = graph(
        r#"{
  "nodes": [
    { "id": "A", "label": "SU A", "phase": "p1" },
    { "id": "B", "label": "SU B", "phase": "p1" },
    { "id": "C", "label": "SU C", "phase": "p1" }
  ],
  "edges": [
    { "id": "ab", "source": "A", "target": "B" },
    { "id": "bc", "source": "B", "target": "C" },
    { "id": "ac", "source": "A", "target": "C" }
  ],
  "phases": [ { "id": "p1", "name": "Only" } ]
}"#,
    );

    let report = validate_stratigraphy(&graph);
    assert!(!report.has_errors());
    let redundant: Vec<_> = report.of_kind(IssueKind::RedundantEdge).collect();
    assert_eq!(redundant.len(), 1);
    assert_eq!(redundant[0].relation_id().map(|id| id.as_str()), Some("ac"));
    assert_eq!(redundant[0].severity(), Severity::Info);
}

#[test]
fn older_unit_above_younger_is_a_phase_direction_error() {
    let graph = graph(
        r#"{
  "nodes": [
    { "id": "X", "label": "SU X", "phase": "p3" },
    { "id": "Y", "label": "SU Y", "phase": "p1" }
  ],
  "edges": [ { "id": "xy", "source": "X", "target": "Y" } ],
  "phases": [
    { "id": "p1", "name": "P1" },
    { "id": "p2", "name": "P2" },
    { "id": "p3", "name": "P3" }
  ]
}"#,
    );

    let report = validate_stratigraphy(&graph);
    let violations: Vec<_> = report.of_kind(IssueKind::PhaseDirection).collect();
    assert_eq!(violations.len(), 1);
    assert_eq!(id_set(violations[0].unit_ids()), BTreeSet::from(["X", "Y"]));
    assert_eq!(report.issues()[0].kind(), IssueKind::PhaseDirection);
}

#[test]
fn labels_differing_in_case_and_spacing_collide() {
    let graph = graph(
        r#"{
  "nodes": [
    { "id": "1", "label": "SU 001", "phase": "p1" },
    { "id": "2", "label": "su001", "phase": "p1" }
  ],
  "edges": [ { "id": "e1", "source": "1", "target": "2" } ],
  "phases": [ { "id": "p1", "name": "Only" } ]
}"#,
    );

    let report = validate_stratigraphy(&graph);
    let duplicates: Vec<_> = report.of_kind(IssueKind::DuplicateLabel).collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(id_set(duplicates[0].unit_ids()), BTreeSet::from(["1", "2"]));
}

#[test]
fn lonely_unphased_unit_is_isolated_and_unphased() {
    let graph = graph(
        r#"{
  "nodes": [
    { "id": "1", "label": "SU 001", "phase": "p1" },
    { "id": "2", "label": "SU 002", "phase": "p1" },
    { "id": "9", "label": "SU 009" }
  ],
  "edges": [ { "id": "e1", "source": "1", "target": "2" } ],
  "phases": [ { "id": "p1", "name": "Only" } ]
}"#,
    );

    let report = validate_stratigraphy(&graph);
    let isolated: Vec<_> = report.of_kind(IssueKind::Isolated).collect();
    let unphased: Vec<_> = report.of_kind(IssueKind::NoPhase).collect();
    assert_eq!(isolated.len(), 1);
    assert_eq!(unphased.len(), 1);
    assert_eq!(isolated[0].unit_ids(), [uid("9")]);
    assert_eq!(unphased[0].unit_ids(), [uid("9")]);
    assert_eq!(report.counts().warning, 2);
    assert_eq!(report.counts().error, 0);
}

#[test]
fn dangling_references_are_ignored() {
    let graph = graph(
        r#"{
  "nodes": [
    { "id": "1", "label": "SU 001", "phase": "p1" },
    { "id": "2", "label": "SU 002", "phase": "p1" }
  ],
  "edges": [
    { "id": "e1", "source": "1", "target": "2" },
    { "id": "e2", "source": "2", "target": "ghost" }
  ],
  "phases": [ { "id": "p1", "name": "Only" } ],
  "objects": [ { "id": "o1", "name": "Pit", "nodeIds": ["ghost", "2"] } ]
}"#,
    );

    let report = validate_stratigraphy(&graph);
    assert!(report.is_clean(), "{}", render_report(&report));

    let layout = compute_layout(&graph, &LayoutSettings::default());
    assert_eq!(layout.positions().len(), 2);
    assert!(layout.position(&uid("ghost")).is_none());
}

#[test]
fn validation_report_serializes_issues_and_counts() {
    let graph = graph(r#"{ "nodes": [ { "id": "1", "label": "SU 001" } ] }"#);
    let report = validate_stratigraphy(&graph);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["counts"]["warning"], 2);
    assert_eq!(json["counts"]["error"], 0);
    let first = &json["issues"][0];
    assert_eq!(first["severity"], "warning");
    assert_eq!(first["nodeIds"][0], "1");
    assert!(first["description"].is_string());
}

#[test]
fn applied_layout_round_trips_through_the_store_and_undoes() {
    let tmp = TempDir::new("layout-write");
    let path = tmp.path().join("excavation.json");
    std::fs::copy(fixture_path("excavation.json"), &path).unwrap();
    let store = DocumentStore::new(&path);

    let mut matrix = store.load().unwrap();
    let layout = compute_layout(matrix.graph(), &LayoutSettings::default());
    let ops = layout_ops(matrix.graph(), &layout);
    assert_eq!(ops.len(), 7);

    let mut history = History::new();
    let base_rev = matrix.rev();
    let applied = history.apply(&mut matrix, base_rev, &ops).unwrap();
    assert_eq!(applied.applied, 7);
    store.save(&matrix).unwrap();

    let reloaded = store.load().unwrap();
    for unit in reloaded.graph().units() {
        let point = layout.position(unit.unit_id()).unwrap();
        assert_eq!((unit.x(), unit.y()), (point.x(), point.y()));
    }
    assert!(layout_ops(reloaded.graph(), &layout).is_empty());

    assert!(history.undo(&mut matrix));
    assert!(matrix.graph().units().iter().all(|unit| unit.x() == 0.0 && unit.y() == 0.0));

    let stale = apply_ops(&mut matrix, base_rev, &ops).unwrap_err();
    assert!(stale.to_string().starts_with("stale base_rev"));
}
