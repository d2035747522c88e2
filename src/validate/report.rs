// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use serde::Serialize;

use super::issue::{Issue, IssueKind, Severity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl IssueCounts {
    pub fn total(&self) -> usize {
        self.error + self.warning + self.info
    }

    fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.error += 1,
            Severity::Warning => self.warning += 1,
            Severity::Info => self.info += 1,
        }
    }
}

/// Issues sorted errors first, then warnings, then infos; discovery order within a severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    issues: Vec<Issue>,
    counts: IssueCounts,
}

impl ValidationReport {
    pub(crate) fn from_issues(mut issues: Vec<Issue>) -> Self {
        issues.sort_by_key(Issue::severity);
        let mut counts = IssueCounts::default();
        for issue in &issues {
            counts.bump(issue.severity());
        }
        Self { issues, counts }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn counts(&self) -> IssueCounts {
        self.counts
    }

    pub fn has_errors(&self) -> bool {
        self.counts.error > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> + '_ {
        self.issues.iter().filter(move |issue| issue.kind() == kind)
    }
}

/// Plain-text rendering: one line per issue followed by its description, then the totals.
pub fn render_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    if report.is_clean() {
        out.push_str("No issues found.\n");
        return out;
    }
    for issue in report.issues() {
        let _ = writeln!(
            out,
            "{:<7} {:<15} {}",
            issue.severity().as_str(),
            issue.kind().as_str(),
            issue.message()
        );
        let _ = writeln!(out, "        {}", issue.description());
    }
    let counts = report.counts();
    let _ = writeln!(
        out,
        "{} error(s), {} warning(s), {} info",
        counts.error, counts.warning, counts.info
    );
    out
}

#[cfg(test)]
mod tests {
    use super::{render_report, ValidationReport};
    use crate::model::fixtures::uid;
    use crate::validate::{Issue, IssueKind};

    #[test]
    fn report_sorts_by_severity_and_keeps_discovery_order() {
        let report = ValidationReport::from_issues(vec![
            Issue::new(IssueKind::RedundantEdge, "r".to_owned(), vec![uid("1")]),
            Issue::new(IssueKind::Isolated, "i1".to_owned(), vec![uid("2")]),
            Issue::new(IssueKind::Cycle, "c".to_owned(), vec![uid("3")]),
            Issue::new(IssueKind::NoPhase, "i2".to_owned(), vec![uid("2")]),
        ]);
        let messages = report.issues().iter().map(Issue::message).collect::<Vec<_>>();
        assert_eq!(messages, vec!["c", "i1", "i2", "r"]);
        assert_eq!(report.counts().error, 1);
        assert_eq!(report.counts().warning, 2);
        assert_eq!(report.counts().info, 1);
        assert_eq!(report.counts().total(), 4);
        assert!(report.has_errors());
    }

    #[test]
    fn text_report_lists_issues_and_totals() {
        let report = ValidationReport::from_issues(vec![Issue::new(
            IssueKind::Isolated,
            "SU 001 has no stratigraphic relations".to_owned(),
            vec![uid("1")],
        )]);
        let text = render_report(&report);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "warning isolated        SU 001 has no stratigraphic relations");
        assert_eq!(lines[1], "        Every unit should be connected to at least one other unit.");
        assert_eq!(lines[2], "0 error(s), 1 warning(s), 0 info");
    }

    #[test]
    fn clean_report_says_so() {
        assert_eq!(render_report(&ValidationReport::default()), "No issues found.\n");
    }
}
