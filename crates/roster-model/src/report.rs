//! Per-roster validation report.
//!
//! Carries the parsed records alongside their findings so a caller can
//! render or serialize one roster at a time.

use serde::{Deserialize, Serialize};

use crate::finding::{Finding, FindingKind};

/// Result of validating one roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of records that were validated.
    pub records: usize,
    /// Data lines skipped by the parser for having too few fields.
    pub dropped_rows: usize,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.kind == kind)
            .count()
    }

    /// True when no findings were produced.
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings for a row, matched by email.
    ///
    /// A record may carry several findings, and duplicate emails share them.
    pub fn findings_for<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings
            .iter()
            .filter(move |finding| finding.email == email)
    }
}
