//! Per-row supervisor checks.

use roster_model::{Finding, FindingKind, Record};

use super::row_index;
use crate::index::RosterIndex;
use crate::policy::rule_for;

/// Check each row's supervisor references against the index and policy.
///
/// Per row: one MultipleSupervisors finding if the field lists several
/// references, then one finding per failing reference in field order.
pub fn check(records: &[Record], index: &RosterIndex<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let row = row_index(position);
        let finding = |kind: FindingKind, detail: String| {
            Finding::new(row, &record.email, &record.full_name, kind, detail)
        };

        if record.has_multiple_supervisors() {
            findings.push(finding(
                FindingKind::MultipleSupervisors,
                format!(
                    "User reports to multiple supervisors: {}",
                    record.reports_to
                ),
            ));
        }

        let rule = record.role().and_then(rule_for);
        for reference in record.supervisors() {
            let Some(supervisor) = index.get(reference) else {
                findings.push(finding(
                    FindingKind::InvalidSupervisor,
                    format!("Supervisor {reference} does not exist"),
                ));
                continue;
            };

            let Some(rule) = rule else {
                continue;
            };
            if !rule.permits(&supervisor.role) {
                findings.push(finding(
                    FindingKind::HierarchyViolation,
                    format!(
                        "{} ({}) {}, but reports to {} ({})",
                        record.role,
                        record.email,
                        rule.requirement,
                        supervisor.role,
                        supervisor.email
                    ),
                ));
            }
        }
    }

    findings
}
