//! Validation passes.
//!
//! Each module runs one pass over the roster and returns its findings.

mod cycles;
mod duplicates;
mod hierarchy;
mod roles;

use roster_model::{Finding, Record};
use tracing::debug;

use crate::index::RosterIndex;
use crate::options::ValidationOptions;

/// Run every enabled pass and concatenate findings in pass order.
pub fn run_all(
    records: &[Record],
    index: &RosterIndex<'_>,
    options: &ValidationOptions,
) -> Vec<Finding> {
    // 1. Supervisor references and role policy, row by row
    let mut findings = hierarchy::check(records, index);
    let rule_count = findings.len();

    // 2. Reports-to cycles
    findings.extend(cycles::check(records, index));
    debug!(
        rule_findings = rule_count,
        cycle_findings = findings.len() - rule_count,
        "hierarchy passes complete"
    );

    // 3. Optional strict checks
    if options.flag_duplicate_emails {
        findings.extend(duplicates::check(records, index));
    }
    if options.flag_unknown_roles {
        findings.extend(roles::check(records));
    }

    findings
}

/// Line number of a record in its source file: 1-based, header first.
fn row_index(position: usize) -> usize {
    position + 2
}
