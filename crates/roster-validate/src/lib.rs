//! Reporting hierarchy validation.
//!
//! Checks a parsed roster in three passes that share one email index:
//!
//! - **Rule check**: multi-supervisor rows, supervisors missing from the
//!   roster, and role pairs the [`policy`] forbids
//! - **Cycle detection**: reports-to loops, one finding per member row
//! - **Strict checks** (opt-in): duplicate emails and unknown roles
//!
//! Findings come back in that order. Nothing is repaired or rejected; an
//! empty result means the roster is valid.
//!
//! # Example
//!
//! ```ignore
//! use roster_validate::{ValidationOptions, validate_roster};
//!
//! let findings = validate_roster(&records, &ValidationOptions::default());
//! for finding in &findings {
//!     println!("row {}: [{}] {}", finding.row_index, finding.kind, finding.detail);
//! }
//! ```

mod checks;
mod index;
mod options;
pub mod policy;

use roster_ingest::ParsedRoster;
use roster_model::{Finding, Record, ValidationReport};
use tracing::{debug, info_span};

pub use index::RosterIndex;
pub use options::ValidationOptions;
pub use policy::{POLICY, ReportingRule};

/// Validate a roster and return its findings in report order.
///
/// Each call builds its own index and traversal state, so independent
/// rosters can be validated concurrently.
pub fn validate_roster(records: &[Record], options: &ValidationOptions) -> Vec<Finding> {
    let span = info_span!("validate", records = records.len());
    let _guard = span.enter();

    let index = RosterIndex::build(records);
    debug!(
        unique_emails = index.len(),
        duplicate_emails = index.duplicate_count(),
        "built roster index"
    );
    checks::run_all(records, &index, options)
}

/// Validate parser output and wrap the findings in a report.
pub fn validate_parsed(parsed: &ParsedRoster, options: &ValidationOptions) -> ValidationReport {
    ValidationReport {
        records: parsed.records.len(),
        dropped_rows: parsed.dropped_rows,
        findings: validate_roster(&parsed.records, options),
    }
}
