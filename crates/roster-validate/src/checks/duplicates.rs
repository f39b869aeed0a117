//! Duplicate email check (opt-in).

use roster_model::{Finding, FindingKind, Record};

use super::row_index;
use crate::index::RosterIndex;

/// Flag every row whose email appears on more than one row.
pub fn check(records: &[Record], index: &RosterIndex<'_>) -> Vec<Finding> {
    records
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let count = index.occurrences(&record.email);
            (count > 1).then(|| {
                Finding::new(
                    row_index(position),
                    &record.email,
                    &record.full_name,
                    FindingKind::DuplicateEmail,
                    format!(
                        "Email {} appears {} times; the last row is used for lookups",
                        record.email, count
                    ),
                )
            })
        })
        .collect()
}
