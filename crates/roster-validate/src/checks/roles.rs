//! Unknown role check (opt-in).

use roster_model::{Finding, FindingKind, Record};

use super::row_index;

/// Flag rows whose role is not one of the four known names.
pub fn check(records: &[Record]) -> Vec<Finding> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.role().is_none())
        .map(|(position, record)| {
            Finding::new(
                row_index(position),
                &record.email,
                &record.full_name,
                FindingKind::UnknownRole,
                format!(
                    "Role '{}' is not one of Root, Admin, Manager, Caller",
                    record.role
                ),
            )
        })
        .collect()
}
