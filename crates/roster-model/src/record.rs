//! Roster records.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Separator between supervisor emails inside a `ReportsTo` field.
pub const SUPERVISOR_DELIMITER: char = ';';

/// One roster entry, as read from a data line.
///
/// `role` and `reports_to` hold the raw field values. Use [`Record::role`]
/// and [`Record::supervisors`] for the interpreted forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub reports_to: String,
}

impl Record {
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        role: impl Into<String>,
        reports_to: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            role: role.into(),
            reports_to: reports_to.into(),
        }
    }

    /// The role, if the raw value names one of the four known roles.
    pub fn role(&self) -> Option<Role> {
        Role::from_name(&self.role)
    }

    /// True when the `ReportsTo` field lists more than one reference.
    ///
    /// Any delimiter counts, so `"a@x.com;"` is treated as a multi-supervisor
    /// value even though its second reference is empty.
    pub fn has_multiple_supervisors(&self) -> bool {
        self.reports_to.contains(SUPERVISOR_DELIMITER)
    }

    /// Non-empty supervisor references in the order they appear.
    ///
    /// References are not trimmed.
    pub fn supervisors(&self) -> impl Iterator<Item = &str> {
        self.reports_to
            .split(SUPERVISOR_DELIMITER)
            .filter(|reference| !reference.is_empty())
    }
}
