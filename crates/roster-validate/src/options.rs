//! Validation options.

use serde::{Deserialize, Serialize};

/// Optional checks layered on top of the hierarchy rules.
///
/// The default runs the hierarchy rules and cycle detection only: duplicate
/// emails resolve last-row-wins and unknown role names pass through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Report every row whose email also appears on another row.
    pub flag_duplicate_emails: bool,
    /// Report rows whose role is not Root, Admin, Manager or Caller.
    pub flag_unknown_roles: bool,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable every optional check.
    pub fn strict() -> Self {
        Self {
            flag_duplicate_emails: true,
            flag_unknown_roles: true,
        }
    }

    pub fn with_duplicate_emails(mut self, enable: bool) -> Self {
        self.flag_duplicate_emails = enable;
        self
    }

    pub fn with_unknown_roles(mut self, enable: bool) -> Self {
        self.flag_unknown_roles = enable;
        self
    }
}
