//! Validation findings.
//!
//! A finding is tied to one roster row. Findings are never fatal; the
//! validator keeps going after emitting one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of problem a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingKind {
    /// Supervisor's role is not allowed for the subordinate's role.
    HierarchyViolation,
    /// `ReportsTo` lists more than one supervisor.
    MultipleSupervisors,
    /// Row is part of a reports-to cycle.
    CycleDetected,
    /// `ReportsTo` names an email that is not in the roster.
    InvalidSupervisor,
    /// Email occurs on more than one row (opt-in check).
    DuplicateEmail,
    /// Role is not one of Root, Admin, Manager, Caller (opt-in check).
    UnknownRole,
}

impl FindingKind {
    pub const ALL: [FindingKind; 6] = [
        FindingKind::HierarchyViolation,
        FindingKind::MultipleSupervisors,
        FindingKind::CycleDetected,
        FindingKind::InvalidSupervisor,
        FindingKind::DuplicateEmail,
        FindingKind::UnknownRole,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HierarchyViolation => "Hierarchy Violation",
            Self::MultipleSupervisors => "Multiple Supervisors",
            Self::CycleDetected => "Cycle Detected",
            Self::InvalidSupervisor => "Invalid Supervisor",
            Self::DuplicateEmail => "Duplicate Email",
            Self::UnknownRole => "Unknown Role",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A problem found on a specific roster row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// 1-based line number in the source file, counting the header as line 1.
    pub row_index: usize,
    pub email: String,
    pub full_name: String,
    pub kind: FindingKind,
    pub detail: String,
}

impl Finding {
    pub fn new(
        row_index: usize,
        email: impl Into<String>,
        full_name: impl Into<String>,
        kind: FindingKind,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            row_index,
            email: email.into(),
            full_name: full_name.into(),
            kind,
            detail: detail.into(),
        }
    }
}
