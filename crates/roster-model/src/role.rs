//! Organization roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four roles a roster member may hold, highest first.
///
/// Role names are matched exactly as they appear in the roster (`"Admin"`,
/// not `"admin"`); anything else is an out-of-policy value that the parser
/// passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Top of the organization; has no supervisor.
    Root,
    Admin,
    Manager,
    Caller,
}

impl Role {
    /// All roles in hierarchy order.
    pub const ALL: [Role; 4] = [Role::Root, Role::Admin, Role::Manager, Role::Caller];

    /// Returns the canonical name as it appears in roster files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Root => "Root",
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Caller => "Caller",
        }
    }

    /// Exact-name lookup. Returns `None` for anything outside the fixed set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown role: {s}"))
    }
}
