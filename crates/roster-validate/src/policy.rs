//! Role-ordering policy.
//!
//! Every role except Root names the roles its supervisor may hold. Root has
//! no rule; a Root row with a supervisor is only checked for existence and
//! cycles.

use roster_model::Role;

/// Which supervisor roles a subordinate role accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingRule {
    pub role: Role,
    pub allowed: &'static [Role],
    /// Phrase used in violation messages, e.g. "must report only to Root".
    pub requirement: &'static str,
}

/// The fixed policy, in hierarchy order.
pub const POLICY: [ReportingRule; 3] = [
    ReportingRule {
        role: Role::Admin,
        allowed: &[Role::Root],
        requirement: "must report only to Root",
    },
    ReportingRule {
        role: Role::Manager,
        allowed: &[Role::Admin, Role::Manager],
        requirement: "must report to Admin or Manager",
    },
    ReportingRule {
        role: Role::Caller,
        allowed: &[Role::Manager],
        requirement: "must report only to Manager",
    },
];

/// The rule for a subordinate role, or `None` for Root.
pub fn rule_for(role: Role) -> Option<&'static ReportingRule> {
    POLICY.iter().find(|rule| rule.role == role)
}

impl ReportingRule {
    /// Whether a supervisor with this raw role value is acceptable.
    ///
    /// Comparison is exact, so an unknown or differently cased supervisor
    /// role never satisfies a rule.
    pub fn permits(&self, supervisor_role: &str) -> bool {
        self.allowed
            .iter()
            .any(|role| role.as_str() == supervisor_role)
    }
}
