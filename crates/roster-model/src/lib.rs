//! Shared types for roster ingestion and hierarchy validation.
//!
//! The parser produces [`Record`]s, the validator produces [`Finding`]s, and
//! both are gathered into a [`ValidationReport`] for rendering.

pub mod finding;
pub mod record;
pub mod report;
pub mod role;

pub use finding::{Finding, FindingKind};
pub use record::{Record, SUPERVISOR_DELIMITER};
pub use report::ValidationReport;
pub use role::Role;
