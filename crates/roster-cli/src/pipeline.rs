//! Load-and-validate pipeline behind the `validate` command.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use roster_ingest::read_roster;
use roster_model::{Record, ValidationReport};
use roster_validate::{ValidationOptions, validate_parsed};

/// Everything the renderers need for one roster file.
#[derive(Debug, Serialize)]
pub struct RosterResult {
    pub file: PathBuf,
    pub records: Vec<Record>,
    pub report: ValidationReport,
}

impl RosterResult {
    pub fn has_findings(&self) -> bool {
        !self.report.is_valid()
    }
}

/// Build validation options from the individual CLI switches.
pub fn validation_options(
    strict: bool,
    flag_duplicates: bool,
    flag_unknown_roles: bool,
) -> ValidationOptions {
    if strict {
        return ValidationOptions::strict();
    }
    ValidationOptions::new()
        .with_duplicate_emails(flag_duplicates)
        .with_unknown_roles(flag_unknown_roles)
}

/// Read, parse and validate one roster file.
pub fn check_roster(path: &Path, options: &ValidationOptions) -> Result<RosterResult> {
    let span = info_span!("roster", file = %path.display());
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let parsed =
        read_roster(path).with_context(|| format!("load roster: {}", path.display()))?;
    info!(
        records = parsed.records.len(),
        dropped_rows = parsed.dropped_rows,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let validate_start = Instant::now();
    let report = validate_parsed(&parsed, options);
    info!(
        findings = report.findings.len(),
        duration_ms = validate_start.elapsed().as_millis(),
        "validation complete"
    );

    Ok(RosterResult {
        file: path.to_path_buf(),
        records: parsed.records,
        report,
    })
}
