//! Roster header resolution and line splitting.

use roster_model::Record;

use crate::error::{IngestError, Result};

/// Header names every roster must carry, in display form.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Email", "FullName", "Role", "ReportsTo"];

/// Positions of the required columns within a data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterColumns {
    pub email: usize,
    pub full_name: usize,
    pub role: usize,
    pub reports_to: usize,
}

impl RosterColumns {
    /// Locates the required columns in a header line.
    ///
    /// The header is split on plain commas (quotes are not special here) and
    /// names are compared case-insensitively. The first matching column wins.
    pub fn resolve(header_line: &str) -> Result<Self> {
        let names: Vec<String> = header_line
            .strip_prefix('\u{feff}')
            .unwrap_or(header_line)
            .split(',')
            .map(|name| name.trim().to_lowercase())
            .collect();
        let find = |wanted: &str| names.iter().position(|name| name == wanted);

        let positions = REQUIRED_COLUMNS.map(|column| find(&column.to_lowercase()));
        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .zip(positions)
            .filter(|(_, position)| position.is_none())
            .map(|(column, _)| *column)
            .collect();

        match positions {
            [Some(email), Some(full_name), Some(role), Some(reports_to)] => Ok(Self {
                email,
                full_name,
                role,
                reports_to,
            }),
            _ => Err(IngestError::MissingColumns { missing }),
        }
    }

    /// Smallest field count a data line needs to yield a record.
    pub fn min_fields(&self) -> usize {
        self.email
            .max(self.full_name)
            .max(self.role)
            .max(self.reports_to)
            + 1
    }

    /// Builds a record from split fields, or `None` if the line is too short.
    pub fn record_from(&self, mut fields: Vec<String>) -> Option<Record> {
        if fields.len() < self.min_fields() {
            return None;
        }
        let mut take = |idx: usize| std::mem::take(&mut fields[idx]);
        Some(Record {
            email: take(self.email),
            full_name: take(self.full_name),
            role: take(self.role),
            reports_to: take(self.reports_to),
        })
    }
}

/// Splits a data line into trimmed fields.
///
/// A double quote flips the in-quotes state and is dropped; a comma ends the
/// field only outside quotes. There is no escape sequence, so `""` inside a
/// quoted field simply toggles twice. An unclosed quote runs to the end of
/// the line.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}
