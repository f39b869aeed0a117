//! Roster ingestion.
//!
//! Turns delimited roster text into [`Record`](roster_model::Record)s.
//!
//! # Input format
//!
//! - First line is the header. It must name `Email`, `FullName`, `Role` and
//!   `ReportsTo` (any case, any order). Missing columns fail the whole input.
//! - Data lines are comma separated; a double quote toggles quoting so that
//!   `"Doe, John"` stays one field.
//! - Blank lines are skipped. Lines with too few fields are dropped and
//!   counted in [`ParsedRoster::dropped_rows`].
//!
//! # Example
//!
//! ```ignore
//! use roster_ingest::{parse_roster, read_roster};
//!
//! let parsed = parse_roster("Email,FullName,Role,ReportsTo\nroot@x.com,Root,Root,\n")?;
//! assert_eq!(parsed.records.len(), 1);
//!
//! let parsed = read_roster(std::path::Path::new("roster.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Parsing ===
pub use csv::{
    MAX_ROSTER_FILE_SIZE, ParsedRoster, REQUIRED_COLUMNS, RosterColumns, parse_csv_line,
    parse_roster, read_roster,
};
