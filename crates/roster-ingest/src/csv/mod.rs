//! CSV roster parsing.

mod header;
mod reader;

pub use header::{REQUIRED_COLUMNS, RosterColumns, parse_csv_line};
pub use reader::{MAX_ROSTER_FILE_SIZE, ParsedRoster, parse_roster, read_roster};
