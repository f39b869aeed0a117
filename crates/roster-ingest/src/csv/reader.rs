//! Roster parsing from text and from files.

use std::path::Path;

use roster_model::Record;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

use super::header::{RosterColumns, parse_csv_line};

/// Maximum roster file size (64 MB).
pub const MAX_ROSTER_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Extensions of spreadsheet containers that must be converted to CSV first.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "ods"];

/// Records parsed from one roster input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRoster {
    /// Records in input order.
    pub records: Vec<Record>,
    /// Non-blank data lines skipped for having too few fields.
    pub dropped_rows: usize,
}

/// Parses roster text.
///
/// Lines are split on `\n` or `\r\n`; the first line is the header. Blank
/// data lines are skipped. A data line with fewer fields than the rightmost
/// required column is dropped without error.
pub fn parse_roster(text: &str) -> Result<ParsedRoster> {
    let mut lines = text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));
    let header = lines.next().unwrap_or_default();
    let columns = RosterColumns::resolve(header)?;

    let mut parsed = ParsedRoster::default();
    for (offset, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match columns.record_from(parse_csv_line(line)) {
            Some(record) => parsed.records.push(record),
            None => {
                debug!(
                    line = offset + 2,
                    required = columns.min_fields(),
                    "dropping short roster line"
                );
                parsed.dropped_rows += 1;
            }
        }
    }

    if parsed.dropped_rows > 0 {
        warn!(
            dropped_rows = parsed.dropped_rows,
            "skipped roster lines with too few fields"
        );
    }
    debug!(records = parsed.records.len(), "parsed roster");
    Ok(parsed)
}

/// Reads and parses a roster CSV file.
///
/// The file must be UTF-8 text (a UTF-8 BOM is accepted). Spreadsheet
/// containers are rejected by extension.
pub fn read_roster(path: &Path) -> Result<ParsedRoster> {
    reject_spreadsheet(path)?;
    check_file_size(path, MAX_ROSTER_FILE_SIZE)?;

    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    check_encoding(path, &bytes)?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    debug!(path = %path.display(), bytes = text.len(), "read roster file");
    parse_roster(&text)
}

fn reject_spreadsheet(path: &Path) -> Result<()> {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return Ok(());
    };
    let extension = extension.to_lowercase();
    if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        return Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    }
    Ok(())
}

fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Rejects UTF-16 byte order marks.
fn check_encoding(path: &Path, bytes: &[u8]) -> Result<()> {
    let encoding = match bytes {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(suffix: &str, content: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_parse_roster_crlf() {
        let parsed =
            parse_roster("Email,FullName,Role,ReportsTo\r\nroot@x.com,Root,Root,\r\n").unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].reports_to, "");
    }

    #[test]
    fn test_parse_roster_empty_input() {
        let err = parse_roster("").unwrap_err();
        assert!(matches!(err, IngestError::MissingColumns { ref missing } if missing.len() == 4));
    }

    #[test]
    fn test_read_roster_with_bom() {
        let file = create_temp_file(
            ".csv",
            "\u{feff}Email,FullName,Role,ReportsTo\nroot@x.com,Root,Root,\n".as_bytes(),
        );
        let parsed = read_roster(file.path()).unwrap();
        assert_eq!(parsed.records[0].email, "root@x.com");
    }

    #[test]
    fn test_read_roster_utf16_rejected() {
        let file = create_temp_file(".csv", &[0xFF, 0xFE, b'E', 0x00]);
        let result = read_roster(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_roster_invalid_utf8() {
        let file = create_temp_file(".csv", &[b'E', 0xC3, 0x28]);
        assert!(matches!(
            read_roster(file.path()),
            Err(IngestError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_read_roster_spreadsheet_rejected() {
        let file = create_temp_file(".XLSX", b"PK");
        let result = read_roster(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedFormat { ref extension, .. }) if extension == "xlsx"
        ));
    }

    #[test]
    fn test_read_roster_missing_file() {
        let result = read_roster(Path::new("/definitely/not/here/roster.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_check_file_size_limit() {
        let file = create_temp_file(".csv", b"Email,FullName,Role,ReportsTo\n");
        let result = check_file_size(file.path(), 4);
        assert!(matches!(result, Err(IngestError::FileTooLarge { max_size: 4, .. })));
    }
}
