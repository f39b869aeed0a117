//! Error types for roster ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort ingestion of a whole roster.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Header Errors ===
    /// One or more required header columns are absent.
    #[error(
        "CSV format invalid. Required columns: Email, FullName, Role, ReportsTo (missing: {})",
        .missing.join(", ")
    )]
    MissingColumns { missing: Vec<&'static str> },

    // === File System Errors ===
    /// Roster file not found.
    #[error("roster file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Content Errors ===
    /// File uses a text encoding we cannot read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File is not valid UTF-8.
    #[error("file {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    /// File is a spreadsheet or other binary container.
    #[error("unsupported file format '{extension}' for {path}: export the sheet as CSV")]
    UnsupportedFormat { path: PathBuf, extension: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
