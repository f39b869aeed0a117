//! CLI argument definitions for the roster checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster-check",
    version,
    about = "Validate the reporting hierarchy of an organization roster",
    long_about = "Validate the reporting hierarchy of an organization roster CSV.\n\n\
                  Checks role ordering (Admin -> Root, Manager -> Admin/Manager,\n\
                  Caller -> Manager), multiple supervisors, unknown supervisors,\n\
                  and reporting cycles."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a roster CSV file.
    Validate(ValidateArgs),

    /// Print the role-ordering policy.
    Policy,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Roster CSV with Email, FullName, Role and ReportsTo columns.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for the results.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Enable every optional check (duplicate emails, unknown roles).
    #[arg(long = "strict")]
    pub strict: bool,

    /// Report rows that share an email with another row.
    ///
    /// Without this flag the last row with a given email silently wins.
    #[arg(long = "flag-duplicates")]
    pub flag_duplicates: bool,

    /// Report rows whose role is not Root, Admin, Manager or Caller.
    #[arg(long = "flag-unknown-roles")]
    pub flag_unknown_roles: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
