//! Error types for csvpeek.
//!
//! This module defines the error taxonomy using `thiserror` for structured error handling.
//! Errors compose via `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`SourceError`] - Delimited-file reading failures (not found, I/O, malformed record)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file and value validation failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Recovery Strategy
//!
//! Every error in this module is fatal. A malformed record aborts the window rebuild that
//! hit it and then the process; there is no degraded partial-window mode. Requesting a row
//! past the end of the file is *not* an error: it yields an empty window whose
//! `reached_end` flag is set (see [`Window`](crate::window::Window)).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Returned from the TUI entry point. The terminal is always restored before
/// this error reaches `main`, so it can be printed to stderr directly.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read records from the delimited file.
    #[error("Failed to read input: {0}")]
    Source(#[from] SourceError),

    /// Invalid configuration (config file, environment or CLI values).
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Raised by the crossterm/ratatui layer (raw mode, alternate screen, draw).
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading records from a delimited file.
///
/// # Recovery Patterns
///
/// - **NotFound**: display error and exit (user provided an invalid path)
/// - **Io**: read failure while opening or mid-stream - display and exit
/// - **MalformedRecord**: delimited-format violation - display position and exit
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use csvpeek::model::error::SourceError;
    ///
    /// let err = SourceError::NotFound {
    ///     path: PathBuf::from("/tmp/missing.csv")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.csv"));
    /// ```
    #[error("File not found: {path}")]
    NotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O error while opening or reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record violates the delimited format.
    ///
    /// Raised for records whose field count differs from the header's and for
    /// fields that are not valid UTF-8. The position fields locate the violation
    /// so that failures deep inside very large files can be found with other tools.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvpeek::model::error::SourceError;
    ///
    /// let err = SourceError::MalformedRecord {
    ///     row: Some(41),
    ///     line: 43,
    ///     byte: 1024,
    ///     reason: "found record with 2 fields, but the previous record has 3 fields".into(),
    /// };
    /// let msg = err.to_string();
    /// assert!(msg.contains("row 41"));
    /// assert!(msg.contains("line 43"));
    /// ```
    #[error("Malformed record at {} (line {line}, byte {byte}): {reason}", describe_row(*row))]
    MalformedRecord {
        /// 0-based data row index (header excluded); `None` when the header itself is malformed.
        row: Option<usize>,
        /// 1-based line number in the file where the record starts.
        line: u64,
        /// Byte offset in the file where the record starts.
        byte: u64,
        /// Parser-reported description of the violation.
        reason: String,
    },
}

fn describe_row(row: Option<usize>) -> String {
    match row {
        Some(row) => format!("row {}", row),
        None => "header".to_string(),
    }
}
