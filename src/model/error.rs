//! Error types for logbot-view.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions.
//!
//! # Error Types
//!
//! - [`InputError`] - Log file/stdin reading failures
//! - [`ParseError`] - Per-record JSONL failures
//!
//! Terminal failures are `std::io::Error`, wrapped by `view::TuiError`.
//!
//! # Error Recovery Strategy
//!
//! Parse errors are **non-fatal**: the record is skipped, reported through
//! `tracing`, and the rest of the log is shown. Input and terminal errors are
//! fatal and propagate to `main`.
//!
//! Highlight selection never produces errors. A bad fragment or an unknown
//! line id degrades to "nothing highlighted".

use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered when reading log input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified log file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use logbot_view::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O error reading from input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing one JSONL log record.
///
/// All variants carry the 1-indexed input line so the report points at the
/// offending record.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The record is not valid JSON or lacks required fields.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// Input line number.
        line: usize,
        /// `serde_json` error text.
        message: String,
    },

    /// The `time` field is not an RFC 3339 timestamp.
    #[error("Invalid timestamp '{raw}' at line {line}")]
    InvalidTimestamp {
        /// Input line number.
        line: usize,
        /// The rejected value.
        raw: String,
    },

    /// The `type` field names an event kind the viewer does not know.
    #[error("Unknown event type '{raw}' at line {line}")]
    UnknownKind {
        /// Input line number.
        line: usize,
        /// The rejected value.
        raw: String,
    },

    /// Two records resolved to the same line id.
    #[error("Duplicate line id '{id}' at line {line}")]
    DuplicateId {
        /// Input line number.
        line: usize,
        /// The id that was already taken.
        id: String,
    },
}

impl ParseError {
    /// Input line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidJson { line, .. }
            | Self::InvalidTimestamp { line, .. }
            | Self::UnknownKind { line, .. }
            | Self::DuplicateId { line, .. } => *line,
        }
    }
}
