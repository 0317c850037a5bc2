//! Unparseable log records.
//!
//! A record that cannot become a [`ChatLine`](crate::model::ChatLine) is kept
//! aside with its line number so the shell can report it and keep going.

use crate::model::ParseError;

/// A log record that was skipped.
#[derive(Debug)]
pub struct MalformedLine {
    line_number: usize,
    raw_line: String,
    error: ParseError,
}

impl MalformedLine {
    /// Create a new malformed record.
    ///
    /// # Arguments
    ///
    /// * `line_number` - The line number in the input (1-indexed)
    /// * `raw_line` - The raw content that failed to parse
    /// * `error` - Why it was rejected
    pub fn new(line_number: usize, raw_line: impl Into<String>, error: ParseError) -> Self {
        Self {
            line_number,
            raw_line: raw_line.into(),
            error,
        }
    }

    /// Get the line number where the error occurred.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Get the raw line content.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Get the rejection reason.
    pub fn error(&self) -> &ParseError {
        &self.error
    }
}
