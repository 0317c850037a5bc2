//! Log input sources.
//!
//! This module provides input sources for JSONL chat logs:
//! - File loading for a log on disk
//! - Stdin for piped input
//! - Unified InputSource enum for both
//!
//! Both are read once; the rendered log does not change afterwards.

use crate::model::error::InputError;
use crate::parser::{self, ParsedLog};
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for JSONL log data.
#[derive(Debug)]
pub enum InputSource {
    /// Log file on disk
    File(FileSource),
    /// Piped stdin
    Stdin(StdinSource),
}

impl InputSource {
    /// Read the whole source and parse it.
    ///
    /// Returns parsed lines, not raw strings (parse at boundary). Malformed
    /// records are returned alongside, not as an error.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn load(&mut self) -> Result<ParsedLog, InputError> {
        let contents = match self {
            InputSource::File(f) => f.read_all()?,
            InputSource::Stdin(s) => s.read_all()?,
        };
        Ok(parser::parse_log(&contents))
    }
}

/// Detect and create appropriate input source.
///
/// A file path wins; without one, stdin is read.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new())),
    }
}
