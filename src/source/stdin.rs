//! Stdin-based log source for piped input.

use crate::model::error::InputError;
use std::fmt;
use std::io::Read;

/// Reads a complete JSONL log from stdin (or any reader, for tests).
pub struct StdinSource {
    reader: Box<dyn Read>,
}

impl StdinSource {
    /// Source reading the process's stdin.
    pub fn new() -> Self {
        Self::from_reader(std::io::stdin())
    }

    /// Source reading from any reader.
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Read until EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` on read failures or invalid UTF-8.
    pub fn read_all(&mut self) -> Result<String, InputError> {
        let mut contents = String::new();
        self.reader.read_to_string(&mut contents)?;
        Ok(contents)
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}
