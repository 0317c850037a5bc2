//! Where the current selection is written so it can be shared.
//!
//! The selector only sees [`SelectionPersistence`]. [`PageLocation`] is the
//! concrete navigable entry used by the viewer: a path, a query and a
//! fragment, where writing a fragment replaces the current entry in place.

use std::fmt;

/// Read/write access to the fragment of the current location.
pub trait SelectionPersistence {
    /// Current fragment including the leading `#`, or an empty string.
    fn read_fragment(&self) -> String;

    /// Replace the fragment. An empty string strips it.
    fn write_fragment(&mut self, fragment: &str);
}

/// The location of the page being viewed.
///
/// Fragment writes replace the current entry; no history stack is kept and
/// nothing is reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLocation {
    path: String,
    query: String,
    fragment: String,
    replacements: usize,
}

impl PageLocation {
    /// Split a location such as `/perl/20240101?nick=bob#c4-c9`.
    ///
    /// The fragment starts at the first `#`, the query at the first `?`
    /// before it. Both keep their leading delimiter.
    pub fn parse(raw: &str) -> Self {
        let (rest, fragment) = match raw.find('#') {
            Some(at) => raw.split_at(at),
            None => (raw, ""),
        };
        let (path, query) = match rest.find('?') {
            Some(at) => rest.split_at(at),
            None => (rest, ""),
        };
        Self {
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
            replacements: 0,
        }
    }

    /// Path component.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query component including `?`, or empty.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Fragment component including `#`, or empty.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Full shareable location: path, query, fragment.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.path, self.query, self.fragment)
    }

    /// How many times the fragment has been replaced since load.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.path, self.query, self.fragment)
    }
}

impl SelectionPersistence for PageLocation {
    fn read_fragment(&self) -> String {
        self.fragment.clone()
    }

    fn write_fragment(&mut self, fragment: &str) {
        self.fragment = if fragment.is_empty() || fragment.starts_with('#') {
            fragment.to_string()
        } else {
            format!("#{fragment}")
        };
        self.replacements += 1;
    }
}
