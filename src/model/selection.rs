//! Highlight selection value type.

use crate::model::LineId;
use std::fmt;

/// A contiguous inclusive range of lines, `start` through `end`.
///
/// `end == None` is a single-line selection. Values produced by the range
/// selector are normalized: `start` never comes after `end` in document order
/// and `end` is never equal to `start`. Values decoded from a fragment are
/// kept as written until the selector resolves them against a view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    start: LineId,
    end: Option<LineId>,
}

impl Selection {
    /// Selection exactly as given, no collapsing.
    pub fn new(start: LineId, end: Option<LineId>) -> Self {
        Self { start, end }
    }

    /// Single-line selection.
    pub fn single(start: LineId) -> Self {
        Self { start, end: None }
    }

    /// Range selection; collapses to a single line when both ends are equal.
    pub fn range(start: LineId, end: LineId) -> Self {
        if start == end {
            Self::single(start)
        } else {
            Self {
                start,
                end: Some(end),
            }
        }
    }

    /// First selected line.
    pub fn start(&self) -> &LineId {
        &self.start
    }

    /// Last selected line, `None` for a single-line selection.
    pub fn end(&self) -> Option<&LineId> {
        self.end.as_ref()
    }

    /// True when only one line is selected.
    pub fn is_single(&self) -> bool {
        self.end.as_ref().is_none_or(|end| *end == self.start)
    }

    /// Encode as a location fragment: `#c<N>` or `#c<N>-c<M>`.
    pub fn fragment(&self) -> String {
        format!("#{self}")
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}", self.start),
        }
    }
}
