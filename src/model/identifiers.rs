//! Line identifier newtype with a smart constructor.
//!
//! Every rendered line carries an id of the form `c<digits>`. The digits are
//! kept exactly as written so an id read from a shared link renders back to
//! the same text.

use std::fmt;

const LINE_ID_PREFIX: char = 'c';

/// Stable identifier of a rendered log line (`c17`, `c4096`, ...).
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Smart constructor: accepts exactly `c` followed by one or more ASCII digits.
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidLineId> {
        let raw = raw.into();
        let Some(digits) = raw.strip_prefix(LINE_ID_PREFIX) else {
            return Err(if raw.is_empty() {
                InvalidLineId::Empty
            } else {
                InvalidLineId::MissingPrefix(raw)
            });
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidLineId::NonDigit(raw));
        }
        Ok(Self(raw))
    }

    /// Build the id for a numeric event identifier.
    pub fn from_number(number: u64) -> Self {
        Self(format!("{LINE_ID_PREFIX}{number}"))
    }

    /// The id as it appears in markup and fragments.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejection reasons for [`LineId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLineId {
    /// Nothing to parse.
    #[error("Line ID cannot be empty")]
    Empty,
    /// The id does not start with `c`.
    #[error("Line ID must start with 'c': {0:?}")]
    MissingPrefix(String),
    /// The part after `c` is empty or not all digits.
    #[error("Line ID must be 'c' followed by digits: {0:?}")]
    NonDigit(String),
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_id_accepts_prefixed_digits() {
        let id = LineId::parse("c42").expect("valid id");
        assert_eq!(id.as_str(), "c42");
    }

    #[test]
    fn line_id_keeps_leading_zeros() {
        let id = LineId::parse("c007").expect("valid id");
        assert_eq!(id.to_string(), "c007");
    }

    #[test]
    fn line_id_rejects_empty_string() {
        assert_eq!(LineId::parse(""), Err(InvalidLineId::Empty));
    }

    #[test]
    fn line_id_rejects_missing_prefix() {
        assert!(matches!(
            LineId::parse("42"),
            Err(InvalidLineId::MissingPrefix(_))
        ));
        assert!(matches!(
            LineId::parse("C42"),
            Err(InvalidLineId::MissingPrefix(_))
        ));
    }

    #[test]
    fn line_id_rejects_bare_prefix() {
        assert!(matches!(LineId::parse("c"), Err(InvalidLineId::NonDigit(_))));
    }

    #[test]
    fn line_id_rejects_non_ascii_digits() {
        assert!(matches!(
            LineId::parse("c4a"),
            Err(InvalidLineId::NonDigit(_))
        ));
        // Arabic-Indic digit four
        assert!(matches!(
            LineId::parse("c\u{0664}"),
            Err(InvalidLineId::NonDigit(_))
        ));
    }

    #[test]
    fn from_number_matches_parse() {
        assert_eq!(LineId::from_number(913), LineId::parse("c913").unwrap());
    }
}
