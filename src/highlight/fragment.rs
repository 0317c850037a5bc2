//! Location fragment codec for highlight selections.
//!
//! Accepted forms are `#c<N>` and `#c<N>-c<M>`, nothing else: no surrounding
//! whitespace, no uppercase prefix, no trailing characters.

use crate::model::{LineId, Selection};
use regex::Regex;
use std::sync::OnceLock;

/// Fragment pattern shared with links produced by the web viewer.
static FRAGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn fragment_regex() -> &'static Regex {
    FRAGMENT_REGEX.get_or_init(|| {
        Regex::new(r"^#(c[0-9]+)(-(c[0-9]+))?$").expect("Failed to compile fragment regex")
    })
}

/// Decode a fragment (including its leading `#`).
///
/// Returns the selection exactly as written. Ends are not reordered and a
/// range whose ends are equal is not collapsed; resolving against a view is
/// the selector's job. Returns `None` for anything that does not match.
pub fn parse(fragment: &str) -> Option<Selection> {
    let captures = fragment_regex().captures(fragment)?;
    let start = LineId::parse(captures.get(1)?.as_str()).ok()?;
    let end = match captures.get(3) {
        Some(end) => Some(LineId::parse(end.as_str()).ok()?),
        None => None,
    };
    Some(Selection::new(start, end))
}

/// Encode a selection as a fragment (including its leading `#`).
pub fn encode(selection: &Selection) -> String {
    selection.fragment()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> LineId {
        LineId::parse(raw).unwrap()
    }

    #[test]
    fn parses_single_line() {
        assert_eq!(parse("#c7"), Some(Selection::single(id("c7"))));
    }

    #[test]
    fn parses_range_without_reordering() {
        let selection = parse("#c9-c2").expect("valid fragment");
        assert_eq!(selection.start(), &id("c9"));
        assert_eq!(selection.end(), Some(&id("c2")));
    }

    #[test]
    fn parses_range_with_equal_ends_verbatim() {
        let selection = parse("#c4-c4").expect("valid fragment");
        assert_eq!(selection.end(), Some(&id("c4")));
    }

    #[test]
    fn rejects_near_misses() {
        for fragment in [
            "",
            "#",
            "c7",
            "#C7",
            "#c",
            "#c7-",
            "#c7-c",
            "#c7-7",
            "#c7 ",
            " #c7",
            "#c7\n",
            "#c7-c8-c9",
            "#c-1",
            "#c7x",
            "##c7",
        ] {
            assert_eq!(parse(fragment), None, "{fragment:?} should not parse");
        }
    }

    #[test]
    fn encode_matches_parse_input() {
        for fragment in ["#c0", "#c12-c40", "#c007"] {
            let selection = parse(fragment).expect("valid fragment");
            assert_eq!(encode(&selection), fragment);
        }
    }
}
