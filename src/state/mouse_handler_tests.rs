//! Tests for mouse click handling.

use super::*;
use crate::highlight::PageLocation;
use crate::model::{ChatLine, LineId, LineKind};
use chrono::{TimeZone, Utc};

/// Pane drawn at column 0, row 1, 60x5, over `c0`..`c19`.
fn setup() -> (AppState, Rect) {
    let lines = (0..20)
        .map(|n| {
            ChatLine::new(
                LineId::from_number(n),
                Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
                "nick",
                LineKind::Message,
                "text",
            )
        })
        .collect();
    let mut state = AppState::new(lines, PageLocation::parse("/perl"), 2);
    state.pane_mut().set_viewport_height(5);
    (state, Rect::new(0, 1, 60, 5))
}

#[test]
fn click_in_timestamp_column_hits_timestamp() {
    let (state, area) = setup();
    assert_eq!(
        detect_line_click(0, 1, area, state.pane()),
        LineClickResult::Timestamp(0)
    );
    assert_eq!(
        detect_line_click(7, 3, area, state.pane()),
        LineClickResult::Timestamp(2)
    );
}

#[test]
fn click_after_timestamp_hits_body() {
    let (state, area) = setup();
    assert_eq!(
        detect_line_click(8, 2, area, state.pane()),
        LineClickResult::Body(1)
    );
}

#[test]
fn click_outside_pane_is_outside() {
    let (state, area) = setup();
    assert_eq!(
        detect_line_click(3, 0, area, state.pane()),
        LineClickResult::Outside
    );
    assert_eq!(
        detect_line_click(3, 6, area, state.pane()),
        LineClickResult::Outside
    );
    assert_eq!(
        detect_line_click(60, 2, area, state.pane()),
        LineClickResult::Outside
    );
}

#[test]
fn click_accounts_for_scroll() {
    let (mut state, area) = setup();
    state.pane_mut().scroll_by(10);
    assert_eq!(
        detect_line_click(1, 1, area, state.pane()),
        LineClickResult::Timestamp(10)
    );
}

#[test]
fn timestamp_click_then_shift_click_selects_range() {
    let (mut state, area) = setup();

    handle_mouse_click(&mut state, 2, 2, area, false);
    let selection = handle_mouse_click(&mut state, 2, 5, area, true).expect("range");

    assert_eq!(selection.to_string(), "c1-c4");
    assert_eq!(state.location().href(), "/perl#c1-c4");
}

#[test]
fn body_click_moves_cursor_without_selecting() {
    let (mut state, area) = setup();

    let selection = handle_mouse_click(&mut state, 30, 4, area, false);

    assert_eq!(selection, None);
    assert_eq!(state.pane().cursor(), 3);
    assert_eq!(state.location().replacements(), 0);
}

#[test]
fn scroll_wheel_moves_viewport() {
    let (mut state, _) = setup();
    handle_mouse_scroll(&mut state, false);
    handle_mouse_scroll(&mut state, false);
    assert_eq!(state.pane().scroll(), 2);
    handle_mouse_scroll(&mut state, true);
    assert_eq!(state.pane().scroll(), 1);
}
