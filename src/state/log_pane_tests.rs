//! Tests for the log pane.

use super::*;
use crate::model::LineKind;
use chrono::{TimeZone, Utc};

fn pane(count: u64) -> LogPane {
    let lines = (0..count)
        .map(|n| {
            ChatLine::new(
                LineId::from_number(n),
                Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
                "nick",
                LineKind::Message,
                format!("line {n}"),
            )
        })
        .collect();
    LogPane::new(lines)
}

#[test]
fn position_of_uses_document_order() {
    let pane = pane(5);
    assert_eq!(pane.position_of(&LineId::from_number(3)), Some(3));
    assert_eq!(pane.position_of(&LineId::from_number(9)), None);
}

#[test]
fn visible_range_is_bounded_by_log_length() {
    let mut pane = pane(5);
    pane.set_viewport_height(10);
    assert_eq!(pane.visible_range(), 0..5);
}

#[test]
fn line_at_row_accounts_for_scroll() {
    let mut pane = pane(20);
    pane.set_viewport_height(5);
    pane.scroll_by(4);

    assert_eq!(pane.line_at_row(0), Some(4));
    assert_eq!(pane.line_at_row(4), Some(8));
    assert_eq!(pane.line_at_row(5), None);
}

#[test]
fn line_at_row_past_last_line_is_none() {
    let mut pane = pane(3);
    pane.set_viewport_height(10);
    assert_eq!(pane.line_at_row(2), Some(2));
    assert_eq!(pane.line_at_row(3), None);
}

#[test]
fn cursor_movement_scrolls_to_keep_cursor_visible() {
    let mut pane = pane(20);
    pane.set_viewport_height(5);

    pane.move_cursor_by(7);
    assert_eq!(pane.cursor(), 7);
    assert_eq!(pane.scroll(), 3);

    pane.move_cursor_by(-6);
    assert_eq!(pane.cursor(), 1);
    assert_eq!(pane.scroll(), 1);
}

#[test]
fn cursor_is_clamped_to_log() {
    let mut pane = pane(4);
    pane.move_cursor_by(-3);
    assert_eq!(pane.cursor(), 0);
    pane.move_cursor_to(100);
    assert_eq!(pane.cursor(), 3);
}

#[test]
fn scroll_is_clamped_to_last_page() {
    let mut pane = pane(10);
    pane.set_viewport_height(4);
    pane.scroll_by(100);
    assert_eq!(pane.scroll(), 6);
    pane.scroll_by(-100);
    assert_eq!(pane.scroll(), 0);
}

#[test]
fn scroll_to_position_applies_top_offset_and_moves_cursor() {
    let mut pane = pane(50);
    pane.set_viewport_height(10);

    pane.scroll_to_position(30, 2);

    assert_eq!(pane.scroll(), 28);
    assert_eq!(pane.cursor(), 30);
}

#[test]
fn scroll_to_position_near_end_is_clamped() {
    let mut pane = pane(50);
    pane.set_viewport_height(10);

    pane.scroll_to_position(49, 2);

    assert_eq!(pane.scroll(), 40);
    assert_eq!(pane.cursor(), 49);
}

#[test]
fn restored_scroll_survives_first_resize() {
    let mut pane = pane(50);
    pane.scroll_to_position(30, 2);

    pane.set_viewport_height(10);

    assert_eq!(pane.scroll(), 28);
    assert!(pane.visible_range().contains(&30));
}

#[test]
fn same_height_keeps_scroll_past_cursor() {
    let mut pane = pane(20);
    pane.set_viewport_height(5);
    pane.scroll_by(10);

    pane.set_viewport_height(5);

    assert_eq!(pane.scroll(), 10);
    assert_eq!(pane.cursor(), 0);
}

#[test]
fn changed_height_brings_cursor_back_on_screen() {
    let mut pane = pane(20);
    pane.set_viewport_height(5);
    pane.scroll_by(10);

    pane.set_viewport_height(4);

    assert_eq!(pane.scroll(), 0);
}

#[test]
fn highlight_markers_are_cleared_together() {
    let mut pane = pane(5);
    pane.highlight(1);
    pane.highlight(2);
    pane.highlight(99);
    assert_eq!(pane.highlighted_positions().collect::<Vec<_>>(), [1, 2]);

    pane.clear_highlights();
    assert!(!pane.is_highlighted(1));
}

#[test]
fn empty_pane_has_no_rows() {
    let mut pane = pane(0);
    pane.set_viewport_height(5);
    pane.move_cursor_by(1);
    assert_eq!(pane.cursor(), 0);
    assert_eq!(pane.line_at_row(0), None);
    assert_eq!(pane.visible_range(), 0..0);
}
