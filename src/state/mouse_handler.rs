//! Mouse event handler.
//!
//! Maps clicks in the log pane to lines. Only the timestamp column selects;
//! a click anywhere else on a line just moves the cursor there.

use crate::model::Selection;
use crate::state::{AppState, LogPane};
use ratatui::layout::Rect;

/// Columns taken by the `HH:MM:SS` timestamp at the start of every row.
pub const TIMESTAMP_COLUMN_WIDTH: u16 = 8;

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClickResult {
    /// On the timestamp of the line at this position
    Timestamp(usize),
    /// On the body of the line at this position
    Body(usize),
    /// Outside any line
    Outside,
}

/// Detect which line (if any) a click at `(click_x, click_y)` hit.
///
/// # Arguments
/// * `click_x` - Mouse click column position (0-based)
/// * `click_y` - Mouse click row position (0-based)
/// * `pane_area` - Where the log pane was last drawn
/// * `pane` - The pane, for scroll position and line count
pub fn detect_line_click(
    click_x: u16,
    click_y: u16,
    pane_area: Rect,
    pane: &LogPane,
) -> LineClickResult {
    if click_x < pane_area.x
        || click_x >= pane_area.x + pane_area.width
        || click_y < pane_area.y
        || click_y >= pane_area.y + pane_area.height
    {
        return LineClickResult::Outside;
    }

    let row = usize::from(click_y - pane_area.y);
    let Some(position) = pane.line_at_row(row) else {
        return LineClickResult::Outside;
    };

    if click_x - pane_area.x < TIMESTAMP_COLUMN_WIDTH {
        LineClickResult::Timestamp(position)
    } else {
        LineClickResult::Body(position)
    }
}

/// Handle a left click in the log pane.
///
/// A timestamp click is forwarded to the selector with the shift state; a
/// body click moves the cursor. Returns the selection after the click.
pub fn handle_mouse_click(
    state: &mut AppState,
    click_x: u16,
    click_y: u16,
    pane_area: Rect,
    shift_held: bool,
) -> Option<Selection> {
    match detect_line_click(click_x, click_y, pane_area, state.pane()) {
        LineClickResult::Timestamp(position) => {
            state.pane_mut().move_cursor_to(position);
            state.click_line(position, shift_held)
        }
        LineClickResult::Body(position) => {
            state.pane_mut().move_cursor_to(position);
            state.selection().cloned()
        }
        LineClickResult::Outside => state.selection().cloned(),
    }
}

/// Scroll the pane by one row per wheel notch.
pub fn handle_mouse_scroll(state: &mut AppState, is_scroll_up: bool) {
    state.pane_mut().scroll_by(if is_scroll_up { -1 } else { 1 });
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
