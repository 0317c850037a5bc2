//! Screen layout: header, log pane, status bar.

use crate::state::AppState;
use crate::view::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT, STATUS_HINTS};
use crate::view::log_pane::render_log_pane;
use crate::view::styles::LineStyles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Header bar, absent when disabled.
    pub header: Option<Rect>,
    /// Log pane.
    pub pane: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split `frame_area` into header, pane and status bar.
pub fn calculate_areas(frame_area: Rect, show_header: bool) -> ScreenAreas {
    let header_height = if show_header { HEADER_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    ScreenAreas {
        header: show_header.then_some(chunks[0]),
        pane: chunks[1],
        status: chunks[2],
    }
}

/// Header text: path and query of the location plus a highlight summary.
pub fn header_text(state: &AppState) -> String {
    let location = state.location();
    let count = state.pane().highlighted_positions().count();
    match count {
        0 => format!(" {}{}", location.path(), location.query()),
        1 => format!(" {}{}  (1 line highlighted)", location.path(), location.query()),
        n => format!(
            " {}{}  ({n} lines highlighted)",
            location.path(),
            location.query()
        ),
    }
}

/// Status text: shareable location, with key hints when they fit in `width`.
pub fn status_text(state: &AppState, width: u16) -> String {
    let href = format!(" {}", state.location().href());
    let used = href.width() + STATUS_HINTS.width() + 2;
    if used <= usize::from(width) {
        let padding = usize::from(width) - used;
        format!("{href}{}{STATUS_HINTS} ", " ".repeat(padding + 1))
    } else {
        href
    }
}

/// Render the full screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &LineStyles) {
    let areas = calculate_areas(frame.area(), state.show_header);

    if let Some(header) = areas.header {
        frame.render_widget(
            Paragraph::new(header_text(state)).style(styles.status()),
            header,
        );
    }

    render_log_pane(frame, areas.pane, state.pane(), styles);

    frame.render_widget(
        Paragraph::new(status_text(state, areas.status.width)).style(styles.status()),
        areas.status,
    );
}
