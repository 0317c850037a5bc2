//! Application state for the viewer.

use crate::highlight::{PageLocation, RangeSelector};
use crate::model::{ChatLine, Selection};
use crate::state::LogPane;
use tracing::info;

/// Everything the viewer draws and mutates.
///
/// The selector, the pane and the location are separate fields so the
/// selector can borrow the other two for the duration of a click.
#[derive(Debug, Clone)]
pub struct AppState {
    pane: LogPane,
    selector: RangeSelector,
    location: PageLocation,
    scroll_offset: usize,
    /// Show the location header above the log.
    pub show_header: bool,
}

impl AppState {
    /// Load `lines` at `location`, restoring any highlight its fragment names.
    ///
    /// `scroll_offset` is how many rows stay above a restored line.
    pub fn new(lines: Vec<ChatLine>, location: PageLocation, scroll_offset: usize) -> Self {
        let mut state = Self {
            pane: LogPane::new(lines),
            selector: RangeSelector::new(),
            location,
            scroll_offset,
            show_header: true,
        };
        if let Some(selection) =
            state
                .selector
                .restore(&mut state.pane, &state.location, state.scroll_offset)
        {
            info!(selection = %selection, "Restored highlight from location");
        }
        state
    }

    /// The log pane.
    pub fn pane(&self) -> &LogPane {
        &self.pane
    }

    /// Mutable access to the log pane for scrolling and resizing.
    pub fn pane_mut(&mut self) -> &mut LogPane {
        &mut self.pane
    }

    /// Current location, fragment included.
    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    /// Highlight state.
    pub fn selector(&self) -> &RangeSelector {
        &self.selector
    }

    /// Selection currently highlighted.
    pub fn selection(&self) -> Option<&Selection> {
        self.selector.selection()
    }

    /// Rows kept above a restored line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Click the timestamp of the line at `position`.
    pub fn click_line(&mut self, position: usize, shift_held: bool) -> Option<Selection> {
        let Some(line) = self.pane.lines().get(position) else {
            return self.selector.selection().cloned();
        };
        let id = line.id().clone();
        self.selector
            .apply_highlight(&mut self.pane, &mut self.location, &id, shift_held)
    }

    /// Click the timestamp of the line under the cursor.
    pub fn click_cursor_line(&mut self, shift_held: bool) -> Option<Selection> {
        let cursor = self.pane.cursor();
        self.click_line(cursor, shift_held)
    }

    /// Drop the highlight and strip the fragment.
    pub fn clear_highlight(&mut self) {
        self.selector.clear(&mut self.pane, &mut self.location);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
