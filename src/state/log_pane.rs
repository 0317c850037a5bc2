//! Scrollable, highlightable list of chat lines.
//!
//! `LogPane` is the terminal's [`LogView`]: it owns the lines, the highlight
//! markers, the line cursor and the scroll position. Positions are indices
//! into the line list; rows are positions relative to the first visible line.

use crate::highlight::LogView;
use crate::model::{ChatLine, LineId};
use std::collections::{BTreeSet, HashMap};
use std::ops::Range;

/// Log lines plus the view state needed to draw them.
#[derive(Debug, Clone)]
pub struct LogPane {
    lines: Vec<ChatLine>,
    ids: Vec<LineId>,
    index: HashMap<LineId, usize>,
    highlighted: BTreeSet<usize>,
    scroll: usize,
    cursor: usize,
    viewport_height: usize,
}

impl LogPane {
    /// Pane over `lines` in document order, scrolled to the top.
    pub fn new(lines: Vec<ChatLine>) -> Self {
        let ids: Vec<LineId> = lines.iter().map(|line| line.id().clone()).collect();
        let index = ids
            .iter()
            .enumerate()
            .map(|(position, id)| (id.clone(), position))
            .collect();
        Self {
            lines,
            ids,
            index,
            highlighted: BTreeSet::new(),
            scroll: 0,
            cursor: 0,
            viewport_height: 1,
        }
    }

    /// All lines.
    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Position of the first visible line.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Position of the keyboard cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rows available for lines.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// True when the line at `position` carries the highlight marker.
    pub fn is_highlighted(&self, position: usize) -> bool {
        self.highlighted.contains(&position)
    }

    /// Highlighted positions in document order.
    pub fn highlighted_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.highlighted.iter().copied()
    }

    /// Positions currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.scroll + self.viewport_height).min(self.lines.len());
        self.scroll.min(end)..end
    }

    /// Line position drawn at `row` of the pane, if any.
    pub fn line_at_row(&self, row: usize) -> Option<usize> {
        let position = self.scroll + row;
        (row < self.viewport_height && position < self.lines.len()).then_some(position)
    }

    /// Resize the viewport, keeping the cursor on screen.
    ///
    /// Setting the current height again is a no-op, so a redraw does not
    /// undo wheel scrolling that left the cursor off screen.
    pub fn set_viewport_height(&mut self, height: usize) {
        let height = height.max(1);
        if height == self.viewport_height {
            return;
        }
        self.viewport_height = height;
        self.clamp_scroll();
        self.ensure_cursor_visible();
    }

    /// Move the cursor by `delta` lines, clamped to the log.
    pub fn move_cursor_by(&mut self, delta: isize) {
        let target = self.cursor.saturating_add_signed(delta);
        self.move_cursor_to(target);
    }

    /// Move the cursor to `position`, clamped to the log.
    pub fn move_cursor_to(&mut self, position: usize) {
        self.cursor = position.min(self.lines.len().saturating_sub(1));
        self.ensure_cursor_visible();
    }

    /// Scroll by `delta` rows without moving the cursor.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn ensure_cursor_visible(&mut self) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.viewport_height {
            self.scroll = self.cursor + 1 - self.viewport_height;
        }
        self.clamp_scroll();
    }
}

impl LogView for LogPane {
    fn line_ids(&self) -> &[LineId] {
        &self.ids
    }

    fn position_of(&self, id: &LineId) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn clear_highlights(&mut self) {
        self.highlighted.clear();
    }

    fn highlight(&mut self, position: usize) {
        if position < self.lines.len() {
            self.highlighted.insert(position);
        }
    }

    /// Put `position` `top_offset` rows below the top and move the cursor there.
    fn scroll_to_position(&mut self, position: usize, top_offset: usize) {
        self.cursor = position.min(self.lines.len().saturating_sub(1));
        self.scroll = self.cursor.saturating_sub(top_offset);
        self.clamp_scroll();
    }
}

#[cfg(test)]
#[path = "log_pane_tests.rs"]
mod tests;
