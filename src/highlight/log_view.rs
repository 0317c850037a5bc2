//! The rendered log as seen by the range selector.
//!
//! A view exposes its lines as an ordered list of ids (document order) and
//! accepts marker and scroll requests by position in that list.

use crate::model::LineId;
use std::collections::BTreeSet;

/// Ordered, markable sequence of lines.
pub trait LogView {
    /// Line ids in document order.
    fn line_ids(&self) -> &[LineId];

    /// Position of `id` in [`line_ids`](Self::line_ids).
    fn position_of(&self, id: &LineId) -> Option<usize> {
        self.line_ids().iter().position(|candidate| candidate == id)
    }

    /// Remove the highlight marker from every line.
    fn clear_highlights(&mut self);

    /// Add the highlight marker to the line at `position`.
    fn highlight(&mut self, position: usize);

    /// Bring the line at `position` into view, `top_offset` rows below the top.
    fn scroll_to_position(&mut self, position: usize, top_offset: usize);
}

/// A view with no rendering, holding only ids, markers and a scroll target.
///
/// Useful wherever the selection logic runs without a terminal.
#[derive(Debug, Clone, Default)]
pub struct HeadlessLogView {
    ids: Vec<LineId>,
    highlighted: BTreeSet<usize>,
    scroll_top: Option<usize>,
}

impl HeadlessLogView {
    /// View over the given ids.
    pub fn new(ids: Vec<LineId>) -> Self {
        Self {
            ids,
            highlighted: BTreeSet::new(),
            scroll_top: None,
        }
    }

    /// View over `c<first>` through `c<last>`.
    pub fn numbered(first: u64, last: u64) -> Self {
        Self::new((first..=last).map(LineId::from_number).collect())
    }

    /// Ids currently carrying the highlight marker, in document order.
    pub fn highlighted_ids(&self) -> Vec<&LineId> {
        self.highlighted.iter().map(|&pos| &self.ids[pos]).collect()
    }

    /// True when the line at `position` is highlighted.
    pub fn is_highlighted(&self, position: usize) -> bool {
        self.highlighted.contains(&position)
    }

    /// First visible row after the last scroll request, if any.
    pub fn scroll_top(&self) -> Option<usize> {
        self.scroll_top
    }
}

impl LogView for HeadlessLogView {
    fn line_ids(&self) -> &[LineId] {
        &self.ids
    }

    fn clear_highlights(&mut self) {
        self.highlighted.clear();
    }

    fn highlight(&mut self, position: usize) {
        if position < self.ids.len() {
            self.highlighted.insert(position);
        }
    }

    fn scroll_to_position(&mut self, position: usize, top_offset: usize) {
        self.scroll_top = Some(position.saturating_sub(top_offset));
    }
}
