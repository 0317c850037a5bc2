//! Line highlighting with shareable deep links.
//!
//! [`RangeSelector`] turns clicks on line timestamps into a contiguous
//! highlighted range, mirrors that range into the location fragment, and
//! restores it from the fragment when a log is opened.
//!
//! The selector owns only the anchor and the last selection it produced. The
//! lines and their markers belong to a [`LogView`]; the fragment belongs to a
//! [`SelectionPersistence`]. Both are passed in per call.

pub mod fragment;
pub mod log_view;
pub mod persistence;

pub use log_view::{HeadlessLogView, LogView};
pub use persistence::{PageLocation, SelectionPersistence};

use crate::model::{LineId, Selection};
use std::ops::RangeInclusive;
use tracing::debug;

/// Positions to mark for a requested selection, plus the selection they form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange {
    /// Inclusive span of view positions.
    pub positions: RangeInclusive<usize>,
    /// Normalized selection covering `positions`.
    pub selection: Selection,
}

/// Resolve a requested `start`/`end` pair against the lines of `view`.
///
/// Positions come from [`LogView::position_of`], so views with an index
/// answer in constant time.
///
/// - `end` absent or equal to `start`: just `start`.
/// - `end` before `start` in document order: the ends are swapped.
/// - `end` not present in the view: falls back to just `start`.
///
/// Returns `None` only when `start` itself is not present.
pub fn resolve_range<V>(view: &V, start: &LineId, end: Option<&LineId>) -> Option<ResolvedRange>
where
    V: LogView + ?Sized,
{
    let start_pos = view.position_of(start)?;
    let single = ResolvedRange {
        positions: start_pos..=start_pos,
        selection: Selection::single(start.clone()),
    };

    let Some(end) = end.filter(|end| *end != start) else {
        return Some(single);
    };
    let Some(end_pos) = view.position_of(end) else {
        // Unreachable end: keep only the start line. The fragment written
        // afterwards reflects this, not the requested range.
        return Some(single);
    };

    let (first, last) = if end_pos < start_pos {
        (end_pos, start_pos)
    } else {
        (start_pos, end_pos)
    };
    let line_ids = view.line_ids();
    Some(ResolvedRange {
        positions: first..=last,
        selection: Selection::range(line_ids[first].clone(), line_ids[last].clone()),
    })
}

/// Click-to-select, shift-click-to-extend highlight state for one viewer.
#[derive(Debug, Clone, Default)]
pub struct RangeSelector {
    anchor: Option<LineId>,
    current: Option<Selection>,
}

impl RangeSelector {
    /// Selector with nothing highlighted and no anchor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pinned start of a shift-extendable selection.
    pub fn anchor(&self) -> Option<&LineId> {
        self.anchor.as_ref()
    }

    /// Selection currently marked in the view.
    pub fn selection(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Handle a click on the timestamp of `line_id`.
    ///
    /// - Shift held with an anchor: highlight anchor through `line_id`, keep
    ///   the anchor, write the range to the fragment.
    /// - `line_id` is already the only highlighted line: clear everything and
    ///   strip the fragment. Returns `None`.
    /// - Otherwise: highlight just `line_id`, make it the anchor, write
    ///   `#<line_id>`.
    ///
    /// An id the view does not contain is ignored and the current selection
    /// is returned unchanged.
    pub fn apply_highlight<V, P>(
        &mut self,
        view: &mut V,
        persistence: &mut P,
        line_id: &LineId,
        shift_held: bool,
    ) -> Option<Selection>
    where
        V: LogView + ?Sized,
        P: SelectionPersistence + ?Sized,
    {
        if view.position_of(line_id).is_none() {
            debug!(line = %line_id, "Ignoring click on unknown line");
            return self.current.clone();
        }

        if shift_held {
            if let Some(anchor) = self.anchor.clone() {
                if let Some(selection) = self.mark(view, &anchor, Some(line_id)) {
                    debug!(anchor = %anchor, selection = %selection, "Extended highlight");
                    persistence.write_fragment(&selection.fragment());
                    return Some(selection);
                }
            }
        }

        if self.is_sole_selection(line_id) {
            self.clear(view, persistence);
            return None;
        }

        let selection = self.mark(view, line_id, None)?;
        self.anchor = Some(line_id.clone());
        debug!(selection = %selection, "Highlighted line");
        persistence.write_fragment(&selection.fragment());
        Some(selection)
    }

    /// Apply the selection encoded in `fragment` when a log is opened.
    ///
    /// Marks the range, pins the anchor at the start of the resulting
    /// selection and scrolls the requested start line to `scroll_offset`
    /// rows below the top. The location is left alone. A fragment that does
    /// not parse or whose start line is missing changes nothing.
    pub fn restore_from_fragment<V>(
        &mut self,
        view: &mut V,
        fragment: &str,
        scroll_offset: usize,
    ) -> Option<Selection>
    where
        V: LogView + ?Sized,
    {
        let requested = fragment::parse(fragment)?;
        let start_pos = view.position_of(requested.start())?;
        let selection = self.mark(view, requested.start(), requested.end())?;
        self.anchor = Some(selection.start().clone());
        view.scroll_to_position(start_pos, scroll_offset);
        debug!(fragment, selection = %selection, "Restored highlight");
        Some(selection)
    }

    /// [`restore_from_fragment`](Self::restore_from_fragment) with the
    /// fragment read from `persistence`.
    pub fn restore<V, P>(
        &mut self,
        view: &mut V,
        persistence: &P,
        scroll_offset: usize,
    ) -> Option<Selection>
    where
        V: LogView + ?Sized,
        P: SelectionPersistence + ?Sized,
    {
        let fragment = persistence.read_fragment();
        self.restore_from_fragment(view, &fragment, scroll_offset)
    }

    /// Drop the highlight and anchor and strip the fragment.
    pub fn clear<V, P>(&mut self, view: &mut V, persistence: &mut P)
    where
        V: LogView + ?Sized,
        P: SelectionPersistence + ?Sized,
    {
        view.clear_highlights();
        self.anchor = None;
        if self.current.take().is_some() {
            debug!("Cleared highlight");
            persistence.write_fragment("");
        }
    }

    fn is_sole_selection(&self, line_id: &LineId) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.is_single() && current.start() == line_id)
    }

    /// Replace the view's markers with the resolved range and remember it.
    fn mark<V>(&mut self, view: &mut V, start: &LineId, end: Option<&LineId>) -> Option<Selection>
    where
        V: LogView + ?Sized,
    {
        let resolved = resolve_range(&*view, start, end)?;
        view.clear_highlights();
        for position in resolved.positions {
            view.highlight(position);
        }
        self.current = Some(resolved.selection.clone());
        Some(resolved.selection)
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
