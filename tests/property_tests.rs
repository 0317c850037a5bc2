//! Property-based tests for the highlight selector and fragment codec.
//!
//! Tests validate:
//! 1. Fragments written by the selector decode to the same selection
//! 2. Shift-click results never run backwards
//! 3. Restoring a shared location marks exactly what was marked before
//! 4. Marked lines always form one contiguous block

use logbot_view::highlight::{fragment, HeadlessLogView, PageLocation, RangeSelector};
use logbot_view::model::{LineId, Selection};
use proptest::prelude::*;

const LAST_LINE: u64 = 40;

fn view() -> HeadlessLogView {
    HeadlessLogView::numbered(0, LAST_LINE)
}

fn marked_positions(view: &HeadlessLogView) -> Vec<usize> {
    (0..=LAST_LINE as usize)
        .filter(|&pos| view.is_highlighted(pos))
        .collect()
}

// ===== Property 1: Fragment codec =====

proptest! {
    #[test]
    fn fragment_decodes_what_it_encodes(start in 0u64..10_000, end in proptest::option::of(0u64..10_000)) {
        let selection = Selection::new(
            LineId::from_number(start),
            end.map(LineId::from_number),
        );
        prop_assert_eq!(fragment::parse(&fragment::encode(&selection)), Some(selection));
    }

    #[test]
    fn fragment_rejects_text_without_hash(raw in "[a-z0-9-]{0,12}") {
        prop_assert_eq!(fragment::parse(&raw), None);
    }
}

// ===== Property 2: Normalization =====

proptest! {
    #[test]
    fn shift_click_yields_ordered_range(anchor in 0..=LAST_LINE, target in 0..=LAST_LINE) {
        let mut view = view();
        let mut location = PageLocation::parse("/perl");
        let mut selector = RangeSelector::new();

        selector.apply_highlight(&mut view, &mut location, &LineId::from_number(anchor), false);
        let selection = selector
            .apply_highlight(&mut view, &mut location, &LineId::from_number(target), true)
            .unwrap();

        let (low, high) = (anchor.min(target), anchor.max(target));
        prop_assert_eq!(selection.start(), &LineId::from_number(low));
        if low == high {
            prop_assert!(selection.is_single());
        } else {
            prop_assert_eq!(selection.end(), Some(&LineId::from_number(high)));
        }
        let expected: Vec<usize> = (low as usize..=high as usize).collect();
        prop_assert_eq!(marked_positions(&view), expected);
    }
}

// ===== Property 3: Shared location round-trip =====

proptest! {
    #[test]
    fn restored_location_marks_same_lines(
        clicks in proptest::collection::vec((0..=LAST_LINE, any::<bool>()), 1..12)
    ) {
        let mut view = view();
        let mut location = PageLocation::parse("/perl/20240101");
        let mut selector = RangeSelector::new();
        for (line, shift_held) in clicks {
            selector.apply_highlight(&mut view, &mut location, &LineId::from_number(line), shift_held);
        }

        let mut reopened = HeadlessLogView::numbered(0, LAST_LINE);
        let mut restored = RangeSelector::new();
        restored.restore(&mut reopened, &PageLocation::parse(&location.href()), 2);

        prop_assert_eq!(marked_positions(&reopened), marked_positions(&view));
        prop_assert_eq!(restored.selection(), selector.selection());
    }
}

// ===== Property 4: Contiguity =====

proptest! {
    #[test]
    fn marked_lines_are_contiguous(
        clicks in proptest::collection::vec((0..=LAST_LINE, any::<bool>()), 1..20)
    ) {
        let mut view = view();
        let mut location = PageLocation::parse("/perl");
        let mut selector = RangeSelector::new();
        for (line, shift_held) in clicks {
            selector.apply_highlight(&mut view, &mut location, &LineId::from_number(line), shift_held);
        }

        let positions = marked_positions(&view);
        if let (Some(first), Some(last)) = (positions.first(), positions.last()) {
            prop_assert_eq!(positions.len(), last - first + 1);
        }
        prop_assert_eq!(positions.is_empty(), selector.selection().is_none());
    }
}
