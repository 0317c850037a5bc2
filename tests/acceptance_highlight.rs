//! Acceptance tests for line highlighting and deep links.
//!
//! Drive the selector through the public API only, with a headless view and
//! a page location standing in for the rendered log and the address bar.

use logbot_view::highlight::{
    HeadlessLogView, LogView, PageLocation, RangeSelector, SelectionPersistence,
};
use logbot_view::model::{LineId, Selection};

fn id(raw: &str) -> LineId {
    LineId::parse(raw).unwrap()
}

fn marked(view: &HeadlessLogView) -> Vec<String> {
    view.highlighted_ids()
        .into_iter()
        .map(|line| line.to_string())
        .collect()
}

struct Page {
    view: HeadlessLogView,
    location: PageLocation,
    selector: RangeSelector,
}

impl Page {
    fn open(location: &str) -> Self {
        let mut page = Self {
            view: HeadlessLogView::numbered(0, 20),
            location: PageLocation::parse(location),
            selector: RangeSelector::new(),
        };
        page.selector.restore(&mut page.view, &page.location, 2);
        page
    }

    fn click(&mut self, line: &str, shift_held: bool) -> Option<Selection> {
        self.selector
            .apply_highlight(&mut self.view, &mut self.location, &id(line), shift_held)
    }
}

#[test]
fn plain_click_twice_clears_and_third_click_reselects() {
    let mut page = Page::open("/perl/20240101");

    page.click("c4", false);
    assert_eq!(marked(&page.view), ["c4"]);

    assert_eq!(page.click("c4", false), None);
    assert!(marked(&page.view).is_empty());
    assert_eq!(page.location.href(), "/perl/20240101");

    let selection = page.click("c4", false).unwrap();
    assert_eq!(selection, Selection::single(id("c4")));
    assert_eq!(marked(&page.view), ["c4"]);
    assert_eq!(page.location.href(), "/perl/20240101#c4");
}

#[test]
fn shift_click_before_anchor_is_normalized() {
    let mut page = Page::open("/perl/20240101");

    page.click("c5", false);
    let selection = page.click("c2", true).unwrap();

    assert_eq!(selection, Selection::range(id("c2"), id("c5")));
    assert_eq!(marked(&page.view), ["c2", "c3", "c4", "c5"]);
    assert_eq!(page.location.fragment(), "#c2-c5");
}

#[test]
fn encoded_range_restores_the_same_lines() {
    let mut page = Page::open("/perl/20240101");
    page.click("c3", false);
    page.click("c9", true);
    let shared = page.location.href();
    let before = marked(&page.view);

    let reopened = Page::open(&shared);

    assert_eq!(marked(&reopened.view), before);
    assert_eq!(reopened.selector.anchor(), Some(&id("c3")));
}

#[test]
fn restore_with_missing_end_marks_only_start() {
    let page = Page::open("/perl/20240101#c1-c999");

    assert_eq!(marked(&page.view), ["c1"]);
    assert_eq!(page.selector.selection(), Some(&Selection::single(id("c1"))));
    // Restoring never rewrites the location.
    assert_eq!(page.location.href(), "/perl/20240101#c1-c999");
    assert_eq!(page.location.replacements(), 0);
}

#[test]
fn first_plain_click_selects_single_line() {
    let mut page = Page::open("/perl/20240101");

    page.click("c7", false);

    assert_eq!(marked(&page.view), ["c7"]);
    assert_eq!(page.location.read_fragment(), "#c7");
}

#[test]
fn shift_click_on_anchor_is_single_line() {
    let mut page = Page::open("/perl/20240101");

    page.click("c6", false);
    let selection = page.click("c6", true).unwrap();

    assert!(selection.is_single());
    assert_eq!(marked(&page.view), ["c6"]);
    assert_eq!(page.location.fragment(), "#c6");
}

#[test]
fn restored_range_scrolls_start_below_top() {
    let page = Page::open("/perl/20240101#c12-c15");

    assert_eq!(page.view.scroll_top(), Some(10));
    assert_eq!(marked(&page.view), ["c12", "c13", "c14", "c15"]);
}

#[test]
fn shift_click_after_restore_extends_from_restored_start() {
    let mut page = Page::open("/perl/20240101#c8");

    page.click("c11", true);

    assert_eq!(page.location.fragment(), "#c8-c11");
}

#[test]
fn malformed_fragment_is_ignored() {
    for fragment in ["#C3", "#c3-", "#c3-d4", "#c3 ", "#", "#x"] {
        let page = Page::open(&format!("/perl{fragment}"));
        assert!(marked(&page.view).is_empty(), "fragment {fragment:?}");
        assert_eq!(page.view.scroll_top(), None);
    }
}

#[test]
fn selector_works_with_any_view() {
    // A trait object works as well as a concrete view.
    let mut view = HeadlessLogView::numbered(1, 5);
    let dyn_view: &mut dyn LogView = &mut view;
    let mut location = PageLocation::parse("/perl");
    let mut selector = RangeSelector::new();

    selector.apply_highlight(dyn_view, &mut location, &id("c2"), false);
    selector.apply_highlight(dyn_view, &mut location, &id("c4"), true);

    assert_eq!(location.href(), "/perl#c2-c4");
    assert_eq!(marked(&view), ["c2", "c3", "c4"]);
}
