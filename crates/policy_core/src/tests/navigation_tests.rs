use super::*;

#[derive(Default)]
struct RecordingScroller {
    requests: Vec<ScrollRequest>,
}

impl Scroller for RecordingScroller {
    fn scroll_to(&mut self, request: ScrollRequest) {
        self.requests.push(request);
    }
}

fn controller() -> NavigationController<RecordingScroller> {
    NavigationController::new(RecordingScroller::default())
}

fn seen(id: SectionId, visible_extent: f32) -> SectionVisibility {
    SectionVisibility { id, visible_extent }
}

#[test]
fn starts_on_first_section_without_scrolling() {
    let nav = controller();
    assert_eq!(nav.active(), SectionId::Contact);
    assert!(nav.scroller().requests.is_empty());
}

#[test]
fn selecting_each_known_section_activates_it_and_scrolls_once() {
    for id in SectionId::ALL {
        let mut nav = controller();
        nav.select_section(id.as_str());
        assert_eq!(nav.active(), id);
        assert_eq!(nav.scroller().requests, vec![ScrollRequest::smooth_to(id)]);
    }
}

#[test]
fn scroll_requests_are_smooth_and_top_aligned() {
    let mut nav = controller();
    nav.select_section("privacy");
    let request = nav.scroller().requests[0];
    assert_eq!(request.align, ScrollAlign::Start);
    assert_eq!(request.behavior, ScrollBehavior::Smooth);
}

#[test]
fn unknown_section_ids_are_ignored() {
    let mut nav = controller();
    nav.select_section("terms");
    for raw in ["", "faq", "Terms", " terms", "privacy-policy"] {
        nav.select_section(raw);
        assert_eq!(nav.active(), SectionId::Terms, "{raw:?} changed the active section");
    }
    assert_eq!(nav.scroller().requests.len(), 1);
}

#[test]
fn reselecting_active_section_scrolls_every_time() {
    let mut nav = controller();
    nav.select_section("refunds");
    nav.select_section("refunds");
    assert_eq!(nav.active(), SectionId::Refunds);
    assert_eq!(
        nav.scroller().requests,
        vec![
            ScrollRequest::smooth_to(SectionId::Refunds),
            ScrollRequest::smooth_to(SectionId::Refunds),
        ]
    );
}

#[test]
fn later_request_replaces_target() {
    let mut nav = controller();
    nav.select(SectionId::Privacy);
    nav.select(SectionId::Shipping);
    assert_eq!(nav.active(), SectionId::Shipping);
    assert_eq!(
        nav.scroller().requests.last().map(|request| request.target),
        Some(SectionId::Shipping)
    );
}

#[test]
fn most_visible_prefers_largest_extent() {
    let picked = most_visible(&[
        seen(SectionId::Contact, 40.0),
        seen(SectionId::Shipping, 300.0),
        seen(SectionId::Terms, 120.0),
    ]);
    assert_eq!(picked, Some(SectionId::Shipping));
}

#[test]
fn most_visible_breaks_ties_toward_earlier_section() {
    let picked = most_visible(&[
        seen(SectionId::Privacy, 200.0),
        seen(SectionId::Terms, 200.0),
        seen(SectionId::Refunds, 200.0),
    ]);
    assert_eq!(picked, Some(SectionId::Terms));
}

#[test]
fn most_visible_ignores_offscreen_sections() {
    assert_eq!(
        most_visible(&[seen(SectionId::Contact, 0.0), seen(SectionId::Terms, -5.0)]),
        None
    );
    assert_eq!(most_visible(&[]), None);
}

#[test]
fn viewport_sync_updates_active_without_scrolling() {
    let mut nav = controller();
    let changed = nav.sync_with_viewport(&[
        seen(SectionId::Contact, 10.0),
        seen(SectionId::Shipping, 500.0),
    ]);
    assert!(changed);
    assert_eq!(nav.active(), SectionId::Shipping);
    assert!(nav.scroller().requests.is_empty());
}

#[test]
fn viewport_sync_without_visible_sections_keeps_active() {
    let mut nav = controller();
    nav.select(SectionId::Refunds);
    assert!(!nav.sync_with_viewport(&[]));
    assert_eq!(nav.active(), SectionId::Refunds);
}

#[test]
fn controller_accepts_borrowed_scroller() {
    let mut scroller = RecordingScroller::default();
    {
        let mut nav = NavigationController::new(&mut scroller);
        nav.select(SectionId::Terms);
        assert!(nav.is_active(SectionId::Terms));
    }
    assert_eq!(scroller.requests.len(), 1);
}
