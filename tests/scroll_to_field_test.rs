mod common;

use antform::{
    scrollable_container, use_form, NamePath, Rect, ScrollContainer, ScrollOptions,
    ScrollPosition,
};
use common::{init_tracing, FakeDom};

#[test]
fn test_missing_field_is_a_silent_no_op() {
    init_tracing();
    let dom = FakeDom::new(600.0);
    let form = use_form(None);

    assert!(!form.scroll_to_field(&dom, "user.email", &ScrollOptions::default()));
    assert!(dom.recorded().is_empty());
}

#[test]
fn test_empty_name_is_a_silent_no_op() {
    let mut dom = FakeDom::new(600.0);
    dom.add_field(dom.body(), "", Rect::new(0.0, 0.0, 10.0, 10.0));
    let form = use_form(None);

    assert!(!form.scroll_to_field(&dom, NamePath::empty(), &ScrollOptions::default()));
    assert!(dom.recorded().is_empty());
}

#[test]
fn test_scrolls_document_to_named_form_field() {
    init_tracing();
    let mut dom = FakeDom::new(600.0);
    let body = dom.body();
    dom.add_field(body, "signup_user_email", Rect::new(20.0, 1200.0, 300.0, 32.0));

    let mut form = use_form(None);
    form.set_name(Some("signup".to_string()));

    let name = NamePath::from("user").push("email");
    assert!(form.scroll_to_field(&dom, name, &ScrollOptions::default()));

    let recorded = dom.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, ScrollContainer::Document);
    // bottom edge aligned: 1232 - 600
    assert_eq!(recorded[0].1, ScrollPosition { left: 0.0, top: 632.0 });
}

#[test]
fn test_unnamed_form_uses_bare_path_id() {
    let mut dom = FakeDom::new(600.0);
    let body = dom.body();
    dom.add_field(body, "user.email", Rect::new(20.0, 900.0, 300.0, 32.0));

    let form = use_form(None);
    assert!(form.scroll_to_field(&dom, "user.email", &ScrollOptions::default()));
}

#[test]
fn test_visible_field_does_not_scroll() {
    let mut dom = FakeDom::new(600.0);
    let body = dom.body();
    dom.add_field(body, "age", Rect::new(20.0, 100.0, 300.0, 32.0));

    let form = use_form(None);
    assert!(!form.scroll_to_field(&dom, "age", &ScrollOptions::default()));
    assert!(dom.recorded().is_empty());
}

#[test]
fn test_scrolls_nearest_scrollable_panel() {
    let mut dom = FakeDom::new(600.0);
    let body = dom.body();
    let panel = dom.add_scroll_panel(body, Rect::new(0.0, 100.0, 400.0, 200.0), 1000.0);
    let row = dom.add(panel, Rect::new(0.0, 500.0, 400.0, 40.0));
    dom.add_field(row, "city", Rect::new(0.0, 504.0, 400.0, 32.0));

    let form = use_form(None);
    assert!(form.scroll_to_field(&dom, "city", &ScrollOptions::default()));

    let recorded = dom.recorded();
    assert_eq!(recorded[0].0, ScrollContainer::Element(panel));
    // 536 - 300
    assert_eq!(recorded[0].1.top, 236.0);
}

#[test]
fn test_panel_without_overflowing_content_is_skipped() {
    let mut dom = FakeDom::new(600.0);
    let body = dom.body();
    let panel = dom.add_scroll_panel(body, Rect::new(0.0, 100.0, 400.0, 200.0), 200.0);
    let field = dom.add_field(panel, "zip", Rect::new(0.0, 150.0, 100.0, 20.0));

    assert_eq!(scrollable_container(&dom, &field), Some(ScrollContainer::Document));
}

#[test]
fn test_element_is_never_its_own_container() {
    let mut dom = FakeDom::new(600.0);
    let body = dom.body();
    let field = dom.add_scroll_panel(body, Rect::new(0.0, 100.0, 400.0, 200.0), 1000.0);

    assert_eq!(scrollable_container(&dom, &field), Some(ScrollContainer::Document));
}

#[test]
fn test_detached_field_is_a_no_op() {
    let mut dom = FakeDom::new(600.0);
    let body = dom.body();
    let field = dom.add_field(body, "ghost", Rect::new(0.0, 2000.0, 100.0, 20.0));
    dom.detach(field);

    let form = use_form(None);
    assert!(!form.scroll_to_field(&dom, "ghost", &ScrollOptions::default()));
    assert!(dom.recorded().is_empty());
}
