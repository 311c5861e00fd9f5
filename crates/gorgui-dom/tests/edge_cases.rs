//! Edge case tests for gorgui-dom

use std::cell::Cell;
use std::rc::Rc;

use gorgui_dom::{
    DomError, Element, EventListeners, EventType, Host, ListenerOptions, NamedNodeMap, NodeId,
    PropertyValue, ScopedStyleSheet, ShadowRootInit, ShadowRootMode,
};

#[test]
fn test_truthiness() {
    for (value, expected) in [
        (PropertyValue::Undefined, false),
        (PropertyValue::Null, false),
        (PropertyValue::from(-0.0), false),
        (PropertyValue::from(f64::NAN), false),
        (PropertyValue::from(""), false),
        (PropertyValue::from("false"), true),
        (PropertyValue::from(-1), true),
        (PropertyValue::from(Some(true)), true),
        (PropertyValue::from(None::<bool>), false),
    ] {
        assert_eq!(value.to_boolean(), expected, "{:?}", value);
    }
}

#[test]
fn test_attribute_names_case_insensitive() {
    let mut attrs = NamedNodeMap::new();
    attrs.set_attribute("Disabled", "");
    assert!(attrs.has_attribute("disabled"));
    assert_eq!(attrs.get_attribute_names(), vec!["disabled"]);
    assert_eq!(attrs.remove_attribute("DISABLED"), Some(String::new()));
    assert_eq!(attrs.remove_attribute("disabled"), None);
}

#[test]
fn test_toggle_attribute_force() {
    let mut attrs = NamedNodeMap::new();
    assert!(attrs.toggle_attribute("checked", None));
    assert!(attrs.toggle_attribute("checked", Some(true)));
    assert!(!attrs.toggle_attribute("checked", Some(false)));
    assert!(!attrs.has_attribute("checked"));
}

#[test]
fn test_once_listeners_run_once() {
    let mut host = Host::new();
    let doc = host.create_document();
    let root = host.document_root(doc).unwrap();
    let id = host.create_element(doc, "div").unwrap();
    host.append_child(root, id).unwrap();

    let hits = Rc::new(Cell::new(0));
    for _ in 0..3 {
        let counter = Rc::clone(&hits);
        host.add_event_listener_with_options(
            id,
            EventType::Click,
            move |_| counter.set(counter.get() + 1),
            ListenerOptions::ONCE,
        )
        .unwrap();
    }
    host.click(id).unwrap();
    host.click(id).unwrap();
    assert_eq!(hits.get(), 3, "Each once listener runs exactly once");
}

#[test]
fn test_empty_listener_list() {
    let listeners = EventListeners::new();
    assert!(listeners.is_empty());
    assert_eq!(listeners.count(EventType::Click), 0);
}

#[test]
fn test_append_root_rejected() {
    let mut host = Host::new();
    let a = host.create_document();
    let b = host.create_document();
    let root_a = host.document_root(a).unwrap();
    let root_b = host.document_root(b).unwrap();
    assert_eq!(
        host.append_child(root_a, root_b),
        Err(DomError::HierarchyRequest { parent: root_a, child: root_b })
    );
    assert_eq!(host.adopt_node(root_a, b), Err(DomError::HierarchyRequest { parent: root_b, child: root_a }));
}

#[test]
fn test_document_root_is_not_an_element() {
    let mut host = Host::new();
    let doc = host.create_document();
    let root = host.document_root(doc).unwrap();
    assert_eq!(host.set_attribute(root, "x", "y"), Err(DomError::NotAnElement(root)));
    assert!(host.is_connected(root));
}

#[test]
fn test_remove_detached_is_noop() {
    let mut host = Host::new();
    let doc = host.create_document();
    let id = host.create_element(doc, "div").unwrap();
    assert!(host.remove_child(id).is_ok());
    assert_eq!(host.parent(id).unwrap(), None);
}

#[test]
fn test_focus_disconnected_fails() {
    let mut host = Host::new();
    let doc = host.create_document();
    let id = host.create_element(doc, "div").unwrap();
    host.set_attribute(id, "tabindex", "0").unwrap();
    assert!(!host.focus(id).unwrap());

    let root = host.document_root(doc).unwrap();
    host.append_child(root, id).unwrap();
    assert!(host.focus(id).unwrap());
    host.remove_child(id).unwrap();
    assert_eq!(host.active_element(doc), None);
}

#[test]
fn test_closed_shadow_root() {
    let mut el = Element::new(NodeId::new(9), "x-box");
    let shadow = el
        .attach_shadow(ShadowRootInit { mode: ShadowRootMode::Closed, delegates_focus: true })
        .unwrap();
    assert_eq!(shadow.mode, ShadowRootMode::Closed);
    assert!(shadow.delegates_focus);
    assert!(shadow.children().is_empty());
}

#[test]
fn test_plain_selector_scoped() {
    let sheet = ScopedStyleSheet::new(5).rule("span", &[("color", "red")]);
    assert_eq!(sheet.to_css(), "[data-scope=\"5\"] span { color: red; }");
    assert!(!sheet.styles_host());
    assert_eq!(sheet.scope_selector("::slotted(p)"), "::slotted(p)");
}
