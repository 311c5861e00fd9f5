//! Comprehensive tests for gorgui-controls
//!
//! Controls driven through the host runtime: reflection, activation,
//! lifecycle and derived accessibility.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use gorgui_controls::{register_control, register_controls, ClickBinding, ControlConfig, ControlKind};
use gorgui_dom::{CustomElementError, DocumentId, EventType, Host, Key, Modifiers, NodeId, PropertyValue};

fn setup(config: &ControlConfig) -> (Host, DocumentId, NodeId) {
    let mut host = Host::new();
    register_controls(&mut host, config).unwrap();
    let doc = host.create_document();
    let root = host.document_root(doc).unwrap();
    (host, doc, root)
}

fn mount(host: &mut Host, doc: DocumentId, kind: ControlKind) -> NodeId {
    let root = host.document_root(doc).unwrap();
    let id = host.create_element(doc, &ControlConfig::default().tag_name(kind)).unwrap();
    host.append_child(root, id).unwrap();
    id
}

fn record_changes(host: &mut Host, id: NodeId) -> Rc<RefCell<Vec<bool>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    host.add_event_listener(id, EventType::Change, move |event| {
        sink.borrow_mut().extend(event.checked());
    })
    .unwrap();
    log
}

fn attributes(host: &Host, id: NodeId) -> BTreeMap<String, String> {
    host.element(id)
        .unwrap()
        .attributes
        .iter()
        .map(|a| (a.name.clone(), a.value.clone()))
        .collect()
}

fn checked(host: &Host, id: NodeId) -> bool {
    host.get_property(id, "checked").unwrap().to_boolean()
}

// ============================================================================
// Reflection
// ============================================================================

#[test]
fn test_disabled_coercion_matches_attribute() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    for kind in ControlKind::ALL {
        let id = mount(&mut host, doc, kind);
        for value in [
            PropertyValue::from(true),
            PropertyValue::from(false),
            PropertyValue::from(1),
            PropertyValue::from(0),
            PropertyValue::from(f64::NAN),
            PropertyValue::from("disabled"),
            PropertyValue::from(""),
            PropertyValue::Null,
            PropertyValue::Undefined,
        ] {
            let expected = value.to_boolean();
            host.set_property(id, "disabled", value).unwrap();
            assert_eq!(host.get_property(id, "disabled").unwrap(), PropertyValue::Bool(expected));
            assert_eq!(host.has_attribute(id, "disabled").unwrap(), expected, "{:?}", kind);
        }
    }
}

#[test]
fn test_attribute_presence_is_the_value() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    let id = mount(&mut host, doc, ControlKind::Switch);

    host.set_attribute(id, "checked", "false").unwrap();
    assert!(checked(&host, id), "Presence, not the value, is the signal");

    host.remove_attribute(id, "checked").unwrap();
    assert!(!checked(&host, id));
}

#[test]
fn test_upgrade_matches_late_assignment() {
    let config = ControlConfig::default();

    // Properties assigned while the element is still undefined
    let mut early = Host::new();
    let doc = early.create_document();
    let root = early.document_root(doc).unwrap();
    let before = early.create_element(doc, "gorgui-switch").unwrap();
    early.set_property(before, "checked", true).unwrap();
    early.set_property(before, "disabled", 1).unwrap();
    early.append_child(root, before).unwrap();
    assert!(!early.is_upgraded(before).unwrap());
    register_controls(&mut early, &config).unwrap();
    assert!(early.is_upgraded(before).unwrap());

    // Same values assigned after attach
    let (mut late, doc, _) = setup(&config);
    let after = mount(&mut late, doc, ControlKind::Switch);
    late.set_property(after, "checked", true).unwrap();
    late.set_property(after, "disabled", 1).unwrap();

    assert_eq!(attributes(&early, before), attributes(&late, after));
    assert_eq!(early.get_property(before, "checked").unwrap(), PropertyValue::Bool(true));
    assert!(!early.element(before).unwrap().has_own_property("checked"));
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_disabled_blocks_activation() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    for kind in [ControlKind::Radio, ControlKind::Switch] {
        let id = mount(&mut host, doc, kind);
        host.set_property(id, "disabled", true).unwrap();
        let changes = record_changes(&mut host, id);

        assert!(!host.click(id).unwrap(), "Disabled click should be prevented");
        assert!(!host.key_up(id, Key::Space, Modifiers::NONE).unwrap());

        assert!(changes.borrow().is_empty());
        assert!(!checked(&host, id));
    }
}

#[test]
fn test_switch_parity() {
    for n in 0..10u32 {
        let (mut host, doc, _) = setup(&ControlConfig::default());
        let id = mount(&mut host, doc, ControlKind::Switch);
        let changes = record_changes(&mut host, id);

        for i in 0..n {
            if i % 2 == 0 {
                host.click(id).unwrap();
            } else {
                host.key_up(id, Key::Space, Modifiers::NONE).unwrap();
            }
        }

        assert_eq!(checked(&host, id), n % 2 == 1, "after {} activations", n);
        assert_eq!(changes.borrow().len(), n as usize);
    }
}

#[test]
fn test_radio_once_binding_asymmetry() {
    let config = ControlConfig { radio_click: ClickBinding::Once, ..ControlConfig::default() };
    let (mut host, doc, _) = setup(&config);
    let id = mount(&mut host, doc, ControlKind::Radio);
    let changes = record_changes(&mut host, id);

    host.click(id).unwrap();
    assert!(checked(&host, id));

    host.click(id).unwrap();
    assert!(checked(&host, id), "Second pointer click has no state effect");

    host.key_up(id, Key::Space, Modifiers::NONE).unwrap();
    assert!(!checked(&host, id), "Space still toggles");
    assert_eq!(*changes.borrow(), vec![true, false]);
}

#[test]
fn test_radio_persistent_binding() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    let id = mount(&mut host, doc, ControlKind::Radio);
    let changes = record_changes(&mut host, id);

    host.click(id).unwrap();
    host.click(id).unwrap();
    host.click(id).unwrap();
    assert_eq!(*changes.borrow(), vec![true, false, true]);
}

#[test]
fn test_key_activation_prevents_default() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    for kind in ControlKind::ALL {
        let id = mount(&mut host, doc, kind);
        assert!(!host.key_up(id, kind.trigger_key(), Modifiers::NONE).unwrap(), "{:?}", kind);
    }
}

#[test]
fn test_alt_passes_through() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    let id = mount(&mut host, doc, ControlKind::Switch);
    let changes = record_changes(&mut host, id);

    assert!(host.key_up(id, Key::Space, Modifiers::ALT).unwrap());
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_button_click_reaches_consumer() {
    let (mut host, doc, root) = setup(&ControlConfig::default());
    let group = host.create_element(doc, "div").unwrap();
    host.append_child(root, group).unwrap();
    let id = host.create_element(doc, "gorgui-button").unwrap();
    host.append_child(group, id).unwrap();
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    host.add_event_listener(group, EventType::Click, move |event| sink.borrow_mut().push(event.origin))
        .unwrap();
    let changes = record_changes(&mut host, id);

    host.click(id).unwrap();
    host.key_up(id, Key::Enter, Modifiers::NONE).unwrap();

    assert_eq!(clicks.borrow().len(), 2, "One click per input, bubbled to the container");
    assert!(changes.borrow().is_empty(), "Button emits no change event");
}

#[test]
fn test_change_event_bubbles() {
    let (mut host, doc, root) = setup(&ControlConfig::default());
    let group = host.create_element(doc, "div").unwrap();
    host.append_child(root, group).unwrap();
    let id = host.create_element(doc, "gorgui-switch").unwrap();
    host.append_child(group, id).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    host.add_event_listener(group, EventType::Change, move |event| {
        sink.borrow_mut().push((event.target, event.checked()));
    })
    .unwrap();

    host.click(id).unwrap();
    assert_eq!(*seen.borrow(), vec![(Some(id), Some(true))]);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_reattach_does_not_double_fire() {
    let (mut host, doc, root) = setup(&ControlConfig::default());
    let id = mount(&mut host, doc, ControlKind::Switch);

    for _ in 0..3 {
        host.remove_child(id).unwrap();
        host.append_child(root, id).unwrap();
    }
    assert_eq!(host.element(id).unwrap().listeners.count(EventType::Click), 1);
    assert_eq!(host.element(id).unwrap().listeners.count(EventType::KeyUp), 1);

    let changes = record_changes(&mut host, id);
    host.click(id).unwrap();
    host.key_up(id, Key::Space, Modifiers::NONE).unwrap();
    assert_eq!(*changes.borrow(), vec![true, false]);
}

#[test]
fn test_detached_control_is_inert() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    let id = mount(&mut host, doc, ControlKind::Switch);
    host.remove_child(id).unwrap();

    host.click(id).unwrap();
    host.key_up(id, Key::Space, Modifiers::NONE).unwrap();
    assert!(!checked(&host, id));
}

#[test]
fn test_adopted_control_keeps_working() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    let id = mount(&mut host, doc, ControlKind::Radio);
    host.click(id).unwrap();

    let other = host.create_document();
    host.adopt_node(id, other).unwrap();
    assert_eq!(host.owner_document(id).unwrap(), other);
    assert!(checked(&host, id));

    let changes = record_changes(&mut host, id);
    host.click(id).unwrap();
    assert_eq!(*changes.borrow(), vec![false], "Exactly one activation after adopt");
}

// ============================================================================
// Accessibility
// ============================================================================

#[test]
fn test_aria_tracks_every_mutation() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    let id = mount(&mut host, doc, ControlKind::Switch);

    let assert_synced = |host: &Host| {
        let aria = host.accessibility(id).unwrap();
        assert_eq!(aria.checked(), Some(Some(checked(host, id))));
        assert_eq!(aria.disabled(), Some(host.has_attribute(id, "disabled").unwrap()));
    };

    assert_synced(&host);
    host.click(id).unwrap();
    assert_synced(&host);
    host.set_property(id, "checked", false).unwrap();
    assert_synced(&host);
    host.set_attribute(id, "checked", "").unwrap();
    assert_synced(&host);
    host.set_property(id, "disabled", "yes").unwrap();
    assert_synced(&host);
    host.remove_attribute(id, "disabled").unwrap();
    assert_synced(&host);
    host.key_up(id, Key::Space, Modifiers::NONE).unwrap();
    assert_synced(&host);
}

#[test]
fn test_roles_and_tabindex() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    for (kind, role) in [
        (ControlKind::Button, "button"),
        (ControlKind::Radio, "radio"),
        (ControlKind::Switch, "checkbox"),
    ] {
        let id = mount(&mut host, doc, kind);
        assert_eq!(host.get_attribute(id, "role").unwrap(), Some(role));
        assert_eq!(host.get_attribute(id, "tabindex").unwrap(), Some("0"));
        assert_eq!(host.accessibility(id).unwrap().role.map(|r| r.as_str()), Some(role));
    }
}

#[test]
fn test_disabling_drops_focus() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    let id = mount(&mut host, doc, ControlKind::Button);

    assert!(host.focus(id).unwrap());
    assert_eq!(host.active_element(doc), Some(id));

    host.set_property(id, "disabled", true).unwrap();
    assert_eq!(host.get_attribute(id, "tabindex").unwrap(), None);
    assert_eq!(host.active_element(doc), None);
    assert!(!host.focus(id).unwrap(), "Disabled control is not focusable");

    host.set_property(id, "disabled", false).unwrap();
    assert_eq!(host.get_attribute(id, "tabindex").unwrap(), Some("0"));
    assert!(host.focus(id).unwrap());
}

#[test]
fn test_focus_order_skips_disabled() {
    let (mut host, doc, _) = setup(&ControlConfig::default());
    let a = mount(&mut host, doc, ControlKind::Button);
    let b = mount(&mut host, doc, ControlKind::Radio);
    let c = mount(&mut host, doc, ControlKind::Switch);
    host.set_property(b, "disabled", true).unwrap();

    assert_eq!(host.focus_next(doc).unwrap(), Some(a));
    assert_eq!(host.focus_next(doc).unwrap(), Some(c));
    assert_eq!(host.focus_next(doc).unwrap(), Some(a));
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_duplicate_registration() {
    let (mut host, _, _) = setup(&ControlConfig::default());
    let err = register_control(&mut host, "gorgui-button", ControlKind::Button, &ControlConfig::default())
        .unwrap_err();
    assert_eq!(err, CustomElementError::AlreadyDefined("gorgui-button".to_string()));
}

#[test]
fn test_custom_prefix() {
    let config = ControlConfig { tag_prefix: "acme".into(), ..ControlConfig::default() };
    let (mut host, doc, root) = setup(&config);
    let id = host.create_element(doc, "acme-switch").unwrap();
    host.append_child(root, id).unwrap();
    assert!(host.is_upgraded(id).unwrap());
    assert!(!host.registry().is_defined("gorgui-switch"));
}
