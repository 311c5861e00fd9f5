//! Lifecycle Controller
//!
//! Hooks the host binding invokes on attach, detach, adopt and observed
//! attribute changes. Listener registration and derived accessibility
//! attributes live here.

use gorgui_a11y::aria_bool;
use gorgui_dom::{CustomElement, Element, EventType, ListenerOptions};

use crate::control::{Control, CLICK, KEY_UP};
use crate::reflect::{CHECKED, DISABLED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Unattached,
    Attached,
    Detached,
}

impl LifecycleState {
    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached)
    }
}

/// Transition hooks of a control instance
pub trait Lifecycle {
    /// Inserted into a live tree
    fn on_attach(&mut self, element: &mut Element);

    /// Removed from a live tree
    fn on_detach(&mut self, element: &mut Element);

    /// Moved into another document
    fn on_adopt(&mut self, element: &mut Element);

    /// An observed attribute was set or removed
    fn on_attribute_change(&mut self, element: &mut Element, name: &str, old: Option<&str>, new: Option<&str>);
}

impl Lifecycle for Control {
    fn on_attach(&mut self, element: &mut Element) {
        if !element.has_attribute("role") {
            let role = self.kind.default_role();
            self.set_attribute(element, "role", role.as_str());
        }
        self.upgrade_properties(element);
        if !element.has_attribute("tabindex") && !DISABLED.read(element) {
            self.set_attribute(element, "tabindex", "0");
        }
        for property in self.reflector.properties() {
            let present = property.read(element);
            self.derive_accessibility(element, property.name, present);
        }

        // Bound once per element however many times it attaches
        element.listeners.add_handler(EventType::KeyUp, KEY_UP, ListenerOptions::default());
        element.listeners.add_handler(EventType::Click, CLICK, ListenerOptions::default());
        self.machine.rearm();
        self.lifecycle = LifecycleState::Attached;

        debug_assert!(self.reflector.is_consistent(element));
        tracing::debug!("<{}> attached", element.local_name());
    }

    fn on_detach(&mut self, element: &mut Element) {
        element.listeners.remove_handler(EventType::KeyUp, KEY_UP);
        element.listeners.remove_handler(EventType::Click, CLICK);
        self.lifecycle = LifecycleState::Detached;
        tracing::debug!("<{}> detached", element.local_name());
    }

    fn on_adopt(&mut self, element: &mut Element) {
        tracing::debug!("<{}> adopted ({:?})", element.local_name(), self.lifecycle);
    }

    fn on_attribute_change(&mut self, element: &mut Element, name: &str, _old: Option<&str>, new: Option<&str>) {
        self.derive_accessibility(element, name, new.is_some());
    }
}

impl Control {
    /// Recompute the accessibility attributes that follow `name`
    fn derive_accessibility(&mut self, element: &mut Element, name: &str, present: bool) {
        if name == CHECKED.attribute {
            self.set_attribute(element, "aria-checked", aria_bool(present));
        } else if name == DISABLED.attribute {
            self.set_attribute(element, "aria-disabled", aria_bool(present));
            if self.machine.set_disabled(present) {
                tracing::trace!("<{}> activation {:?}", element.local_name(), self.machine.state());
            }
            if present {
                self.remove_attribute(element, "tabindex");
                element.blur();
            } else if !element.has_attribute("tabindex") {
                self.set_attribute(element, "tabindex", "0");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::ActivationState;
    use crate::config::ControlConfig;
    use crate::control::testing::*;
    use crate::kind::ControlKind;
    use gorgui_dom::Key;

    #[test]
    fn test_attach_assigns_defaults() {
        let (control, el) = mount(ControlKind::Radio);
        assert_eq!(el.get_attribute("role"), Some("radio"));
        assert_eq!(el.get_attribute("tabindex"), Some("0"));
        assert_eq!(el.get_attribute("aria-checked"), Some("false"));
        assert_eq!(el.get_attribute("aria-disabled"), Some("false"));
        assert_eq!(control.lifecycle_state(), LifecycleState::Attached);
        assert_eq!(el.listeners.count(EventType::Click), 1);
        assert_eq!(el.listeners.count(EventType::KeyUp), 1);
    }

    #[test]
    fn test_attach_keeps_consumer_role_and_tabindex() {
        let (mut control, mut el) = create(ControlKind::Switch, &ControlConfig::default());
        el.attributes.set_attribute("role", "switch");
        el.attributes.set_attribute("tabindex", "-1");
        control.on_attach(&mut el);
        assert_eq!(el.get_attribute("role"), Some("switch"));
        assert_eq!(el.get_attribute("tabindex"), Some("-1"));
    }

    #[test]
    fn test_attach_disabled_is_not_focusable() {
        let (mut control, mut el) = create(ControlKind::Button, &ControlConfig::default());
        control.set_disabled(&mut el, true);
        control.on_attach(&mut el);
        assert!(!el.has_attribute("tabindex"));
        assert_eq!(el.get_attribute("aria-disabled"), Some("true"));
        assert_eq!(control.activation_state(), ActivationState::Disabled);
    }

    #[test]
    fn test_disable_removes_tabindex_and_focus() {
        let (mut control, mut el) = mount(ControlKind::Switch);
        control.set_disabled(&mut el, true);
        assert!(!el.has_attribute("tabindex"));
        assert!(!el.is_focused());

        control.set_disabled(&mut el, false);
        assert_eq!(el.get_attribute("tabindex"), Some("0"));
        assert_eq!(el.get_attribute("aria-disabled"), Some("false"));
        assert_eq!(control.activation_state(), ActivationState::Idle);
    }

    #[test]
    fn test_detach_unbinds_listeners() {
        let (mut control, mut el) = mount(ControlKind::Switch);
        control.on_detach(&mut el);
        assert!(el.listeners.is_empty());
        assert_eq!(control.lifecycle_state(), LifecycleState::Detached);

        // Detached controls do not react
        press(&mut control, &mut el, Key::Space);
        assert_eq!(control.checked(&el), Some(false));

        // Detaching twice is harmless
        control.on_detach(&mut el);
    }

    #[test]
    fn test_reattach_binds_once() {
        let (mut control, mut el) = mount(ControlKind::Switch);
        control.on_attach(&mut el);
        control.on_detach(&mut el);
        control.on_attach(&mut el);
        assert_eq!(el.listeners.count(EventType::Click), 1);

        let changes = record_changes(&mut el);
        pointer_click(&mut control, &mut el);
        assert_eq!(*changes.borrow(), vec![true]);
    }

    #[test]
    fn test_adopt_keeps_state() {
        let (mut control, mut el) = mount(ControlKind::Radio);
        control.set_checked(&mut el, true);
        control.on_adopt(&mut el);
        assert_eq!(control.checked(&el), Some(true));
        assert_eq!(control.lifecycle_state(), LifecycleState::Attached);
        assert_eq!(el.listeners.count(EventType::Click), 1);
    }

    #[test]
    fn test_external_attribute_change_updates_aria() {
        let (mut control, mut el) = mount(ControlKind::Radio);
        el.attributes.set_attribute("checked", "");
        control.on_attribute_change(&mut el, "checked", None, Some(""));
        assert_eq!(el.get_attribute("aria-checked"), Some("true"));
    }
}
