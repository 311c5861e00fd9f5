//! Control
//!
//! Per-instance behavior shared by every control kind. The host drives it
//! through [`CustomElement`]; each callback forwards to a [`Lifecycle`] hook
//! or to the activation machine, so everything stays testable on a bare
//! [`Element`] without a host tree.

use gorgui_dom::{
    dispatch_event, CustomElement, Element, Event, EventOrigin, HandlerId, PropertyValue,
};

use crate::activation::{ActivationMachine, ActivationState, ClickDecision, KeyDecision};
use crate::config::ControlConfig;
use crate::kind::ControlKind;
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::reflect::{AttributeWrite, Reflector, CHECKED, DISABLED};
use crate::renderer;

pub(crate) const KEY_UP: HandlerId = HandlerId(1);
pub(crate) const CLICK: HandlerId = HandlerId(2);

/// A live button, radio or switch
#[derive(Debug)]
pub struct Control {
    pub(crate) kind: ControlKind,
    pub(crate) reflector: Reflector,
    pub(crate) machine: ActivationMachine,
    pub(crate) lifecycle: LifecycleState,
}

impl Control {
    /// Render the encapsulated subtree into `element` and take over any
    /// property values assigned before the behavior existed
    pub fn new(kind: ControlKind, config: &ControlConfig, element: &mut Element) -> Self {
        if let Err(err) = renderer::render(kind, element) {
            tracing::warn!("<{}> keeps its existing shadow root: {}", element.local_name(), err);
        }

        let mut control = Self {
            kind,
            reflector: Reflector::new(kind.properties()),
            machine: ActivationMachine::new(kind.effect(), kind.trigger_key(), config.click_binding(kind)),
            lifecycle: LifecycleState::Unattached,
        };
        control.upgrade_properties(element);
        control.machine.set_disabled(DISABLED.read(element));
        control
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn lifecycle_state(&self) -> LifecycleState {
        self.lifecycle
    }

    pub fn activation_state(&self) -> ActivationState {
        self.machine.state()
    }

    /// `checked` property; None for kinds without one
    pub fn checked(&self, element: &Element) -> Option<bool> {
        self.reflector.read(element, CHECKED.name)
    }

    /// Assign `checked`; returns false for kinds without the property
    pub fn set_checked(&mut self, element: &mut Element, value: impl Into<PropertyValue>) -> bool {
        self.assign(element, CHECKED.name, &value.into())
    }

    pub fn disabled(&self, element: &Element) -> bool {
        DISABLED.read(element)
    }

    pub fn set_disabled(&mut self, element: &mut Element, value: impl Into<PropertyValue>) {
        self.assign(element, DISABLED.name, &value.into());
    }

    /// Programmatic click. Returns false if the default action was prevented.
    pub fn click(&mut self, element: &mut Element) -> bool {
        dispatch_event(self, element, &mut Event::click(EventOrigin::Script))
    }

    fn assign(&mut self, element: &mut Element, name: &str, value: &PropertyValue) -> bool {
        match self.reflector.write(name, value) {
            Some(write) => {
                self.apply(element, write);
                true
            }
            None => false,
        }
    }

    pub(crate) fn apply(&mut self, element: &mut Element, write: AttributeWrite) {
        match write {
            AttributeWrite::Set(name) => self.set_attribute(element, name, ""),
            AttributeWrite::Remove(name) => self.remove_attribute(element, name),
        }
    }

    /// Replay values that shadowed the accessors through reflection
    pub(crate) fn upgrade_properties(&mut self, element: &mut Element) {
        for (property, value) in self.reflector.take_pending(element) {
            tracing::debug!("<{}> upgrading pre-set {} = {}", element.local_name(), property.name, value);
            self.apply(element, property.apply(value));
        }
    }

    fn on_key_up(&mut self, element: &mut Element, event: &mut Event) {
        match self.machine.on_key_up(event) {
            KeyDecision::PassThrough => {}
            KeyDecision::Swallow => {
                tracing::trace!("<{}> key ignored while disabled", element.local_name());
            }
            KeyDecision::Activate => {
                dispatch_event(self, element, &mut Event::click(EventOrigin::Keyboard));
            }
        }
    }

    fn on_click(&mut self, element: &mut Element, event: &mut Event) {
        match self.machine.on_click(event) {
            ClickDecision::Ignore => {
                tracing::trace!("<{}> click ignored ({:?})", element.local_name(), self.machine.state());
            }
            ClickDecision::Activate => self.activate(element),
        }
    }

    fn activate(&mut self, element: &mut Element) {
        let Some(checked) = self.machine.next_checked(CHECKED.read(element)) else {
            tracing::trace!("<{}> activated", element.local_name());
            return;
        };
        self.apply(element, CHECKED.apply(checked));
        tracing::trace!("<{}> activated, checked = {}", element.local_name(), checked);
        dispatch_event(self, element, &mut Event::change(checked));
    }
}

impl CustomElement for Control {
    fn observed_attributes(&self) -> &[&'static str] {
        self.kind.observed_attributes()
    }

    fn connected(&mut self, element: &mut Element) {
        self.on_attach(element);
    }

    fn disconnected(&mut self, element: &mut Element) {
        self.on_detach(element);
    }

    fn adopted(&mut self, element: &mut Element) {
        self.on_adopt(element);
    }

    fn attribute_changed(&mut self, element: &mut Element, name: &str, old: Option<&str>, new: Option<&str>) {
        self.on_attribute_change(element, name, old, new);
    }

    fn handle_event(&mut self, element: &mut Element, handler: HandlerId, event: &mut Event) {
        match handler {
            KEY_UP => self.on_key_up(element, event),
            CLICK => self.on_click(element, event),
            _ => {}
        }
    }

    fn set_property(&mut self, element: &mut Element, name: &str, value: &PropertyValue) -> bool {
        self.assign(element, name, value)
    }

    fn get_property(&self, element: &Element, name: &str) -> Option<PropertyValue> {
        self.reflector.read(element, name).map(PropertyValue::Bool)
    }
}
