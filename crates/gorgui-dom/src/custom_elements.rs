//! Custom Elements
//!
//! Custom element registry, the behavior trait the host drives through
//! lifecycle callbacks, and event dispatch into an element's listeners.

use std::collections::HashMap;
use std::fmt;

use crate::element::Element;
use crate::events::Event;
use crate::listeners::{HandlerId, Invocation};
use crate::value::PropertyValue;

/// Behavior bound to an upgraded element.
///
/// The host invokes these callbacks synchronously from the operation that
/// triggered them. Every callback receives the element it is bound to, so a
/// behavior never holds a reference into the host tree.
pub trait CustomElement {
    /// Attributes whose changes are reported to [`attribute_changed`](Self::attribute_changed)
    fn observed_attributes(&self) -> &[&'static str];

    /// Element was inserted into a document tree
    fn connected(&mut self, element: &mut Element);

    /// Element was removed from a document tree
    fn disconnected(&mut self, element: &mut Element);

    /// Element moved to another document
    fn adopted(&mut self, element: &mut Element);

    /// An observed attribute was set or removed
    fn attribute_changed(&mut self, element: &mut Element, name: &str, old: Option<&str>, new: Option<&str>);

    /// A handler bound through [`EventListeners::add_handler`](crate::EventListeners::add_handler) fired
    fn handle_event(&mut self, element: &mut Element, handler: HandlerId, event: &mut Event);

    /// Property write through an accessor; returns false if the name has no accessor
    fn set_property(&mut self, _element: &mut Element, _name: &str, _value: &PropertyValue) -> bool {
        false
    }

    /// Property read through an accessor
    fn get_property(&self, _element: &Element, _name: &str) -> Option<PropertyValue> {
        None
    }

    fn observes(&self, name: &str) -> bool {
        self.observed_attributes().iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Set an attribute and report the change before returning
    fn set_attribute(&mut self, element: &mut Element, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        let old = element.attributes.set_attribute(&name, value);
        if self.observes(&name) {
            self.attribute_changed(element, &name, old.as_deref(), Some(value));
        }
    }

    /// Remove an attribute and report the change before returning
    fn remove_attribute(&mut self, element: &mut Element, name: &str) {
        let name = name.to_ascii_lowercase();
        if let Some(old) = element.attributes.remove_attribute(&name) {
            if self.observes(&name) {
                self.attribute_changed(element, &name, Some(&old), None);
            }
        }
    }
}

/// Behavior of elements that were never upgraded
pub(crate) struct Inert;

impl CustomElement for Inert {
    fn observed_attributes(&self) -> &[&'static str] {
        &[]
    }
    fn connected(&mut self, _element: &mut Element) {}
    fn disconnected(&mut self, _element: &mut Element) {}
    fn adopted(&mut self, _element: &mut Element) {}
    fn attribute_changed(&mut self, _element: &mut Element, _name: &str, _old: Option<&str>, _new: Option<&str>) {}
    fn handle_event(&mut self, _element: &mut Element, _handler: HandlerId, _event: &mut Event) {}
}

/// Dispatch an event at `element`.
///
/// Runs the element's listeners in registration order and queues the event
/// for ancestor delivery when it bubbles. Returns false if a listener
/// prevented the default action.
pub fn dispatch_event<B: CustomElement + ?Sized>(behavior: &mut B, element: &mut Element, event: &mut Event) -> bool {
    event.target = Some(element.node_id());
    invoke_listeners(behavior, element, event);
    if event.bubbles && !event.is_propagation_stopped() {
        element.queue_bubble(event.clone());
    }
    !event.is_default_prevented()
}

/// Run the listeners registered on `element` for `event`
pub(crate) fn invoke_listeners<B: CustomElement + ?Sized>(behavior: &mut B, element: &mut Element, event: &mut Event) {
    event.current_target = Some(element.node_id());
    for id in element.listeners.snapshot(event.event_type) {
        match element.listeners.begin(id) {
            Some(Invocation::Handler(handler)) => behavior.handle_event(element, handler, event),
            Some(Invocation::Detached(mut callback)) => callback(event),
            Some(Invocation::InPlace) => element.listeners.call(id, event),
            None => {}
        }
    }
}

/// Constructs the behavior for a newly upgraded element
pub type ElementFactory = Box<dyn Fn(&mut Element) -> Box<dyn CustomElement>>;

/// Custom element definition
pub struct ElementDefinition {
    observed_attributes: Vec<String>,
    factory: ElementFactory,
}

impl ElementDefinition {
    pub fn new<F>(observed_attributes: &[&str], factory: F) -> Self
    where
        F: Fn(&mut Element) -> Box<dyn CustomElement> + 'static,
    {
        Self {
            observed_attributes: observed_attributes.iter().map(|a| a.to_ascii_lowercase()).collect(),
            factory: Box::new(factory),
        }
    }

    pub fn observed_attributes(&self) -> &[String] {
        &self.observed_attributes
    }

    /// Construct the behavior for `element`
    pub fn construct(&self, element: &mut Element) -> Box<dyn CustomElement> {
        (self.factory)(element)
    }
}

impl fmt::Debug for ElementDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementDefinition")
            .field("observed_attributes", &self.observed_attributes)
            .finish_non_exhaustive()
    }
}

/// Custom elements registry
#[derive(Debug, Default)]
pub struct CustomElementRegistry {
    definitions: HashMap<String, ElementDefinition>,
}

impl CustomElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a custom element
    pub fn define(&mut self, name: &str, definition: ElementDefinition) -> Result<(), CustomElementError> {
        if !Self::is_valid_name(name) {
            return Err(CustomElementError::InvalidName(name.to_string()));
        }

        if self.definitions.contains_key(name) {
            return Err(CustomElementError::AlreadyDefined(name.to_string()));
        }

        self.definitions.insert(name.to_string(), definition);
        Ok(())
    }

    /// Get element definition
    pub fn get(&self, name: &str) -> Option<&ElementDefinition> {
        self.definitions.get(name)
    }

    /// Check if element is defined
    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validate custom element name
    fn is_valid_name(name: &str) -> bool {
        // Must contain hyphen
        if !name.contains('-') {
            return false;
        }

        // Must start with lowercase letter
        if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
            return false;
        }

        if name.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace()) {
            return false;
        }

        // Reserved names
        let reserved = ["annotation-xml", "color-profile", "font-face",
                       "font-face-src", "font-face-uri", "font-face-format",
                       "font-face-name", "missing-glyph"];
        !reserved.contains(&name)
    }
}

/// Custom element errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomElementError {
    #[error("Invalid custom element name: {0}")]
    InvalidName(String),

    #[error("Element already defined: {0}")]
    AlreadyDefined(String),
}
