//! Element
//!
//! Host-side state of one element: attributes, own properties, listeners,
//! shadow root and focus.

use std::collections::HashMap;

use crate::attributes::NamedNodeMap;
use crate::events::Event;
use crate::listeners::EventListeners;
use crate::shadow::{ShadowRoot, ShadowRootInit};
use crate::value::PropertyValue;
use crate::{DomError, NodeId};

/// Element state owned by the host
#[derive(Debug)]
pub struct Element {
    node_id: NodeId,
    local_name: String,
    pub attributes: NamedNodeMap,
    pub listeners: EventListeners,
    /// Instance-level properties set while no accessor handled them
    own_properties: HashMap<String, PropertyValue>,
    shadow_root: Option<ShadowRoot>,
    focused: bool,
    /// Bubbling events waiting for the host to walk ancestors
    pending_bubbles: Vec<Event>,
}

impl Element {
    pub fn new(node_id: NodeId, local_name: &str) -> Self {
        Self {
            node_id,
            local_name: local_name.to_ascii_lowercase(),
            attributes: NamedNodeMap::new(),
            listeners: EventListeners::new(),
            own_properties: HashMap::new(),
            shadow_root: None,
            focused: false,
            pending_bubbles: Vec::new(),
        }
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get_attribute(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has_attribute(name)
    }

    /// Own property value, if one shadows the accessor
    pub fn own_property(&self, name: &str) -> Option<&PropertyValue> {
        self.own_properties.get(name)
    }

    pub fn has_own_property(&self, name: &str) -> bool {
        self.own_properties.contains_key(name)
    }

    pub fn set_own_property(&mut self, name: &str, value: PropertyValue) {
        self.own_properties.insert(name.to_string(), value);
    }

    /// Delete an own property, returning its value
    pub fn take_own_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.own_properties.remove(name)
    }

    /// Attach a shadow root; an element hosts at most one
    pub fn attach_shadow(&mut self, init: ShadowRootInit) -> Result<&mut ShadowRoot, DomError> {
        if self.shadow_root.is_some() {
            return Err(DomError::ShadowRootExists);
        }
        Ok(self.shadow_root.insert(ShadowRoot::new(self.node_id, init)))
    }

    pub fn shadow_root(&self) -> Option<&ShadowRoot> {
        self.shadow_root.as_ref()
    }

    pub fn shadow_root_mut(&mut self) -> Option<&mut ShadowRoot> {
        self.shadow_root.as_mut()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Drop focus from this element
    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub(crate) fn queue_bubble(&mut self, event: Event) {
        self.pending_bubbles.push(event);
    }

    pub fn has_pending_bubbles(&self) -> bool {
        !self.pending_bubbles.is_empty()
    }

    /// Take the bubbling events dispatched at this element since the last call
    pub fn take_pending_bubbles(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending_bubbles)
    }
}
