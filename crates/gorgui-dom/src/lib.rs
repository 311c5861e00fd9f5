//! gorgui DOM - host runtime substrate
//!
//! The minimal document model gorgui controls are bound to: attribute maps,
//! events and listener lists, shadow roots, templates, the custom element
//! registry, and a host tree that delivers lifecycle notifications.

mod attributes;
mod css_scope;
mod custom_elements;
mod element;
mod events;
mod host;
mod listeners;
mod shadow;
mod template;
mod value;

pub use attributes::{Attr, NamedNodeMap};
pub use css_scope::{ScopedRule, ScopedStyleSheet};
pub use custom_elements::{
    dispatch_event, CustomElement, CustomElementError, CustomElementRegistry, ElementDefinition,
    ElementFactory,
};
pub use element::Element;
pub use events::{ChangeDetail, Event, EventOrigin, EventType, Key, Modifiers};
pub use host::Host;
pub use listeners::{EventListeners, HandlerId, ListenerId, ListenerOptions};
pub use shadow::{ShadowNode, ShadowRoot, ShadowRootInit, ShadowRootMode};
pub use template::{DocumentFragment, Template, TemplateContent};
pub use value::PropertyValue;

/// Node identifier (index into the host arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Create a node id from a raw index
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw arena index
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub(crate) u32);

/// Host tree errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("Document not found: {0:?}")]
    DocumentNotFound(DocumentId),

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("Element already hosts a shadow root")]
    ShadowRootExists,

    #[error("Cannot insert {child:?} under {parent:?}: would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error(transparent)]
    Registry(#[from] CustomElementError),
}
