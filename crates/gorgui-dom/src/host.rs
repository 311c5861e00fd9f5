//! Host Tree
//!
//! Arena of nodes across any number of documents. The host owns the custom
//! element registry and delivers lifecycle notifications (connected,
//! disconnected, adopted, attribute changed) synchronously from the
//! operation that causes them.

use gorgui_a11y::{AriaAttributes, FocusManager, TabIndex};

use crate::custom_elements::{self, CustomElement, CustomElementError, CustomElementRegistry, ElementDefinition, Inert};
use crate::element::Element;
use crate::events::{Event, EventOrigin, EventType, Key, Modifiers};
use crate::listeners::{ListenerId, ListenerOptions};
use crate::value::PropertyValue;
use crate::{DocumentId, DomError, NodeId};

struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    document: DocumentId,
    data: NodeData,
}

enum NodeData {
    /// Document root; everything below it is connected
    Root,
    Element(ElementNode),
}

struct ElementNode {
    element: Element,
    /// None until the element's name is defined
    behavior: Option<Box<dyn CustomElement>>,
}

struct DocumentData {
    root: NodeId,
    focus: FocusManager<NodeId>,
}

/// The host runtime
#[derive(Default)]
pub struct Host {
    nodes: Vec<Node>,
    documents: Vec<DocumentData>,
    registry: CustomElementRegistry,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the custom element registry
    pub fn registry(&self) -> &CustomElementRegistry {
        &self.registry
    }

    /// Create a new document with an empty root
    pub fn create_document(&mut self) -> DocumentId {
        let doc = DocumentId(self.documents.len() as u32);
        let root = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            document: doc,
            data: NodeData::Root,
        });
        self.documents.push(DocumentData {
            root,
            focus: FocusManager::new(),
        });
        doc
    }

    /// Root node of a document
    pub fn document_root(&self, doc: DocumentId) -> Result<NodeId, DomError> {
        self.document(doc).map(|d| d.root)
    }

    /// Create an element owned by `doc`, upgrading it if its name is defined
    pub fn create_element(&mut self, doc: DocumentId, local_name: &str) -> Result<NodeId, DomError> {
        self.document(doc)?;
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            document: doc,
            data: NodeData::Element(ElementNode {
                element: Element::new(id, local_name),
                behavior: None,
            }),
        });
        self.upgrade(id);
        Ok(id)
    }

    /// Define a custom element and upgrade every existing element with that name
    pub fn define(&mut self, name: &str, definition: ElementDefinition) -> Result<(), CustomElementError> {
        self.registry.define(name, definition)?;
        tracing::info!("Defined custom element <{}>", name);

        let candidates: Vec<NodeId> = (0..self.nodes.len() as u32)
            .map(NodeId)
            .filter(|&id| match &self.nodes[id.index()].data {
                NodeData::Element(en) => en.behavior.is_none() && en.element.local_name() == name,
                NodeData::Root => false,
            })
            .collect();

        for id in candidates {
            self.upgrade(id);
        }
        Ok(())
    }

    /// Construct the behavior of an undefined element, replay its observed
    /// attributes and connect it if it is already in a document tree
    fn upgrade(&mut self, id: NodeId) {
        let connected = self.is_connected(id);
        let Some(Node { data: NodeData::Element(en), .. }) = self.nodes.get_mut(id.index()) else {
            return;
        };
        if en.behavior.is_some() {
            return;
        }
        let Some(definition) = self.registry.get(en.element.local_name()) else {
            return;
        };

        let ElementNode { element, behavior } = en;
        let mut upgraded = definition.construct(element);

        let present: Vec<(String, String)> = definition
            .observed_attributes()
            .iter()
            .filter_map(|name| element.get_attribute(name).map(|v| (name.clone(), v.to_string())))
            .collect();
        for (name, value) in present {
            upgraded.attribute_changed(element, &name, None, Some(&value));
        }
        if connected {
            upgraded.connected(element);
        }
        tracing::debug!("Upgraded <{}> {:?}", element.local_name(), id);
        *behavior = Some(upgraded);

        self.flush(id);
    }

    /// Whether the node is reachable from a document root
    pub fn is_connected(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(node) = self.nodes.get(current.index()) else {
                return false;
            };
            if matches!(node.data, NodeData::Root) {
                return true;
            }
            cursor = node.parent;
        }
        false
    }

    /// Owner document of a node
    pub fn owner_document(&self, id: NodeId) -> Result<DocumentId, DomError> {
        self.node(id).map(|n| n.document)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, DomError> {
        self.node(id).map(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DomError> {
        self.node(id).map(|n| n.children.as_slice())
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node(parent)?;
        self.node(child)?;
        if matches!(self.nodes[child.index()].data, NodeData::Root)
            || self.is_inclusive_ancestor(child, parent)
        {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        if self.nodes[child.index()].parent.is_some() {
            self.remove_child(child)?;
        }

        let target_doc = self.nodes[parent.index()].document;
        if self.nodes[child.index()].document != target_doc {
            self.move_to_document(child, target_doc);
        }

        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);

        if self.is_connected(parent) {
            for id in self.subtree(child) {
                self.notify(id, |behavior, element| behavior.connected(element))?;
            }
        }
        self.flush(child);
        Ok(())
    }

    /// Detach a node from its parent
    pub fn remove_child(&mut self, child: NodeId) -> Result<(), DomError> {
        let Some(parent) = self.node(child)?.parent else {
            return Ok(());
        };
        let was_connected = self.is_connected(child);

        self.nodes[parent.index()].children.retain(|&c| c != child);
        self.nodes[child.index()].parent = None;

        if was_connected {
            for id in self.subtree(child) {
                if let NodeData::Element(en) = &mut self.nodes[id.index()].data {
                    en.element.set_focused(false);
                }
                self.notify(id, |behavior, element| behavior.disconnected(element))?;
            }
        }
        self.flush(child);
        Ok(())
    }

    /// Move a subtree into another document.
    ///
    /// A connected subtree is re-parented under the target document's root
    /// and stays connected; only the adopted callback fires.
    pub fn adopt_node(&mut self, id: NodeId, doc: DocumentId) -> Result<(), DomError> {
        let target_root = self.document_root(doc)?;
        if matches!(self.node(id)?.data, NodeData::Root) {
            return Err(DomError::HierarchyRequest { parent: target_root, child: id });
        }
        if self.nodes[id.index()].document == doc {
            return Ok(());
        }

        let was_connected = self.is_connected(id);
        if let Some(parent) = self.nodes[id.index()].parent.take() {
            self.nodes[parent.index()].children.retain(|&c| c != id);
        }
        if was_connected {
            for node in self.subtree(id) {
                if let NodeData::Element(en) = &mut self.nodes[node.index()].data {
                    en.element.set_focused(false);
                }
            }
            self.nodes[id.index()].parent = Some(target_root);
            self.nodes[target_root.index()].children.push(id);
        }

        self.move_to_document(id, doc);
        self.flush(id);
        Ok(())
    }

    fn move_to_document(&mut self, id: NodeId, doc: DocumentId) {
        for node in self.subtree(id) {
            self.nodes[node.index()].document = doc;
            // Subtrees never contain a document root
            let _ = self.notify(node, |behavior, element| behavior.adopted(element));
        }
    }

    /// Set an attribute, notifying the behavior when it is observed
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.notify(id, |behavior, element| behavior.set_attribute(element, name, value))?;
        self.flush(id);
        Ok(())
    }

    /// Remove an attribute, notifying the behavior when it is observed
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<(), DomError> {
        self.notify(id, |behavior, element| behavior.remove_attribute(element, name))?;
        self.flush(id);
        Ok(())
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>, DomError> {
        Ok(self.element(id)?.get_attribute(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> Result<bool, DomError> {
        Ok(self.element(id)?.has_attribute(name))
    }

    /// Assign a property. Goes through the behavior's accessor when there is
    /// one; otherwise it becomes an own property of the element.
    pub fn set_property(&mut self, id: NodeId, name: &str, value: impl Into<PropertyValue>) -> Result<(), DomError> {
        let value = value.into();
        self.notify(id, |behavior, element| {
            if !behavior.set_property(element, name, &value) {
                element.set_own_property(name, value);
            }
        })?;
        self.flush(id);
        Ok(())
    }

    /// Read a property; an own property shadows the accessor
    pub fn get_property(&self, id: NodeId, name: &str) -> Result<PropertyValue, DomError> {
        let en = self.element_node(id)?;
        if let Some(value) = en.element.own_property(name) {
            return Ok(value.clone());
        }
        Ok(en
            .behavior
            .as_deref()
            .and_then(|b| b.get_property(&en.element, name))
            .unwrap_or_default())
    }

    /// Register a consumer listener
    pub fn add_event_listener<F>(&mut self, id: NodeId, event_type: EventType, callback: F) -> Result<ListenerId, DomError>
    where
        F: FnMut(&Event) + 'static,
    {
        self.add_event_listener_with_options(id, event_type, callback, ListenerOptions::default())
    }

    pub fn add_event_listener_with_options<F>(
        &mut self,
        id: NodeId,
        event_type: EventType,
        callback: F,
        options: ListenerOptions,
    ) -> Result<ListenerId, DomError>
    where
        F: FnMut(&Event) + 'static,
    {
        Ok(self.element_node_mut(id)?.element.listeners.add(event_type, callback, options))
    }

    pub fn remove_event_listener(&mut self, id: NodeId, listener: ListenerId) -> Result<bool, DomError> {
        Ok(self.element_node_mut(id)?.element.listeners.remove(listener))
    }

    /// Dispatch an event at `id` and deliver it to ancestors when it bubbles.
    /// Returns false if the default action was prevented.
    pub fn dispatch_event(&mut self, id: NodeId, mut event: Event) -> Result<bool, DomError> {
        let mut not_canceled = true;
        self.notify(id, |behavior, element| {
            not_canceled = custom_elements::dispatch_event(behavior, element, &mut event);
        })?;
        self.flush(id);
        Ok(not_canceled)
    }

    /// Pointer click
    pub fn click(&mut self, id: NodeId) -> Result<bool, DomError> {
        self.dispatch_event(id, Event::click(EventOrigin::Pointer))
    }

    /// Key release
    pub fn key_up(&mut self, id: NodeId, key: Key, modifiers: Modifiers) -> Result<bool, DomError> {
        self.dispatch_event(id, Event::key_up(key, modifiers))
    }

    /// Focus an element. Only connected elements with a focusable tab index take focus.
    pub fn focus(&mut self, id: NodeId) -> Result<bool, DomError> {
        let doc = self.owner_document(id)?;
        let focusable = TabIndex::from_attribute(self.element(id)?.get_attribute("tabindex")).is_focusable();
        if !focusable || !self.is_connected(id) {
            return Ok(false);
        }

        let order = self.focus_order(doc);
        let document = &mut self.documents[doc.0 as usize];
        document.focus.set_focus_order(order);
        let previous = document.focus.focused();
        if !document.focus.focus(id) {
            return Ok(false);
        }
        self.move_focus_flag(previous, Some(id));
        tracing::trace!("Focused {:?}", id);
        Ok(true)
    }

    /// Move focus to the next focusable element in tree order
    pub fn focus_next(&mut self, doc: DocumentId) -> Result<Option<NodeId>, DomError> {
        self.document(doc)?;
        let order = self.focus_order(doc);
        let document = &mut self.documents[doc.0 as usize];
        let previous = document.focus.focused();
        document.focus.set_focus_order(order);
        let next = document.focus.focus_next();
        self.move_focus_flag(previous, next);
        Ok(next)
    }

    /// Currently focused element of a document
    pub fn active_element(&self, doc: DocumentId) -> Option<NodeId> {
        let focused = self.documents.get(doc.0 as usize)?.focus.focused()?;
        self.element(focused).ok().filter(|e| e.is_focused()).map(|_| focused)
    }

    /// Accessibility view of an element's role and aria-* attributes
    pub fn accessibility(&self, id: NodeId) -> Result<AriaAttributes, DomError> {
        let element = self.element(id)?;
        Ok(AriaAttributes::from_attributes(
            element.attributes.iter().map(|a| (a.name.as_str(), a.value.as_str())),
        ))
    }

    /// Read-only access to an element
    pub fn element(&self, id: NodeId) -> Result<&Element, DomError> {
        self.element_node(id).map(|en| &en.element)
    }

    /// Whether the element has been upgraded
    pub fn is_upgraded(&self, id: NodeId) -> Result<bool, DomError> {
        self.element_node(id).map(|en| en.behavior.is_some())
    }

    fn move_focus_flag(&mut self, previous: Option<NodeId>, next: Option<NodeId>) {
        for (id, focused) in [(previous, false), (next, true)] {
            if let Some(NodeData::Element(en)) = id.and_then(|id| self.nodes.get_mut(id.index())).map(|n| &mut n.data) {
                en.element.set_focused(focused);
            }
        }
    }

    fn focus_order(&self, doc: DocumentId) -> Vec<NodeId> {
        let Some(document) = self.documents.get(doc.0 as usize) else {
            return Vec::new();
        };
        self.subtree(document.root)
            .into_iter()
            .filter(|&id| match &self.nodes[id.index()].data {
                NodeData::Element(en) => {
                    TabIndex::from_attribute(en.element.get_attribute("tabindex")).is_focusable()
                }
                NodeData::Root => false,
            })
            .collect()
    }

    /// Run a behavior callback on an element (inert behavior when not upgraded)
    fn notify<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn CustomElement, &mut Element) -> R,
    ) -> Result<R, DomError> {
        let ElementNode { element, behavior } = self.element_node_mut(id)?;
        Ok(match behavior.as_deref_mut() {
            Some(behavior) => f(behavior, element),
            None => f(&mut Inert, element),
        })
    }

    /// Deliver queued bubbling events to ancestors, then reconcile focus
    fn flush(&mut self, origin: NodeId) {
        let mut work = vec![origin];
        while let Some(id) = work.pop() {
            let pending = match self.nodes.get_mut(id.index()).map(|n| &mut n.data) {
                Some(NodeData::Element(en)) => en.element.take_pending_bubbles(),
                _ => continue,
            };
            for mut event in pending {
                let mut cursor = self.nodes[id.index()].parent;
                while let Some(ancestor) = cursor {
                    if event.is_propagation_stopped() {
                        break;
                    }
                    if let NodeData::Element(ElementNode { element, behavior }) = &mut self.nodes[ancestor.index()].data {
                        match behavior.as_deref_mut() {
                            Some(behavior) => custom_elements::invoke_listeners(behavior, element, &mut event),
                            None => custom_elements::invoke_listeners(&mut Inert, element, &mut event),
                        }
                        if element.has_pending_bubbles() {
                            work.push(ancestor);
                        }
                    }
                    cursor = self.nodes[ancestor.index()].parent;
                }
            }
        }
        self.sync_focus();
    }

    /// Clear document focus held by elements that blurred themselves
    fn sync_focus(&mut self) {
        let nodes = &self.nodes;
        for document in &mut self.documents {
            if let Some(focused) = document.focus.focused() {
                let still_focused = matches!(
                    nodes.get(focused.index()).map(|n| &n.data),
                    Some(NodeData::Element(en)) if en.element.is_focused()
                );
                let still_owned = nodes.get(focused.index()).map(|n| n.document)
                    == nodes.get(document.root.index()).map(|n| n.document);
                if !still_focused || !still_owned {
                    tracing::trace!("Blurred {:?}", focused);
                    document.focus.blur();
                }
            }
        }
    }

    /// Preorder list of `id` and its descendants
    fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(node) = self.nodes.get(current.index()) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, of: NodeId) -> bool {
        let mut cursor = Some(of);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.nodes.get(current.index()).and_then(|n| n.parent);
        }
        false
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.index()).ok_or(DomError::NodeNotFound(id))
    }

    fn document(&self, doc: DocumentId) -> Result<&DocumentData, DomError> {
        self.documents.get(doc.0 as usize).ok_or(DomError::DocumentNotFound(doc))
    }

    fn element_node(&self, id: NodeId) -> Result<&ElementNode, DomError> {
        match &self.node(id)?.data {
            NodeData::Element(en) => Ok(en),
            NodeData::Root => Err(DomError::NotAnElement(id)),
        }
    }

    fn element_node_mut(&mut self, id: NodeId) -> Result<&mut ElementNode, DomError> {
        match self.nodes.get_mut(id.index()).map(|n| &mut n.data) {
            Some(NodeData::Element(en)) => Ok(en),
            Some(NodeData::Root) => Err(DomError::NotAnElement(id)),
            None => Err(DomError::NodeNotFound(id)),
        }
    }
}
