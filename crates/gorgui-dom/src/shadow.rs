//! Shadow DOM
//!
//! Shadow root, slots, and scoped styles. Content of a shadow root is
//! isolated from the host tree: it is never reachable through the host's
//! children, and it only carries its own style sheets.

use crate::css_scope::ScopedStyleSheet;
use crate::template::DocumentFragment;
use crate::NodeId;

/// Shadow root mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowRootMode {
    #[default]
    Open,
    Closed,
}

/// Shadow root initialization options
#[derive(Debug, Clone, Copy, Default)]
pub struct ShadowRootInit {
    pub mode: ShadowRootMode,
    pub delegates_focus: bool,
}

/// Node inside a shadow tree or template
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowNode {
    Style(ScopedStyleSheet),
    Slot { name: String },
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<ShadowNode>,
    },
    Text(String),
}

impl ShadowNode {
    /// Default (unnamed) slot
    pub fn slot() -> Self {
        Self::Slot { name: String::new() }
    }

    pub fn named_slot(name: impl Into<String>) -> Self {
        Self::Slot { name: name.into() }
    }

    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a ShadowNode)) {
        f(self);
        if let Self::Element { children, .. } = self {
            for child in children {
                child.visit(f);
            }
        }
    }
}

/// Shadow root
#[derive(Debug, Clone)]
pub struct ShadowRoot {
    pub host: NodeId,
    pub mode: ShadowRootMode,
    pub delegates_focus: bool,
    children: Vec<ShadowNode>,
}

impl ShadowRoot {
    /// Create a new shadow root
    pub fn new(host: NodeId, init: ShadowRootInit) -> Self {
        Self {
            host,
            mode: init.mode,
            delegates_focus: init.delegates_focus,
            children: Vec::new(),
        }
    }

    /// Get children
    pub fn children(&self) -> &[ShadowNode] {
        &self.children
    }

    /// Add a child
    pub fn append_child(&mut self, child: ShadowNode) {
        self.children.push(child);
    }

    /// Move a fragment's nodes into this root
    pub fn append_fragment(&mut self, fragment: DocumentFragment) {
        self.children.extend(fragment.children);
    }

    /// Style sheets scoped to this root
    pub fn style_sheets(&self) -> Vec<&ScopedStyleSheet> {
        let mut sheets = Vec::new();
        for child in &self.children {
            child.visit(&mut |node| {
                if let ShadowNode::Style(sheet) = node {
                    sheets.push(sheet);
                }
            });
        }
        sheets
    }

    /// Names of all slots ("" for the default slot)
    pub fn slot_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for child in &self.children {
            child.visit(&mut |node| {
                if let ShadowNode::Slot { name } = node {
                    names.push(name.as_str());
                }
            });
        }
        names
    }

    /// Check for the default slot
    pub fn has_default_slot(&self) -> bool {
        self.slot_names().contains(&"")
    }
}
