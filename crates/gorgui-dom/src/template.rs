//! HTML Template Element
//!
//! Inert content built once and cloned per use. Cloning deep-copies the
//! content, so clones never share mutable state with the template or with
//! each other.

use crate::shadow::ShadowNode;

/// Template content - an inert list of nodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContent {
    pub children: Vec<ShadowNode>,
}

impl TemplateContent {
    /// Create a new empty template content
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child node
    pub fn append_child(&mut self, child: ShadowNode) {
        self.children.push(child);
    }

    /// Get children
    pub fn children(&self) -> &[ShadowNode] {
        &self.children
    }

    /// Check if content is empty
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of child nodes
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

/// Document fragment produced by cloning a template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFragment {
    pub children: Vec<ShadowNode>,
}

/// `<template>` element
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    content: TemplateContent,
}

impl Template {
    pub fn new(content: TemplateContent) -> Self {
        Self { content }
    }

    /// Get the template's content
    pub fn content(&self) -> &TemplateContent {
        &self.content
    }

    /// Clone the template's content as a DocumentFragment
    pub fn clone_content(&self) -> DocumentFragment {
        DocumentFragment {
            children: self.content.children.clone(),
        }
    }
}
