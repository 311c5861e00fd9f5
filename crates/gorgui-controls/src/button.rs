//! Button
//!
//! Momentary control: Enter or a click activates it, nothing is persisted
//! and no change event is emitted. Content is projected through a slot.

use gorgui_dom::{ScopedStyleSheet, ShadowNode, Template, TemplateContent};

use crate::kind::ControlKind;
use crate::renderer::base_rules;

pub(crate) fn template() -> Template {
    let sheet = base_rules(ScopedStyleSheet::new(ControlKind::Button.scope_id()))
        .rule(":host", &[
            ("background", "#e0ecf1"),
            ("border", "0"),
            ("border-radius", "var(--border-radius, 0)"),
            ("color", "#333"),
            ("font-size", "var(--font-size, 16)"),
            ("padding", "12px 16px"),
        ])
        .rule(":host(:hover)", &[
            ("background", "#bfd5de"),
            ("transform", "translate3d(0px, -2px, 0px)"),
        ]);

    let mut content = TemplateContent::new();
    content.append_child(ShadowNode::Style(sheet));
    content.append_child(ShadowNode::slot());
    Template::new(content)
}
