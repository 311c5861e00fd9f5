//! Switch
//!
//! Toggle control with checkbox semantics; every activation flips
//! `checked`.

use gorgui_dom::{ScopedStyleSheet, ShadowNode, Template, TemplateContent};

use crate::kind::ControlKind;
use crate::renderer::base_rules;

pub(crate) fn template() -> Template {
    let sheet = base_rules(ScopedStyleSheet::new(ControlKind::Switch.scope_id()))
        .rule(":host", &[
            ("height", "42px"),
            ("width", "58px"),
            ("border", "1px solid #e0ecf1"),
            ("border-radius", "42px"),
            ("position", "relative"),
        ])
        .rule(":host:after", &[
            ("position", "absolute"),
            ("left", "2px"),
            ("top", "2px"),
            ("height", "36px"),
            ("width", "36px"),
            ("background-color", "#e0ecf1"),
            ("border-radius", "36px"),
            ("content", "''"),
            ("transition", "300ms cubic-bezier(0.18, 0.89, 0.32, 1.28)"),
        ])
        .rule(":host(:active):after", &[("width", "42px")])
        .rule(":host([checked])", &[("background-color", "#e0ecf1")])
        .rule(":host([checked]):after", &[
            ("background-color", "#bfd5de"),
            ("left", "calc(100% - 2px)"),
            ("transform", "translateX(-100%)"),
        ]);

    let mut content = TemplateContent::new();
    content.append_child(ShadowNode::Style(sheet));
    Template::new(content)
}
