//! Radio
//!
//! Toggle control triggered by Space or a click. Pointer clicks follow the
//! configured [`ClickBinding`](crate::ClickBinding).

use gorgui_dom::{ScopedStyleSheet, ShadowNode, Template, TemplateContent};

use crate::kind::ControlKind;
use crate::renderer::base_rules;

pub(crate) fn template() -> Template {
    let sheet = base_rules(ScopedStyleSheet::new(ControlKind::Radio.scope_id()))
        .rule(":host", &[
            ("height", "24px"),
            ("width", "24px"),
            ("border", "2px solid #e0ecf1"),
            ("border-radius", "50%"),
            ("position", "relative"),
        ])
        .rule(":host([checked])", &[("background", "#e0ecf1")])
        .rule(":host:after", &[
            ("content", "\"\""),
            ("position", "absolute"),
            ("top", "4px"),
            ("left", "4px"),
            ("background", "#bfd5de"),
            ("border-radius", "50%"),
            ("padding", "6px"),
            ("transform", "scale3d(0, 0, 0)"),
        ])
        .rule(":host([checked]):after", &[("transform", "scale3d(1, 1, 1)")]);

    let mut content = TemplateContent::new();
    content.append_child(ShadowNode::Style(sheet));
    Template::new(content)
}
