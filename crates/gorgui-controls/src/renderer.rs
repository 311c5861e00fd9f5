//! Encapsulated Renderer
//!
//! One template per control kind, built on first use and cloned into each
//! instance's shadow root. Accessibility attributes go on the host element;
//! the shadow tree only carries presentation.

use std::sync::OnceLock;

use gorgui_dom::{DomError, Element, ScopedStyleSheet, ShadowRootInit, ShadowRootMode, Template};

use crate::kind::ControlKind;
use crate::{button, radio, switch};

static BUTTON_TEMPLATE: OnceLock<Template> = OnceLock::new();
static RADIO_TEMPLATE: OnceLock<Template> = OnceLock::new();
static SWITCH_TEMPLATE: OnceLock<Template> = OnceLock::new();

/// Shared template of a control kind
pub fn template(kind: ControlKind) -> &'static Template {
    match kind {
        ControlKind::Button => BUTTON_TEMPLATE.get_or_init(button::template),
        ControlKind::Radio => RADIO_TEMPLATE.get_or_init(radio::template),
        ControlKind::Switch => SWITCH_TEMPLATE.get_or_init(switch::template),
    }
}

/// Attach an open shadow root holding a fresh copy of the kind's template
pub fn render(kind: ControlKind, element: &mut Element) -> Result<(), DomError> {
    let shadow = element.attach_shadow(ShadowRootInit {
        mode: ShadowRootMode::Open,
        delegates_focus: false,
    })?;
    shadow.append_fragment(template(kind).clone_content());
    Ok(())
}

/// Rules every kind shares
pub(crate) fn base_rules(sheet: ScopedStyleSheet) -> ScopedStyleSheet {
    sheet
        .rule(":host", &[
            ("box-sizing", "border-box"),
            ("cursor", "pointer"),
            ("outline", "none"),
            ("user-select", "none"),
            ("display", "inline-flex"),
            ("transition", "transform 150ms ease-out, background 150ms ease-out, box-shadow 150ms ease-out"),
        ])
        .rule(":host(:active)", &[("transform", "translate3d(0, 0, 0)")])
        .rule(":host(:focus)", &[("box-shadow", "#e0ecf1 0px 1px 9px 2px")])
        .rule(":host([disabled])", &[
            ("cursor", "not-allowed"),
            ("filter", "grayscale(1)"),
            ("opacity", "0.6"),
        ])
}
