//! Control Kinds
//!
//! Per-kind constants: registration suffix, default role, property table,
//! trigger key and activation effect.

use gorgui_a11y::AriaRole;
use gorgui_dom::Key;

use crate::activation::ActivationEffect;
use crate::reflect::{BoolProperty, CHECKED, DISABLED};

const BUTTON_PROPERTIES: &[BoolProperty] = &[DISABLED];
const CHECKABLE_PROPERTIES: &[BoolProperty] = &[CHECKED, DISABLED];

/// One of the three control primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Button,
    Radio,
    Switch,
}

impl ControlKind {
    pub const ALL: [ControlKind; 3] = [Self::Button, Self::Radio, Self::Switch];

    /// Registration suffix
    pub fn name(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Radio => "radio",
            Self::Switch => "switch",
        }
    }

    /// Role assigned on attach unless the consumer set one
    pub fn default_role(&self) -> AriaRole {
        match self {
            Self::Button => AriaRole::Button,
            Self::Radio => AriaRole::Radio,
            Self::Switch => AriaRole::Checkbox,
        }
    }

    /// Boolean logical properties of this kind
    pub fn properties(&self) -> &'static [BoolProperty] {
        match self {
            Self::Button => BUTTON_PROPERTIES,
            Self::Radio | Self::Switch => CHECKABLE_PROPERTIES,
        }
    }

    pub fn observed_attributes(&self) -> &'static [&'static str] {
        match self {
            Self::Button => &["disabled"],
            Self::Radio | Self::Switch => &["checked", "disabled"],
        }
    }

    /// Key whose release activates the control
    pub fn trigger_key(&self) -> Key {
        match self {
            Self::Button => Key::Enter,
            Self::Radio | Self::Switch => Key::Space,
        }
    }

    pub fn effect(&self) -> ActivationEffect {
        match self {
            Self::Button => ActivationEffect::Momentary,
            Self::Radio | Self::Switch => ActivationEffect::Toggle,
        }
    }

    /// Whether the kind carries a persistent `checked` state
    pub fn is_checkable(&self) -> bool {
        !matches!(self, Self::Button)
    }

    /// Style scope of the kind's template
    pub(crate) fn scope_id(&self) -> u32 {
        match self {
            Self::Button => 1,
            Self::Radio => 2,
            Self::Switch => 3,
        }
    }
}
