//! Control configuration

use serde::{Deserialize, Serialize};

use crate::activation::ClickBinding;
use crate::kind::ControlKind;

/// Registration and behavior options for the controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Tag names are `{tag_prefix}-{kind}`
    pub tag_prefix: String,
    /// Pointer click binding of radio controls
    pub radio_click: ClickBinding,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            tag_prefix: "gorgui".to_string(),
            radio_click: ClickBinding::Persistent,
        }
    }
}

impl ControlConfig {
    /// Registration name of a control kind
    pub fn tag_name(&self, kind: ControlKind) -> String {
        format!("{}-{}", self.tag_prefix, kind.name())
    }

    /// Click binding for a control kind; only radios are configurable
    pub fn click_binding(&self, kind: ControlKind) -> ClickBinding {
        match kind {
            ControlKind::Radio => self.radio_click,
            ControlKind::Button | ControlKind::Switch => ClickBinding::Persistent,
        }
    }
}
