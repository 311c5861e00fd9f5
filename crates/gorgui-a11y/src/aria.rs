//! ARIA Support
//!
//! ARIA roles, states, and properties.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::A11yError;

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Widget roles
    Button,
    Checkbox,
    Link,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    Radio,
    RadioGroup,
    Slider,
    Switch,
    Tab,
    TextBox,

    // Document structure
    Group,
    Img,
    None,
    Presentation,
    Toolbar,

    Generic,
}

impl AriaRole {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "link" => Self::Link,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "option" => Self::Option,
            "radio" => Self::Radio,
            "radiogroup" => Self::RadioGroup,
            "slider" => Self::Slider,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "textbox" => Self::TextBox,
            "group" => Self::Group,
            "img" => Self::Img,
            "none" => Self::None,
            "presentation" => Self::Presentation,
            "toolbar" => Self::Toolbar,
            "generic" => Self::Generic,
            _ => return None,
        })
    }

    /// Attribute value for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Link => "link",
            Self::MenuItem => "menuitem",
            Self::MenuItemCheckbox => "menuitemcheckbox",
            Self::MenuItemRadio => "menuitemradio",
            Self::Option => "option",
            Self::Radio => "radio",
            Self::RadioGroup => "radiogroup",
            Self::Slider => "slider",
            Self::Switch => "switch",
            Self::Tab => "tab",
            Self::TextBox => "textbox",
            Self::Group => "group",
            Self::Img => "img",
            Self::None => "none",
            Self::Presentation => "presentation",
            Self::Toolbar => "toolbar",
            Self::Generic => "generic",
        }
    }

    /// Check if role is widget
    pub fn is_widget(&self) -> bool {
        matches!(self,
            Self::Button | Self::Checkbox | Self::Link | Self::MenuItem |
            Self::MenuItemCheckbox | Self::MenuItemRadio | Self::Option |
            Self::Radio | Self::Slider | Self::Switch | Self::Tab | Self::TextBox
        )
    }

    /// Whether the role exposes `aria-checked`
    pub fn supports_checked(&self) -> bool {
        matches!(self,
            Self::Checkbox | Self::Radio | Self::Switch |
            Self::MenuItemCheckbox | Self::MenuItemRadio
        )
    }
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AriaRole {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| A11yError::InvalidRole(s.to_string()))
    }
}

/// Literal string form of a boolean ARIA state
#[inline]
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// ARIA state/property
#[derive(Debug, Clone, PartialEq)]
pub enum AriaState {
    Checked(Option<bool>), // true, false, mixed (None)
    Disabled(bool),
    Expanded(bool),
    Hidden(bool),
    Pressed(Option<bool>),
    Selected(bool),
    Label(String),
    LabelledBy(Vec<String>),
}

impl AriaState {
    /// Parse an `aria-<name>` value.
    ///
    /// Returns `Ok(None)` for names this module does not model.
    pub fn parse(name: &str, value: &str) -> Result<Option<Self>, A11yError> {
        let invalid = || A11yError::InvalidState {
            name: name.to_string(),
            value: value.to_string(),
        };

        Ok(Some(match name {
            "checked" => Self::Checked(parse_tristate(value).ok_or_else(invalid)?),
            "pressed" => Self::Pressed(parse_tristate(value).ok_or_else(invalid)?),
            "disabled" => Self::Disabled(parse_bool(value).ok_or_else(invalid)?),
            "expanded" => Self::Expanded(parse_bool(value).ok_or_else(invalid)?),
            "hidden" => Self::Hidden(parse_bool(value).ok_or_else(invalid)?),
            "selected" => Self::Selected(parse_bool(value).ok_or_else(invalid)?),
            "label" => Self::Label(value.to_string()),
            "labelledby" => Self::LabelledBy(value.split_whitespace().map(String::from).collect()),
            _ => return Ok(None),
        }))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_tristate(value: &str) -> Option<Option<bool>> {
    match value {
        "mixed" => Some(None),
        other => parse_bool(other).map(Some),
    }
}

/// ARIA attributes on an element
#[derive(Debug, Clone, Default)]
pub struct AriaAttributes {
    pub role: Option<AriaRole>,
    pub states: HashMap<String, AriaState>,
}

impl AriaAttributes {
    pub fn new() -> Self { Self::default() }

    /// Set role
    pub fn set_role(&mut self, role: AriaRole) {
        self.role = Some(role);
    }

    /// Parse from HTML attributes, skipping malformed values
    pub fn from_attributes<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut aria = Self::new();

        for (key, value) in attrs {
            if key == "role" {
                aria.role = AriaRole::parse(value);
            } else if let Some(name) = key.strip_prefix("aria-") {
                if let Ok(Some(state)) = AriaState::parse(name, value) {
                    aria.states.insert(name.to_string(), state);
                }
            }
        }

        aria
    }

    /// `aria-checked`, with `Some(None)` meaning "mixed"
    pub fn checked(&self) -> Option<Option<bool>> {
        match self.states.get("checked") {
            Some(AriaState::Checked(c)) => Some(*c),
            _ => None,
        }
    }

    /// `aria-disabled`
    pub fn disabled(&self) -> Option<bool> {
        match self.states.get("disabled") {
            Some(AriaState::Disabled(d)) => Some(*d),
            _ => None,
        }
    }

    /// Get label
    pub fn label(&self) -> Option<&str> {
        match self.states.get("label") {
            Some(AriaState::Label(l)) => Some(l.as_str()),
            _ => None,
        }
    }
}
