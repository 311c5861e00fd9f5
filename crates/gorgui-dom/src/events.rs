//! DOM Events
//!
//! Pointer, keyboard and change events delivered to elements.

use serde::{Deserialize, Serialize};

use crate::NodeId;

/// Event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyUp,
    KeyDown,
    Change,
    Focus,
    Blur,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::KeyUp => "keyup",
            Self::KeyDown => "keydown",
            Self::Change => "change",
            Self::Focus => "focus",
            Self::Blur => "blur",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "click" => Self::Click,
            "keyup" => Self::KeyUp,
            "keydown" => Self::KeyDown,
            "change" => Self::Change,
            "focus" => Self::Focus,
            "blur" => Self::Blur,
            _ => return None,
        })
    }

    /// Check if this event type can bubble
    pub fn bubbles(&self) -> bool {
        !matches!(self, Self::Focus | Self::Blur)
    }
}

/// Keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    Other(u32),
}

impl Key {
    /// Convert from a legacy key code
    pub fn from_key_code(code: u32) -> Self {
        match code {
            13 => Self::Enter,
            32 => Self::Space,
            27 => Self::Escape,
            9 => Self::Tab,
            other => Self::Other(other),
        }
    }

    /// Legacy key code
    pub fn key_code(&self) -> u32 {
        match self {
            Self::Enter => 13,
            Self::Space => 32,
            Self::Escape => 27,
            Self::Tab => 9,
            Self::Other(code) => *code,
        }
    }
}

/// Modifier keys held during an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { alt: false, ctrl: false, shift: false, meta: false };
    pub const ALT: Modifiers = Modifiers { alt: true, ctrl: false, shift: false, meta: false };
}

/// Where a click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventOrigin {
    /// Physical pointer input
    #[default]
    Pointer,
    /// Synthesized from a keyboard activation
    Keyboard,
    /// Programmatic `click()`
    Script,
}

/// Payload of a `change` event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDetail {
    pub checked: bool,
}

/// DOM event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub origin: EventOrigin,
    pub key: Option<Key>,
    pub modifiers: Modifiers,
    pub detail: Option<ChangeDetail>,
    pub target: Option<NodeId>,
    pub current_target: Option<NodeId>,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    /// Create a bare event of the given type
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            origin: EventOrigin::Script,
            key: None,
            modifiers: Modifiers::NONE,
            detail: None,
            target: None,
            current_target: None,
            bubbles: event_type.bubbles(),
            cancelable: false,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create click event
    pub fn click(origin: EventOrigin) -> Self {
        Self {
            origin,
            cancelable: true,
            ..Self::new(EventType::Click)
        }
    }

    /// Create keyup event
    pub fn key_up(key: Key, modifiers: Modifiers) -> Self {
        Self {
            origin: EventOrigin::Keyboard,
            key: Some(key),
            modifiers,
            cancelable: true,
            ..Self::new(EventType::KeyUp)
        }
    }

    /// Create change event carrying the new checked state
    pub fn change(checked: bool) -> Self {
        Self {
            detail: Some(ChangeDetail { checked }),
            ..Self::new(EventType::Change)
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Checked state carried by a change event
    pub fn checked(&self) -> Option<bool> {
        self.detail.map(|d| d.checked)
    }
}
