//! Activation State Machine
//!
//! Turns pointer clicks and qualifying key releases into a single
//! "activate" action, gated by the disabled state.

use gorgui_dom::{Event, EventOrigin, Key};
use serde::{Deserialize, Serialize};

/// Activation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationState {
    #[default]
    Idle,
    Disabled,
}

/// What an activation does to the control's own state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationEffect {
    /// No persisted state; consumers react to the click itself
    Momentary,
    /// Flip `checked` and emit a change event
    Toggle,
}

/// How pointer clicks are honored across one attach cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickBinding {
    /// Every pointer click activates
    #[default]
    Persistent,
    /// Only the first pointer click after each attach activates.
    /// Keyboard activation is never limited.
    Once,
}

/// Outcome of a key release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDecision {
    /// Not ours: wrong key or a modifier is held
    PassThrough,
    /// Qualifying key while disabled; default suppressed, nothing else
    Swallow,
    /// Default suppressed; synthesize a click
    Activate,
}

/// Outcome of a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDecision {
    Ignore,
    Activate,
}

#[derive(Debug, Clone)]
pub struct ActivationMachine {
    state: ActivationState,
    effect: ActivationEffect,
    trigger: Key,
    click_binding: ClickBinding,
    /// A pointer click already activated during this attach cycle
    pointer_spent: bool,
}

impl ActivationMachine {
    pub fn new(effect: ActivationEffect, trigger: Key, click_binding: ClickBinding) -> Self {
        Self {
            state: ActivationState::Idle,
            effect,
            trigger,
            click_binding,
            pointer_spent: false,
        }
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn effect(&self) -> ActivationEffect {
        self.effect
    }

    pub fn is_disabled(&self) -> bool {
        self.state == ActivationState::Disabled
    }

    /// Follow the `disabled` property; returns true if the state changed
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        let next = if disabled { ActivationState::Disabled } else { ActivationState::Idle };
        let changed = self.state != next;
        self.state = next;
        changed
    }

    /// Start a new attach cycle
    pub fn rearm(&mut self) {
        self.pointer_spent = false;
    }

    /// Classify a key release. Suppresses the default action of every
    /// qualifying key, disabled or not.
    pub fn on_key_up(&mut self, event: &mut Event) -> KeyDecision {
        if event.modifiers.alt || event.key != Some(self.trigger) {
            return KeyDecision::PassThrough;
        }
        event.prevent_default();
        if self.is_disabled() {
            KeyDecision::Swallow
        } else {
            KeyDecision::Activate
        }
    }

    /// Classify a click
    pub fn on_click(&mut self, event: &mut Event) -> ClickDecision {
        if self.is_disabled() {
            event.prevent_default();
            return ClickDecision::Ignore;
        }
        if self.click_binding == ClickBinding::Once && event.origin != EventOrigin::Keyboard {
            if self.pointer_spent {
                return ClickDecision::Ignore;
            }
            self.pointer_spent = true;
        }
        ClickDecision::Activate
    }

    /// New `checked` value after an activation; None for momentary controls
    pub fn next_checked(&self, checked: bool) -> Option<bool> {
        match self.effect {
            ActivationEffect::Momentary => None,
            ActivationEffect::Toggle => Some(!checked),
        }
    }
}
