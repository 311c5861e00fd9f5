//! gorgui Accessibility
//!
//! Accessibility vocabulary shared by the gorgui controls.
//!
//! Features:
//! - ARIA roles, states, properties
//! - Tab index parsing
//! - Focus management

pub mod aria;
pub mod focus;

pub use aria::{AriaRole, AriaState, AriaAttributes, aria_bool};
pub use focus::{FocusManager, TabIndex};

/// Accessibility error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum A11yError {
    #[error("Invalid ARIA role: {0}")]
    InvalidRole(String),

    #[error("Invalid value {value:?} for aria-{name}")]
    InvalidState { name: String, value: String },
}
