//! gorgui Controls
//!
//! Accessible button, radio and switch primitives for the gorgui host
//! runtime.
//!
//! Features:
//! - Boolean property/attribute reflection with upgrade of pre-set values
//! - Pointer and keyboard activation unified into one action
//! - Lifecycle-managed listeners and derived ARIA attributes
//! - Shared templates cloned into an open shadow root per instance

pub mod activation;
pub mod config;
pub mod control;
pub mod lifecycle;
pub mod reflect;
pub mod renderer;

mod button;
mod kind;
mod radio;
mod registry;
mod switch;

pub use activation::{
    ActivationEffect, ActivationMachine, ActivationState, ClickBinding, ClickDecision, KeyDecision,
};
pub use config::ControlConfig;
pub use control::Control;
pub use kind::ControlKind;
pub use lifecycle::{Lifecycle, LifecycleState};
pub use reflect::{AttributeWrite, BoolProperty, Reflector, CHECKED, DISABLED};
pub use registry::{register_control, register_controls};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
