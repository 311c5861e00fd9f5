//! Control registration

use gorgui_dom::{CustomElement, CustomElementError, Element, ElementDefinition, Host};

use crate::config::ControlConfig;
use crate::control::Control;
use crate::kind::ControlKind;

/// Register one control kind under `name`.
///
/// Registering a name twice is rejected by the host registry.
pub fn register_control(
    host: &mut Host,
    name: &str,
    kind: ControlKind,
    config: &ControlConfig,
) -> Result<(), CustomElementError> {
    let config = config.clone();
    let definition = ElementDefinition::new(
        kind.observed_attributes(),
        move |element: &mut Element| -> Box<dyn CustomElement> { Box::new(Control::new(kind, &config, element)) },
    );
    host.define(name, definition)?;
    tracing::debug!("Registered {:?} control as <{}>", kind, name);
    Ok(())
}

/// Register button, radio and switch under `{prefix}-{kind}`
pub fn register_controls(host: &mut Host, config: &ControlConfig) -> Result<(), CustomElementError> {
    for kind in ControlKind::ALL {
        register_control(host, &config.tag_name(kind), kind, config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all() {
        let mut host = Host::new();
        register_controls(&mut host, &ControlConfig::default()).unwrap();
        for name in ["gorgui-button", "gorgui-radio", "gorgui-switch"] {
            assert!(host.registry().is_defined(name));
        }
    }

    #[test]
    fn test_duplicate_registration_surfaces_host_error() {
        let mut host = Host::new();
        let config = ControlConfig::default();
        register_control(&mut host, "gorgui-switch", ControlKind::Switch, &config).unwrap();
        assert_eq!(
            register_control(&mut host, "gorgui-switch", ControlKind::Radio, &config),
            Err(CustomElementError::AlreadyDefined("gorgui-switch".to_string()))
        );
        // Kinds before the conflict are registered, the conflict is reported
        assert_eq!(
            register_controls(&mut host, &config),
            Err(CustomElementError::AlreadyDefined("gorgui-switch".to_string()))
        );
        assert!(host.registry().is_defined("gorgui-radio"));
    }
}
