//! Example: one of each control driven by pointer and keyboard input

use gorgui_controls::{register_controls, ControlConfig, ControlKind};
use gorgui_dom::{EventType, Host, Key, Modifiers};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ControlConfig::default();
    let mut host = Host::new();
    register_controls(&mut host, &config)?;

    let doc = host.create_document();
    let root = host.document_root(doc)?;
    let form = host.create_element(doc, "div")?;
    host.append_child(root, form)?;

    let mut controls = Vec::new();
    for kind in ControlKind::ALL {
        let id = host.create_element(doc, &config.tag_name(kind))?;
        host.append_child(form, id)?;
        controls.push((kind, id));
    }

    // Change events bubble to the container
    host.add_event_listener(form, EventType::Change, |event| {
        println!("change from {:?}: checked = {:?}", event.target, event.checked());
    })?;

    for &(kind, id) in &controls {
        host.click(id)?;
        host.key_up(id, kind.trigger_key(), Modifiers::NONE)?;
        println!(
            "<{}> role={:?} checked={:?} aria={:?}",
            config.tag_name(kind),
            host.get_attribute(id, "role")?,
            host.get_property(id, "checked")?,
            host.accessibility(id)?.checked(),
        );
    }

    let (_, switch) = controls[2];
    host.set_property(switch, "disabled", true)?;
    host.key_up(switch, Key::Space, Modifiers::NONE)?;
    println!("disabled switch tabindex = {:?}", host.get_attribute(switch, "tabindex")?);

    println!("gorgui controls v{}", gorgui_controls::VERSION);
    Ok(())
}
