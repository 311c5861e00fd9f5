//! State Reflector
//!
//! Boolean logical properties mirrored by attribute presence. Each property
//! is a row of a small table; coercion, attribute application and reads all
//! go through the row, so every control kind shares one definition of the
//! property/attribute consistency rule.

use gorgui_dom::{Element, PropertyValue};

/// A boolean property reflected as the presence of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolProperty {
    pub name: &'static str,
    pub attribute: &'static str,
}

pub const CHECKED: BoolProperty = BoolProperty::new("checked");
pub const DISABLED: BoolProperty = BoolProperty::new("disabled");

/// Attribute mutation that realises a property write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeWrite {
    /// Ensure the attribute is present (value irrelevant)
    Set(&'static str),
    /// Ensure the attribute is absent
    Remove(&'static str),
}

impl AttributeWrite {
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Set(name) | Self::Remove(name) => name,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

impl BoolProperty {
    /// Property whose attribute shares its name
    pub const fn new(name: &'static str) -> Self {
        Self { name, attribute: name }
    }

    /// Total coercion of any assigned value
    pub fn coerce(&self, value: &PropertyValue) -> bool {
        value.to_boolean()
    }

    /// Attribute mutation for a coerced value
    pub fn apply(&self, value: bool) -> AttributeWrite {
        if value {
            AttributeWrite::Set(self.attribute)
        } else {
            AttributeWrite::Remove(self.attribute)
        }
    }

    /// Current value: attribute presence
    pub fn read(&self, element: &Element) -> bool {
        element.has_attribute(self.attribute)
    }

    /// Capture and delete an own property that shadows this accessor
    pub fn take_shadowing(&self, element: &mut Element) -> Option<bool> {
        element.take_own_property(self.name).map(|value| self.coerce(&value))
    }
}

/// Property table of one control kind
#[derive(Debug, Clone, Copy)]
pub struct Reflector {
    properties: &'static [BoolProperty],
}

impl Reflector {
    pub const fn new(properties: &'static [BoolProperty]) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &'static [BoolProperty] {
        self.properties
    }

    pub fn find(&self, name: &str) -> Option<&'static BoolProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Attribute mutation for assigning `value` to `name`; None if the name is not in the table
    pub fn write(&self, name: &str, value: &PropertyValue) -> Option<AttributeWrite> {
        self.find(name).map(|p| p.apply(p.coerce(value)))
    }

    pub fn read(&self, element: &Element, name: &str) -> Option<bool> {
        self.find(name).map(|p| p.read(element))
    }

    /// Values assigned before the accessors existed, removed from the
    /// element and coerced, in table order
    pub fn take_pending(&self, element: &mut Element) -> Vec<(BoolProperty, bool)> {
        self.properties
            .iter()
            .filter_map(|p| p.take_shadowing(element).map(|value| (*p, value)))
            .collect()
    }

    /// No own property shadows an accessor, so property reads and attribute
    /// presence agree
    pub fn is_consistent(&self, element: &Element) -> bool {
        self.properties.iter().all(|p| !element.has_own_property(p.name))
    }
}
