//! # Events-Based Objects
//!
//! A composite object is built from child objects and their placed
//! instances. Variants are alternate structural definitions of the same
//! composite object; the default variant is the reference the other
//! variants follow.

use crate::instance::InitialInstancesContainer;
use crate::object::ObjectsContainer;
use serde::{Deserialize, Serialize};

/// One structural definition of a composite object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsBasedObjectVariant {
    #[serde(default)]
    pub name: String,

    /// Child objects
    #[serde(default)]
    pub objects: ObjectsContainer,

    #[serde(default)]
    pub initial_instances: InitialInstancesContainer,
}

impl EventsBasedObjectVariant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsBasedObject {
    pub name: String,

    #[serde(default)]
    pub default_variant: EventsBasedObjectVariant,

    /// Non-default variants
    #[serde(default)]
    pub variants: Vec<EventsBasedObjectVariant>,
}

impl EventsBasedObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn default_variant(&self) -> &EventsBasedObjectVariant {
        &self.default_variant
    }

    pub fn variant(&self, name: &str) -> Option<&EventsBasedObjectVariant> {
        self.variants.iter().find(|variant| variant.name == name)
    }

    /// Add a non-default variant, replacing one with the same name
    pub fn insert_variant(&mut self, variant: EventsBasedObjectVariant) -> &mut EventsBasedObjectVariant {
        let index = match self.variants.iter().position(|existing| existing.name == variant.name) {
            Some(index) => {
                self.variants[index] = variant;
                index
            }
            None => {
                self.variants.push(variant);
                self.variants.len() - 1
            }
        };
        &mut self.variants[index]
    }
}
