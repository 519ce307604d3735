//! Objects and the containers that hold them

use crate::group::ObjectGroupsContainer;
use serde::{Deserialize, Serialize};
use varsync_variables::VariablesContainer;

/// An object declaration owning its declared variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Object {
    pub name: String,

    /// Object kind, e.g. "Sprite" or "TextObject"
    #[serde(default, rename = "type")]
    pub object_type: String,

    #[serde(default)]
    pub variables: VariablesContainer,
}

impl Object {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_variables(mut self, variables: VariablesContainer) -> Self {
        self.variables = variables;
        self
    }

    pub fn variables(&self) -> &VariablesContainer {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut VariablesContainer {
        &mut self.variables
    }
}

/// Ordered objects of one scope, plus the groups declared in that scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectsContainer {
    #[serde(default)]
    objects: Vec<Object>,

    #[serde(default)]
    groups: ObjectGroupsContainer,
}

impl ObjectsContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_object_named(&self, name: &str) -> bool {
        self.objects.iter().any(|object| object.name == name)
    }

    pub fn get_object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|object| object.name == name)
    }

    pub fn get_object_mut(&mut self, name: &str) -> Option<&mut Object> {
        self.objects.iter_mut().find(|object| object.name == name)
    }

    /// Add an object at the end. An object with the same name is replaced in place.
    pub fn insert_object(&mut self, object: Object) -> &mut Object {
        let index = match self.objects.iter().position(|existing| existing.name == object.name) {
            Some(index) => {
                self.objects[index] = object;
                index
            }
            None => {
                self.objects.push(object);
                self.objects.len() - 1
            }
        };
        &mut self.objects[index]
    }

    pub fn remove_object(&mut self, name: &str) -> Option<Object> {
        let index = self.objects.iter().position(|object| object.name == name)?;
        Some(self.objects.remove(index))
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|object| object.name.as_str())
    }

    pub fn groups(&self) -> &ObjectGroupsContainer {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut ObjectGroupsContainer {
        &mut self.groups
    }
}
