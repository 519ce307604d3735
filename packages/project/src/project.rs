//! # Project
//!
//! Root of the model: global objects, layouts and events-based objects.
//! Projects are loaded from and saved to JSON files.

use crate::error::ProjectError;
use crate::events_based_object::EventsBasedObject;
use crate::instance::InitialInstancesContainer;
use crate::object::ObjectsContainer;
use crate::scope::{ObjectsContainersList, ObjectsContainersListMut};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// A scene: local objects and the instances placed in it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub name: String,

    #[serde(default)]
    pub objects: ObjectsContainer,

    #[serde(default)]
    pub initial_instances: InitialInstancesContainer,
}

impl Layout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub name: String,

    /// Global objects, visible from every layout
    #[serde(default)]
    pub objects: ObjectsContainer,

    #[serde(default)]
    pub layouts: Vec<Layout>,

    #[serde(default)]
    pub events_based_objects: Vec<EventsBasedObject>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_json(source: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, ProjectError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Load a project from a JSON file
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let source = std::fs::read_to_string(path)?;
        let project = Self::from_json(&source)?;
        info!(
            path = %path.display(),
            layouts = project.layouts.len(),
            global_objects = project.objects.objects().len(),
            "Loaded project"
        );
        Ok(project)
    }

    pub fn save(&self, path: &Path, pretty: bool) -> Result<(), ProjectError> {
        std::fs::write(path, self.to_json(pretty)?)?;
        debug!(path = %path.display(), "Saved project");
        Ok(())
    }

    pub fn layout(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|layout| layout.name == name)
    }

    pub fn layout_mut(&mut self, name: &str) -> Option<&mut Layout> {
        self.layouts.iter_mut().find(|layout| layout.name == name)
    }

    pub fn events_based_object(&self, name: &str) -> Option<&EventsBasedObject> {
        self.events_based_objects
            .iter()
            .find(|object| object.name == name)
    }

    pub fn events_based_object_mut(&mut self, name: &str) -> Option<&mut EventsBasedObject> {
        self.events_based_objects
            .iter_mut()
            .find(|object| object.name == name)
    }

    /// Objects visible from a layout: its own, then the global ones
    pub fn layout_scope(&self, layout_name: &str) -> Option<ObjectsContainersList<'_>> {
        let layout = self.layout(layout_name)?;
        Some(ObjectsContainersList::new(&self.objects, &layout.objects))
    }

    /// Exclusive access to a layout's objects (with the global fallback) and
    /// to its instances
    pub fn layout_scope_mut(
        &mut self,
        layout_name: &str,
    ) -> Option<(ObjectsContainersListMut<'_>, &mut InitialInstancesContainer)> {
        let Project { objects, layouts, .. } = self;
        let layout = layouts.iter_mut().find(|layout| layout.name == layout_name)?;
        Some((
            ObjectsContainersListMut::new(objects, &mut layout.objects),
            &mut layout.initial_instances,
        ))
    }
}
