//! # Edit Sessions
//!
//! Coordinates a full resynchronization: Merge → (user edits) → Propagate
//!
//! A [`GroupVariablesSession`] snapshots a group's merged variables when it
//! is opened. When the edits are committed, the changeset is replayed on the
//! member objects, then the instances of those objects are pruned in every
//! layout where they can be placed.
//!
//! Sessions report caller mistakes (unknown layout, group or object, invalid
//! changeset). The passes they run never fail.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use varsync_project::{Layout, ObjectGroup, ObjectScope, Project};
use varsync_variables::{VariablesChangeset, VariablesContainer};

use crate::errors::EditorError;
use crate::fill::fill_any_variable_between_objects;
use crate::instances::apply_changes_to_object_instances;
use crate::merge::merge_variable_containers;
use crate::propagation::apply_changes_to_objects;
use crate::variants::apply_changes_to_variants;

/// Where a group or an object is declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeLocation {
    /// Project-wide objects and groups
    Global,

    /// Objects and groups of a layout, with the global scope as fallback
    Layout(String),
}

impl ScopeLocation {
    pub fn layout(name: impl Into<String>) -> Self {
        ScopeLocation::Layout(name.into())
    }
}

/// What a propagation touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropagationReport {
    /// Objects whose declared variables were updated
    pub objects: usize,

    /// Layouts or variants whose instances were visited
    pub instance_containers: usize,

    /// Instances of the updated objects
    pub instances: usize,
}

impl PropagationReport {
    fn merge(&mut self, other: PropagationReport) {
        self.objects += other.objects;
        self.instance_containers += other.instance_containers;
        self.instances += other.instances;
    }
}

/// Editing state of one group's variables
#[derive(Debug, Clone)]
pub struct GroupVariablesSession {
    location: ScopeLocation,
    group: ObjectGroup,
    merged: VariablesContainer,
}

impl GroupVariablesSession {
    /// Resolve the group and compute its merged variables
    #[instrument(skip(project))]
    pub fn open(project: &Project, location: ScopeLocation, group_name: &str) -> Result<Self, EditorError> {
        let (group, merged) = match &location {
            ScopeLocation::Global => {
                let group = project
                    .objects
                    .groups()
                    .get(group_name)
                    .ok_or_else(|| EditorError::GroupNotFound(group_name.to_string()))?;
                (group.clone(), merge_variable_containers(&project.objects, group))
            }
            ScopeLocation::Layout(layout_name) => {
                let scope = project
                    .layout_scope(layout_name)
                    .ok_or_else(|| EditorError::LayoutNotFound(layout_name.clone()))?;
                let group = scope
                    .group(group_name)
                    .ok_or_else(|| EditorError::GroupNotFound(group_name.to_string()))?;
                (group.clone(), merge_variable_containers(&scope, group))
            }
        };

        info!(variables = merged.len(), "Opened group variables");
        Ok(Self {
            location,
            group,
            merged,
        })
    }

    pub fn location(&self) -> &ScopeLocation {
        &self.location
    }

    pub fn group(&self) -> &ObjectGroup {
        &self.group
    }

    /// The merged container as it was when the session was opened (or last
    /// refilled)
    pub fn merged(&self) -> &VariablesContainer {
        &self.merged
    }

    /// Give every member the variables of the others, then recompute the
    /// merged view
    pub fn fill_missing_variables(&mut self, project: &mut Project) -> Result<(), EditorError> {
        match &self.location {
            ScopeLocation::Global => {
                fill_any_variable_between_objects(&mut project.objects, &self.group);
                self.merged = merge_variable_containers(&project.objects, &self.group);
            }
            ScopeLocation::Layout(layout_name) => {
                let (mut scope, _) = project
                    .layout_scope_mut(layout_name)
                    .ok_or_else(|| EditorError::LayoutNotFound(layout_name.clone()))?;
                fill_any_variable_between_objects(&mut scope, &self.group);
                self.merged = merge_variable_containers(&scope.as_list(), &self.group);
            }
        }
        Ok(())
    }

    /// Replay `changeset` on the members and their instances.
    ///
    /// `edited` is the merged container after the user's edits; added and
    /// value-changed variables are copied from it.
    #[instrument(skip_all, fields(group = %self.group.name))]
    pub fn commit(
        self,
        project: &mut Project,
        edited: &VariablesContainer,
        changeset: &VariablesChangeset,
    ) -> Result<PropagationReport, EditorError> {
        changeset.validate()?;

        let mut report = PropagationReport::default();
        let members: Vec<(String, ScopeLocation)> = match &self.location {
            ScopeLocation::Global => {
                apply_changes_to_objects(&mut project.objects, edited, &self.group, changeset);
                self.group
                    .object_names()
                    .iter()
                    .filter(|name| project.objects.has_object_named(name))
                    .map(|name| (name.clone(), ScopeLocation::Global))
                    .collect()
            }
            ScopeLocation::Layout(layout_name) => {
                let (mut scope, _) = project
                    .layout_scope_mut(layout_name)
                    .ok_or_else(|| EditorError::LayoutNotFound(layout_name.clone()))?;
                apply_changes_to_objects(&mut scope, edited, &self.group, changeset);
                self.group
                    .object_names()
                    .iter()
                    .filter_map(|name| {
                        if scope.has_local_object(name) {
                            Some((name.clone(), self.location.clone()))
                        } else if scope.has_global_object(name) {
                            Some((name.clone(), ScopeLocation::Global))
                        } else {
                            None
                        }
                    })
                    .collect()
            }
        };

        for (object_name, location) in &members {
            report.objects += 1;
            report.merge(propagate_to_instances(project, location, object_name, changeset)?);
        }

        info!(
            objects = report.objects,
            instance_containers = report.instance_containers,
            instances = report.instances,
            "Committed group variables"
        );
        Ok(report)
    }
}

/// After an object's own variables were edited, prune the overrides of its
/// instances in every layout where it can be placed.
#[instrument(skip(project, changeset))]
pub fn propagate_object_variable_changes(
    project: &mut Project,
    location: &ScopeLocation,
    object_name: &str,
    changeset: &VariablesChangeset,
) -> Result<PropagationReport, EditorError> {
    changeset.validate()?;
    let report = propagate_to_instances(project, location, object_name, changeset)?;
    info!(instances = report.instances, "Propagated object variables");
    Ok(report)
}

/// After a child object of an events-based object's default variant was
/// edited, prune the default variant's instances, then update every other
/// variant.
#[instrument(skip(project, changeset))]
pub fn propagate_child_object_variable_changes(
    project: &mut Project,
    events_based_object_name: &str,
    object_name: &str,
    changeset: &VariablesChangeset,
) -> Result<PropagationReport, EditorError> {
    changeset.validate()?;

    let events_based_object = project
        .events_based_object_mut(events_based_object_name)
        .ok_or_else(|| EditorError::EventsBasedObjectNotFound(events_based_object_name.to_string()))?;

    let default_variant = &mut events_based_object.default_variant;
    let object = default_variant
        .objects
        .get_object(object_name)
        .ok_or_else(|| EditorError::ObjectNotFound(object_name.to_string()))?;
    apply_changes_to_object_instances(
        object.variables(),
        &mut default_variant.initial_instances,
        object_name,
        changeset,
    );

    let mut report = PropagationReport {
        objects: 0,
        instance_containers: 1,
        instances: default_variant.initial_instances.count_of(object_name),
    };

    apply_changes_to_variants(events_based_object, object_name, changeset);
    for variant in &events_based_object.variants {
        if variant.objects.has_object_named(object_name) {
            report.objects += 1;
            report.instance_containers += 1;
            report.instances += variant.initial_instances.count_of(object_name);
        }
    }

    info!(variants = report.objects, "Propagated child object variables");
    Ok(report)
}

/// Run the instance pass for an object on every instance container where it
/// can be placed. A layout object is only placed in its layout; a global
/// object in every layout that does not declare an object with the same name.
fn propagate_to_instances(
    project: &mut Project,
    location: &ScopeLocation,
    object_name: &str,
    changeset: &VariablesChangeset,
) -> Result<PropagationReport, EditorError> {
    let mut report = PropagationReport::default();

    match location {
        ScopeLocation::Layout(layout_name) => {
            let Layout {
                objects,
                initial_instances,
                ..
            } = project
                .layout_mut(layout_name)
                .ok_or_else(|| EditorError::LayoutNotFound(layout_name.clone()))?;
            let object = objects
                .get_object(object_name)
                .ok_or_else(|| EditorError::ObjectNotFound(object_name.to_string()))?;

            apply_changes_to_object_instances(object.variables(), initial_instances, object_name, changeset);
            report.instance_containers += 1;
            report.instances += initial_instances.count_of(object_name);
        }
        ScopeLocation::Global => {
            let Project { objects, layouts, .. } = project;
            let object = objects
                .get_object(object_name)
                .ok_or_else(|| EditorError::ObjectNotFound(object_name.to_string()))?;

            for layout in layouts.iter_mut() {
                if layout.objects.has_object_named(object_name) {
                    debug!(layout = %layout.name, "Global object shadowed by a layout object");
                    continue;
                }
                apply_changes_to_object_instances(
                    object.variables(),
                    &mut layout.initial_instances,
                    object_name,
                    changeset,
                );
                report.instance_containers += 1;
                report.instances += layout.initial_instances.count_of(object_name);
            }
        }
    }

    Ok(report)
}
