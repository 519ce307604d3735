//! # Cross-Object Filler
//!
//! Gives every member of a group the variables the other members have, so
//! that the group's merged view shows all of them.
//!
//! Variables are copied, appended at the end of the destination, and only
//! when the destination does not already hold the name. Filling twice is the
//! same as filling once.

use tracing::{debug, instrument};
use varsync_project::{ObjectGroup, ObjectScopeMut};
use varsync_variables::VariablesContainer;

/// Copy every variable of every resolvable member into each other resolvable
/// member that lacks it.
#[instrument(skip_all, fields(group = %group.name))]
pub fn fill_any_variable_between_objects<S>(scope: &mut S, group: &ObjectGroup)
where
    S: ObjectScopeMut + ?Sized,
{
    let object_names = group.object_names();
    for source_name in object_names {
        let Some(source) = scope.object(source_name) else {
            continue;
        };
        let source_variables = source.variables().clone();

        for destination_name in object_names {
            if destination_name == source_name {
                continue;
            }
            let Some(destination) = scope.object_mut(destination_name) else {
                continue;
            };
            copy_missing_variables(&source_variables, destination.variables_mut(), destination_name);
        }
    }
}

/// Give every resolvable member a copy of each variable of `group_variables`
/// it lacks.
///
/// Used when objects join a group: `group_variables` is the group's merged
/// container captured before the new members were added.
#[instrument(skip_all, fields(group = %group.name, variables = group_variables.len()))]
pub fn fill_missing_group_variables_to_objects<S>(
    scope: &mut S,
    group: &ObjectGroup,
    group_variables: &VariablesContainer,
) where
    S: ObjectScopeMut + ?Sized,
{
    for object_name in group.object_names() {
        let Some(object) = scope.object_mut(object_name) else {
            continue;
        };
        copy_missing_variables(group_variables, object.variables_mut(), object_name);
    }
}

fn copy_missing_variables(source: &VariablesContainer, destination: &mut VariablesContainer, destination_name: &str) {
    for (name, variable) in source.iter() {
        if !destination.has(name) {
            debug!(variable = %name, object = %destination_name, "Copying missing variable");
            destination.push(name, variable.clone());
        }
    }
}
