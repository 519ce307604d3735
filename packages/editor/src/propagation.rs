//! # Changeset Propagation
//!
//! Replays a changeset, computed from edits to a merged container, on the
//! containers that were merged.
//!
//! ## Order of steps
//!
//! 1. Removals
//! 2. Additions (a name the container already holds is kept as is)
//! 3. Renames (when the new name is taken, the old variable is dropped)
//! 4. Value changes (replaced in place, on post-rename names)
//!
//! Renames come after additions so an added variable never overwrites a
//! renamed one, and value changes come last so they see the final names.
//!
//! Two variables exchanging their names in one changeset is not supported:
//! the first rename collides with the second variable and drops it.
//! Variables coming from the group are always appended; their position in
//! the group is not reproduced in member objects.

use tracing::{debug, instrument};
use varsync_project::{ObjectGroup, ObjectScopeMut};
use varsync_variables::{VariablesChangeset, VariablesContainer};

/// When a value-changed variable is replaced by the source's copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueChangePolicy {
    /// Always take the source value and type
    Replace,
    /// Only take the source copy when the type no longer matches
    ReplaceIfTypeDiffers,
}

/// Apply a changeset to every resolvable member of `group`.
///
/// `group_variables` is the edited merged container: added and value-changed
/// variables are copied from it.
#[instrument(skip_all, fields(group = %group.name))]
pub fn apply_changes_to_objects<S>(
    scope: &mut S,
    group_variables: &VariablesContainer,
    group: &ObjectGroup,
    changeset: &VariablesChangeset,
) where
    S: ObjectScopeMut + ?Sized,
{
    for object_name in group.object_names() {
        let Some(object) = scope.object_mut(object_name) else {
            debug!(object = %object_name, "Skipping unresolvable group member");
            continue;
        };
        apply_changes_to_container(
            object.variables_mut(),
            group_variables,
            changeset,
            ValueChangePolicy::Replace,
        );
    }
}

/// Apply removals, additions, renames and value changes to one container,
/// copying new values from `source`.
pub(crate) fn apply_changes_to_container(
    variables: &mut VariablesContainer,
    source: &VariablesContainer,
    changeset: &VariablesChangeset,
    value_change_policy: ValueChangePolicy,
) {
    for name in &changeset.removed_variable_names {
        variables.remove(name);
    }

    for name in &changeset.added_variable_names {
        if variables.has(name) {
            // Already declared here without being shared by the whole group.
            continue;
        }
        match source.get(name) {
            Some(variable) => {
                variables.push(name.as_str(), variable.clone());
            }
            None => debug!(variable = %name, "Added variable missing from source"),
        }
    }

    apply_renames(variables, changeset);

    for name in &changeset.value_changed_variable_names {
        let Some(new_variable) = source.get(name) else {
            debug!(variable = %name, "Changed variable missing from source");
            continue;
        };
        if value_change_policy == ValueChangePolicy::ReplaceIfTypeDiffers {
            match variables.get(name) {
                Some(current) if current.variable_type() != new_variable.variable_type() => {}
                _ => continue,
            }
        }

        let position = variables.position(name).unwrap_or(variables.len());
        variables.remove(name);
        variables.insert(name.as_str(), new_variable.clone(), position);
    }
}

/// Rename variables in changeset order. When the new name is already taken,
/// the old variable is removed and the existing one is kept.
pub(crate) fn apply_renames(variables: &mut VariablesContainer, changeset: &VariablesChangeset) {
    for (old_name, new_name) in &changeset.old_to_new_variable_names {
        if old_name == new_name {
            continue;
        }
        if variables.has(new_name) {
            debug!(old = %old_name, new = %new_name, "Rename target taken, dropping old variable");
            variables.remove(old_name);
        } else {
            variables.rename(old_name, new_name);
        }
    }
}
