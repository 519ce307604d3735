//! # Instance Propagation
//!
//! Instances only store overrides of their object's variables. After the
//! object's variables changed, an override is kept unless its type no longer
//! matches the declared variable, in which case it is dropped and the
//! instance falls back to the declared value.
//!
//! This pass never creates overrides.

use std::ops::ControlFlow;
use tracing::{debug, instrument};
use varsync_project::{InitialInstance, InitialInstancesContainer};
use varsync_variables::{VariablesChangeset, VariablesContainer};

use crate::propagation::apply_renames;

/// Update the overrides of every instance of `object_name`.
///
/// `object_variables` are the object's declared variables, already updated
/// with the changeset.
#[instrument(skip(object_variables, instances, changeset))]
pub fn apply_changes_to_object_instances(
    object_variables: &VariablesContainer,
    instances: &mut InitialInstancesContainer,
    object_name: &str,
    changeset: &VariablesChangeset,
) {
    let flow = instances.iterate_over_instances_of(
        object_name,
        &mut |instance: &mut InitialInstance| -> ControlFlow<()> {
            let overrides = instance.variables_mut();

            for name in &changeset.removed_variable_names {
                overrides.remove(name);
            }
            for name in &changeset.added_variable_names {
                drop_override_if_type_differs(overrides, object_variables, name);
            }
            apply_renames(overrides, changeset);
            for name in &changeset.value_changed_variable_names {
                drop_override_if_type_differs(overrides, object_variables, name);
            }

            ControlFlow::Continue(())
        },
    );
    debug_assert!(flow.is_continue());
}

/// Remove the override of `name` when the object declares it with another
/// type. An override of a name the object does not declare is left alone.
fn drop_override_if_type_differs(overrides: &mut VariablesContainer, declared: &VariablesContainer, name: &str) {
    let (Some(overridden), Some(declared_variable)) = (overrides.get(name), declared.get(name)) else {
        return;
    };
    if overridden.variable_type() != declared_variable.variable_type() {
        debug!(variable = %name, "Dropping override with a stale type");
        overrides.remove(name);
    }
}
