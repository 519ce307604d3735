//! # Variant Propagation
//!
//! Variants of an events-based object each have their own copy of the child
//! objects. The default variant's child object is the source of truth: added
//! variables are copied from it, and a value change is only applied to a
//! variant whose variable has another type than the default one. Same-type
//! values customized in a variant are kept.

use tracing::{debug, instrument};
use varsync_project::EventsBasedObject;
use varsync_variables::VariablesChangeset;

use crate::instances::apply_changes_to_object_instances;
use crate::propagation::{apply_changes_to_container, ValueChangePolicy};

/// Apply a changeset, made on the default variant's child object
/// `object_name`, to the same child object in every other variant and to the
/// instances placed in those variants.
#[instrument(skip(events_based_object, changeset), fields(events_based_object = %events_based_object.name))]
pub fn apply_changes_to_variants(
    events_based_object: &mut EventsBasedObject,
    object_name: &str,
    changeset: &VariablesChangeset,
) {
    let EventsBasedObject {
        default_variant,
        variants,
        ..
    } = events_based_object;

    let Some(default_object) = default_variant.objects.get_object(object_name) else {
        debug!("Default variant has no such child object");
        return;
    };
    let default_variables = default_object.variables();

    for variant in variants.iter_mut() {
        let Some(object) = variant.objects.get_object_mut(object_name) else {
            continue;
        };
        debug!(variant = %variant.name, "Updating variant child object");

        let variables = object.variables_mut();
        apply_changes_to_container(
            variables,
            default_variables,
            changeset,
            ValueChangePolicy::ReplaceIfTypeDiffers,
        );
        apply_changes_to_object_instances(variables, &mut variant.initial_instances, object_name, changeset);
    }
}
