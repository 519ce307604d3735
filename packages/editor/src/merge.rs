//! # Variable Merger
//!
//! Computes the variables a group shows to the user: the variables shared by
//! every member of the group.
//!
//! ## Merge semantics
//!
//! - The first resolvable member's container is copied as the starting point
//! - A variable missing from any later resolvable member is dropped
//! - A variable whose type differs in a member becomes `MixedTypes`
//! - A variable with the same type but another value is marked as having
//!   mixed values (the type and the first member's value are kept)
//! - Members that resolve in neither scope are ignored
//!
//! Once an entry is `MixedTypes` it stays so for the rest of the merge.

use tracing::{debug, instrument};
use varsync_project::{ObjectGroup, ObjectScope};
use varsync_variables::{VariableType, VariablesContainer};

/// Merge the variables of every resolvable member of `group`.
///
/// The result keeps the order of the first resolvable member. It is a
/// transient projection: nothing in the project references it.
#[instrument(skip_all, fields(group = %group.name, members = group.object_names().len()))]
pub fn merge_variable_containers<S>(scope: &S, group: &ObjectGroup) -> VariablesContainer
where
    S: ObjectScope + ?Sized,
{
    let mut members = group
        .object_names()
        .iter()
        .filter_map(|object_name| scope.object(object_name));

    let Some(first) = members.next() else {
        debug!("No member of the group resolves");
        return VariablesContainer::new();
    };

    let mut merged = first.variables().clone();
    for object in members {
        let variables = object.variables();
        merged = merged
            .into_iter()
            .filter_map(|(name, mut merged_variable)| {
                let Some(variable) = variables.get(&name) else {
                    debug!(variable = %name, object = %object.name, "Variable missing from member, not shared");
                    return None;
                };

                if merged_variable.variable_type() != variable.variable_type() {
                    merged_variable.cast_to(VariableType::MixedTypes);
                } else if merged_variable != *variable {
                    merged_variable.mark_as_mixed_values();
                }
                Some((name, merged_variable))
            })
            .collect();
    }

    debug!(variables = merged.len(), "Merged group variables");
    merged
}
