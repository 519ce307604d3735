//! # Variables Changeset
//!
//! Structural edits between two snapshots of a variables container.
//!
//! A changeset is produced by a diffing step outside this crate and consumed
//! by exactly one propagation pass. Each name belongs to at most one of
//! {added, removed, rename source, value-changed}.
//!
//! Renames are applied in order. Two variables exchanging their names in the
//! same changeset is not supported: the first rename collides with the other
//! variable, so the first variable is dropped, then the second rename moves
//! the other variable to the freed name.

use crate::error::ChangesetError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariablesChangeset {
    pub removed_variable_names: BTreeSet<String>,
    pub added_variable_names: BTreeSet<String>,
    /// (old name, new name), applied in order
    pub old_to_new_variable_names: Vec<(String, String)>,
    /// Names (after renames) whose type or value changed in place
    pub value_changed_variable_names: BTreeSet<String>,
}

impl VariablesChangeset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_added(mut self, name: impl Into<String>) -> Self {
        self.added_variable_names.insert(name.into());
        self
    }

    pub fn with_removed(mut self, name: impl Into<String>) -> Self {
        self.removed_variable_names.insert(name.into());
        self
    }

    pub fn with_renamed(mut self, old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        self.old_to_new_variable_names
            .push((old_name.into(), new_name.into()));
        self
    }

    pub fn with_value_changed(mut self, name: impl Into<String>) -> Self {
        self.value_changed_variable_names.insert(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.removed_variable_names.is_empty()
            && self.added_variable_names.is_empty()
            && self.old_to_new_variable_names.is_empty()
            && self.value_changed_variable_names.is_empty()
    }

    /// Check that no name appears in two categories of the changeset
    pub fn validate(&self) -> Result<(), ChangesetError> {
        let mut seen: HashMap<&str, &'static str> = HashMap::new();

        let categories = self
            .removed_variable_names
            .iter()
            .map(|name| (name.as_str(), "removed"))
            .chain(
                self.added_variable_names
                    .iter()
                    .map(|name| (name.as_str(), "added")),
            )
            .chain(
                self.old_to_new_variable_names
                    .iter()
                    .map(|(old_name, _)| (old_name.as_str(), "renamed")),
            )
            .chain(
                self.value_changed_variable_names
                    .iter()
                    .map(|name| (name.as_str(), "value-changed")),
            );

        for (name, category) in categories {
            if let Some(first) = seen.insert(name, category) {
                return Err(ChangesetError::ConflictingName {
                    name: name.to_string(),
                    first,
                    second: category,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_changeset() {
        let changeset = VariablesChangeset::new();
        assert!(changeset.is_empty());
        assert!(changeset.validate().is_ok());
    }

    #[test]
    fn test_valid_changeset() {
        let changeset = VariablesChangeset::new()
            .with_added("speed")
            .with_removed("old")
            .with_renamed("hp", "health")
            .with_value_changed("health");

        assert!(!changeset.is_empty());
        assert!(changeset.validate().is_ok());
    }

    #[test]
    fn test_name_in_two_categories_is_rejected() {
        let changeset = VariablesChangeset::new()
            .with_removed("hp")
            .with_value_changed("hp");

        assert_eq!(
            changeset.validate(),
            Err(ChangesetError::ConflictingName {
                name: "hp".to_string(),
                first: "removed",
                second: "value-changed",
            })
        );
    }

    #[test]
    fn test_same_rename_source_twice_is_rejected() {
        let changeset = VariablesChangeset::new()
            .with_renamed("a", "b")
            .with_renamed("a", "c");

        assert!(changeset.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let changeset: VariablesChangeset = serde_json::from_str(
            r#"{ "addedVariableNames": ["y"], "oldToNewVariableNames": [["a", "b"]] }"#,
        )
        .unwrap();

        assert_eq!(changeset, VariablesChangeset::new().with_added("y").with_renamed("a", "b"));
    }
}
