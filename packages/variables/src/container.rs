//! # Variables Container
//!
//! Ordered mapping from name to [`Variable`].
//!
//! Names are unique within a container. Position is meaningful for display
//! order but never for identity: lookups are always by name.

use crate::variable::Variable;
use serde::{Deserialize, Serialize};

/// A variable together with its name, as stored in a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedVariable {
    pub name: String,

    #[serde(flatten)]
    pub variable: Variable,
}

/// Ordered, name-unique collection of variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<NamedVariable>", into = "Vec<NamedVariable>")]
pub struct VariablesContainer {
    variables: Vec<NamedVariable>,
}

impl VariablesContainer {
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.variable)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables
            .iter_mut()
            .find(|entry| entry.name == name)
            .map(|entry| &mut entry.variable)
    }

    /// Name and variable at a position
    pub fn get_at(&self, index: usize) -> Option<(&str, &Variable)> {
        self.variables
            .get(index)
            .map(|entry| (entry.name.as_str(), &entry.variable))
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.variables.get(index).map(|entry| entry.name.as_str())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|entry| entry.name == name)
    }

    /// Insert a variable at `position` (clamped to the end).
    ///
    /// If the name is already taken, the existing variable is left untouched
    /// and returned instead.
    pub fn insert(&mut self, name: impl Into<String>, variable: Variable, position: usize) -> &mut Variable {
        let name = name.into();
        let index = match self.position(&name) {
            Some(existing) => existing,
            None => {
                let index = position.min(self.variables.len());
                self.variables.insert(index, NamedVariable { name, variable });
                index
            }
        };
        &mut self.variables[index].variable
    }

    /// Insert a variable at the end
    pub fn push(&mut self, name: impl Into<String>, variable: Variable) -> &mut Variable {
        let end = self.variables.len();
        self.insert(name, variable, end)
    }

    /// Remove a variable. Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Variable> {
        let index = self.position(name)?;
        Some(self.variables.remove(index).variable)
    }

    /// Rename a variable in place, keeping its position.
    ///
    /// Returns false when `old_name` is absent or `new_name` is already taken.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> bool {
        if self.has(new_name) {
            return false;
        }
        match self.variables.iter_mut().find(|entry| entry.name == old_name) {
            Some(entry) => {
                entry.name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.variables
            .iter()
            .map(|entry| (entry.name.as_str(), &entry.variable))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Variable)> {
        self.variables
            .iter_mut()
            .map(|entry| (entry.name.as_str(), &mut entry.variable))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|entry| entry.name.as_str())
    }

    pub(crate) fn into_variables(self) -> Vec<Variable> {
        self.variables
            .into_iter()
            .map(|entry| entry.variable)
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Variable)> for VariablesContainer {
    fn from_iter<I: IntoIterator<Item = (S, Variable)>>(iter: I) -> Self {
        let mut container = VariablesContainer::new();
        for (name, variable) in iter {
            container.push(name, variable);
        }
        container
    }
}

impl IntoIterator for VariablesContainer {
    type Item = (String, Variable);
    type IntoIter = std::iter::Map<std::vec::IntoIter<NamedVariable>, fn(NamedVariable) -> (String, Variable)>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables
            .into_iter()
            .map(into_pair as fn(NamedVariable) -> (String, Variable))
    }
}

fn into_pair(entry: NamedVariable) -> (String, Variable) {
    (entry.name, entry.variable)
}

/// Duplicate names keep their first occurrence
impl From<Vec<NamedVariable>> for VariablesContainer {
    fn from(entries: Vec<NamedVariable>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.name, entry.variable))
            .collect()
    }
}

impl From<VariablesContainer> for Vec<NamedVariable> {
    fn from(container: VariablesContainer) -> Self {
        container.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VariableType;

    fn sample() -> VariablesContainer {
        vec![
            ("a", Variable::number(1.0)),
            ("b", Variable::string("two")),
            ("c", Variable::boolean(true)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_insert_at_position() {
        let mut container = sample();
        container.insert("z", Variable::number(0.0), 1);

        assert_eq!(container.names().collect::<Vec<_>>(), vec!["a", "z", "b", "c"]);
        assert_eq!(container.position("b"), Some(2));
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut container = sample();
        container.insert("z", Variable::number(0.0), 99);

        assert_eq!(container.name_at(3), Some("z"));
    }

    #[test]
    fn test_insert_existing_name_keeps_value() {
        let mut container = sample();
        let kept = container.insert("a", Variable::string("other"), 0);

        assert_eq!(kept.as_number(), Some(1.0));
        assert_eq!(container.len(), 3);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut container = sample();
        assert!(container.remove("missing").is_none());
        assert_eq!(container.len(), 3);

        assert_eq!(container.remove("b"), Some(Variable::string("two")));
        assert_eq!(container.names().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_rename_keeps_position() {
        let mut container = sample();
        assert!(container.rename("b", "beta"));

        assert_eq!(container.name_at(1), Some("beta"));
        assert_eq!(container.get("beta"), Some(&Variable::string("two")));
        assert!(!container.has("b"));
    }

    #[test]
    fn test_rename_refuses_taken_or_missing_names() {
        let mut container = sample();

        assert!(!container.rename("a", "c"));
        assert!(!container.rename("missing", "d"));
        assert_eq!(container, sample());
    }

    #[test]
    fn test_get_at() {
        let container = sample();
        let (name, variable) = container.get_at(2).unwrap();

        assert_eq!(name, "c");
        assert_eq!(variable.variable_type(), VariableType::Boolean);
        assert!(container.get_at(3).is_none());
    }

    #[test]
    fn test_json_shape_and_duplicates() {
        let json = r#"[
            { "name": "hp", "type": "number", "value": 10 },
            { "name": "stats", "type": "structure", "children": [
                { "name": "speed", "type": "number", "value": 2.5 }
            ] },
            { "name": "hp", "type": "string", "value": "ignored" }
        ]"#;

        let container: VariablesContainer = serde_json::from_str(json).unwrap();
        assert_eq!(container.len(), 2);
        assert_eq!(container.get("hp"), Some(&Variable::number(10.0)));

        let speed = container
            .get("stats")
            .and_then(|stats| stats.children())
            .and_then(|children| children.get("speed"));
        assert_eq!(speed, Some(&Variable::number(2.5)));

        let reparsed: VariablesContainer =
            serde_json::from_str(&serde_json::to_string(&container).unwrap()).unwrap();
        assert_eq!(reparsed, container);
    }
}
