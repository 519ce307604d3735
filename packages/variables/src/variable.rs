//! # Variable
//!
//! A variable is a typed value node. Its type is structural: it is derived
//! from the kind of value currently held, never declared separately.
//!
//! Two markers exist only in merged views of several containers:
//! - [`VariableType::MixedTypes`]: the merged members disagree on the type
//! - the "mixed values" flag: the members agree on the type but not on the value

use crate::container::VariablesContainer;
use crate::error::VariableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structural type of a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableType {
    String,
    Number,
    Boolean,
    Structure,
    Array,
    MixedTypes,
}

impl VariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::String => "string",
            VariableType::Number => "number",
            VariableType::Boolean => "boolean",
            VariableType::Structure => "structure",
            VariableType::Array => "array",
            VariableType::MixedTypes => "mixedTypes",
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariableType {
    type Err = VariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(VariableType::String),
            "number" => Ok(VariableType::Number),
            "boolean" => Ok(VariableType::Boolean),
            "structure" => Ok(VariableType::Structure),
            "array" => Ok(VariableType::Array),
            "mixedTypes" => Ok(VariableType::MixedTypes),
            other => Err(VariableError::UnknownType(other.to_string())),
        }
    }
}

/// Value held by a variable, tagged by its type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum VariableValue {
    String {
        value: String,
    },
    Number {
        value: f64,
    },
    Boolean {
        value: bool,
    },
    Structure {
        #[serde(default)]
        children: VariablesContainer,
    },
    Array {
        #[serde(default)]
        children: Vec<Variable>,
    },
    MixedTypes,
}

impl VariableValue {
    pub fn variable_type(&self) -> VariableType {
        match self {
            VariableValue::String { .. } => VariableType::String,
            VariableValue::Number { .. } => VariableType::Number,
            VariableValue::Boolean { .. } => VariableType::Boolean,
            VariableValue::Structure { .. } => VariableType::Structure,
            VariableValue::Array { .. } => VariableType::Array,
            VariableValue::MixedTypes => VariableType::MixedTypes,
        }
    }

    /// Default value for a freshly created variable of the given type
    pub fn default_for(variable_type: VariableType) -> Self {
        match variable_type {
            VariableType::String => VariableValue::String {
                value: String::new(),
            },
            VariableType::Number => VariableValue::Number { value: 0.0 },
            VariableType::Boolean => VariableValue::Boolean { value: false },
            VariableType::Structure => VariableValue::Structure {
                children: VariablesContainer::new(),
            },
            VariableType::Array => VariableValue::Array {
                children: Vec::new(),
            },
            VariableType::MixedTypes => VariableValue::MixedTypes,
        }
    }
}

/// A typed variable
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    #[serde(flatten)]
    value: VariableValue,

    #[serde(default, skip_serializing_if = "is_false")]
    has_mixed_values: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Default for Variable {
    fn default() -> Self {
        Self::number(0.0)
    }
}

impl Variable {
    pub fn new(variable_type: VariableType) -> Self {
        Self::from_value(VariableValue::default_for(variable_type))
    }

    pub fn from_value(value: VariableValue) -> Self {
        Self {
            value,
            has_mixed_values: false,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::from_value(VariableValue::String {
            value: value.into(),
        })
    }

    pub fn number(value: f64) -> Self {
        Self::from_value(VariableValue::Number { value })
    }

    pub fn boolean(value: bool) -> Self {
        Self::from_value(VariableValue::Boolean { value })
    }

    pub fn structure(children: VariablesContainer) -> Self {
        Self::from_value(VariableValue::Structure { children })
    }

    pub fn array(children: Vec<Variable>) -> Self {
        Self::from_value(VariableValue::Array { children })
    }

    pub fn variable_type(&self) -> VariableType {
        self.value.variable_type()
    }

    pub fn value(&self) -> &VariableValue {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut VariableValue {
        &mut self.value
    }

    pub fn as_number(&self) -> Option<f64> {
        match &self.value {
            VariableValue::Number { value } => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            VariableValue::String { value } => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match &self.value {
            VariableValue::Boolean { value } => Some(*value),
            _ => None,
        }
    }

    /// Named children of a structure
    pub fn children(&self) -> Option<&VariablesContainer> {
        match &self.value {
            VariableValue::Structure { children } => Some(children),
            _ => None,
        }
    }

    /// Items of an array
    pub fn items(&self) -> Option<&[Variable]> {
        match &self.value {
            VariableValue::Array { children } => Some(children),
            _ => None,
        }
    }

    /// True when this is a merged entry whose members disagree on the value
    pub fn has_mixed_values(&self) -> bool {
        self.has_mixed_values
    }

    pub fn mark_as_mixed_values(&mut self) {
        self.has_mixed_values = true;
    }

    /// Convert the variable in place to another type.
    ///
    /// Primitive values are converted the way a user switching the type in
    /// the variables editor expects (numbers are formatted or parsed, booleans
    /// become 1/0). Arrays and structures convert into each other keeping
    /// their children. Casting to [`VariableType::MixedTypes`] drops the
    /// content. The mixed-values flag is always cleared.
    pub fn cast_to(&mut self, new_type: VariableType) {
        self.has_mixed_values = false;
        if self.variable_type() == new_type {
            return;
        }

        let old_value = std::mem::replace(&mut self.value, VariableValue::MixedTypes);
        self.value = match new_type {
            VariableType::String => VariableValue::String {
                value: primitive_to_string(&old_value),
            },
            VariableType::Number => VariableValue::Number {
                value: match old_value {
                    VariableValue::String { value } => value.trim().parse().unwrap_or(0.0),
                    VariableValue::Boolean { value } => {
                        if value {
                            1.0
                        } else {
                            0.0
                        }
                    }
                    _ => 0.0,
                },
            },
            VariableType::Boolean => VariableValue::Boolean {
                value: match old_value {
                    VariableValue::Number { value } => value != 0.0,
                    VariableValue::String { value } => {
                        !(value.is_empty() || value == "0" || value == "false")
                    }
                    _ => false,
                },
            },
            VariableType::Structure => VariableValue::Structure {
                children: match old_value {
                    VariableValue::Array { children } => children
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| (index.to_string(), item))
                        .collect(),
                    _ => VariablesContainer::new(),
                },
            },
            VariableType::Array => VariableValue::Array {
                children: match old_value {
                    VariableValue::Structure { children } => children.into_variables(),
                    _ => Vec::new(),
                },
            },
            VariableType::MixedTypes => VariableValue::MixedTypes,
        };
    }
}

fn primitive_to_string(value: &VariableValue) -> String {
    match value {
        VariableValue::String { value } => value.clone(),
        VariableValue::Number { value } => value.to_string(),
        VariableValue::Boolean { value } => value.to_string(),
        _ => String::new(),
    }
}

/// Equality of type and value, recursively. The mixed-values flag is not
/// compared. Structure children are compared by name, array items by index.
impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (VariableValue::String { value: a }, VariableValue::String { value: b }) => a == b,
            (VariableValue::Number { value: a }, VariableValue::Number { value: b }) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (VariableValue::Boolean { value: a }, VariableValue::Boolean { value: b }) => a == b,
            (VariableValue::Structure { children: a }, VariableValue::Structure { children: b }) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(name, child)| b.get(name).map_or(false, |other| child == other))
            }
            (VariableValue::Array { children: a }, VariableValue::Array { children: b }) => a == b,
            (VariableValue::MixedTypes, VariableValue::MixedTypes) => true,
            _ => false,
        }
    }
}
