//! Error types for variables and changesets

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariableError {
    #[error("Unknown variable type: {0}")]
    UnknownType(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangesetError {
    #[error("Variable '{name}' is both {first} and {second} in the same changeset")]
    ConflictingName {
        name: String,
        first: &'static str,
        second: &'static str,
    },
}
