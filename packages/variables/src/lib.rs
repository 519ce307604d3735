//! # Variables
//!
//! Typed variables and the ordered containers that hold them.
//!
//! Every object, instance and variant child-object owns exactly one
//! [`VariablesContainer`]. Containers are never shared: synchronizing two
//! entities always means copying [`Variable`] values from one container into
//! the other.
//!
//! A [`VariablesChangeset`] describes the structural edits between two
//! snapshots of a container (added, removed, renamed and value-changed names).
//! It is produced upstream and consumed by the propagation passes of
//! `varsync-editor`.

mod changeset;
mod container;
mod error;
mod variable;

pub use changeset::VariablesChangeset;
pub use container::{NamedVariable, VariablesContainer};
pub use error::{ChangesetError, VariableError};
pub use variable::{Variable, VariableType, VariableValue};
