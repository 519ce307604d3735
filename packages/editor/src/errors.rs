//! Error types for the editor

use thiserror::Error;
use varsync_variables::ChangesetError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Layout not found: {0}")]
    LayoutNotFound(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Events-based object not found: {0}")]
    EventsBasedObjectNotFound(String),

    #[error("Invalid changeset: {0}")]
    Changeset(#[from] ChangesetError),
}
