//! # Varsync Editor
//!
//! Keeps the variables of grouped objects, their instances and the variants
//! of events-based objects consistent with each other.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ project: objects, groups, instances,        │
//! │          variants, two-tier scopes          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ merge: group members → merged container     │
//! │  - intersection of member variables         │
//! │  - mixed types / mixed values markers       │
//! └─────────────────────────────────────────────┘
//!                     ↓  (edited, diffed upstream into a changeset)
//! ┌─────────────────────────────────────────────┐
//! │ propagation: changeset → every container    │
//! │  - member objects                           │
//! │  - instances (override pruning only)        │
//! │  - variants (default variant is the source) │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Copy, never alias**: values move between containers by cloning
//! 2. **Silent skip**: unresolvable names and absent variables are no-ops
//! 3. **No clobbering**: a variable a container already holds is never
//!    overwritten by an added or renamed variable
//! 4. **Instances hold overrides only**: propagation prunes them, never injects
//!
//! ## Usage
//!
//! ```rust,ignore
//! use varsync_editor::{GroupVariablesSession, ScopeLocation};
//!
//! let session = GroupVariablesSession::open(&project, ScopeLocation::layout("Level1"), "Enemies")?;
//! let mut edited = session.merged().clone();
//! // ... user edits `edited`, a changeset is computed from the two snapshots ...
//! let report = session.commit(&mut project, &edited, &changeset)?;
//! ```

mod errors;
mod fill;
mod instances;
mod merge;
mod propagation;
mod session;
mod variants;

pub use errors::EditorError;
pub use fill::{fill_any_variable_between_objects, fill_missing_group_variables_to_objects};
pub use instances::apply_changes_to_object_instances;
pub use merge::merge_variable_containers;
pub use propagation::apply_changes_to_objects;
pub use session::{
    propagate_child_object_variable_changes, propagate_object_variable_changes, GroupVariablesSession,
    PropagationReport, ScopeLocation,
};
pub use variants::apply_changes_to_variants;

// Re-export common types for convenience
pub use varsync_project::{ObjectGroup, ObjectScope, ObjectScopeMut, Project};
pub use varsync_variables::{Variable, VariableType, VariablesChangeset, VariablesContainer};
