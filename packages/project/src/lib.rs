//! # Project Model
//!
//! The entities that own variables containers, and the name resolution that
//! connects them.
//!
//! ## Ownership
//!
//! ```text
//! Project
//!  ├── objects (global scope)          Object ─── VariablesContainer
//!  │    └── groups                     ObjectGroup ─── [object names]
//!  ├── layouts
//!  │    ├── objects (local scope)
//!  │    └── initial_instances          InitialInstance ─── VariablesContainer (overrides)
//!  └── events_based_objects
//!       ├── default_variant            objects + initial_instances
//!       └── variants                   objects + initial_instances
//! ```
//!
//! Groups reference objects by name only. Resolving a name goes through an
//! [`ObjectScope`], where an object of the local scope shadows a global
//! object with the same name.

mod error;
mod events_based_object;
mod group;
mod instance;
mod object;
mod project;
mod scope;

pub use error::ProjectError;
pub use events_based_object::{EventsBasedObject, EventsBasedObjectVariant};
pub use group::{ObjectGroup, ObjectGroupsContainer};
pub use instance::{InitialInstance, InitialInstancesContainer, InstanceVisitor};
pub use object::{Object, ObjectsContainer};
pub use project::{Layout, Project};
pub use scope::{ObjectScope, ObjectScopeMut, ObjectsContainersList, ObjectsContainersListMut};
