//! # Object Scopes
//!
//! Name resolution for objects referenced by groups.
//!
//! Two tiers exist: the local scope (objects of a layout) and the global scope
//! (objects of the project). A local object shadows a global object with the
//! same name. A name found in neither scope does not resolve.

use crate::group::ObjectGroup;
use crate::object::{Object, ObjectsContainer};

/// Read access to objects by name
pub trait ObjectScope {
    fn has_local_object(&self, name: &str) -> bool;

    fn has_global_object(&self, name: &str) -> bool;

    /// Resolve an object, preferring the local scope
    fn object(&self, name: &str) -> Option<&Object>;

    fn has_object(&self, name: &str) -> bool {
        self.has_local_object(name) || self.has_global_object(name)
    }
}

/// Write access to objects by name
pub trait ObjectScopeMut: ObjectScope {
    /// Resolve an object mutably, preferring the local scope
    fn object_mut(&mut self, name: &str) -> Option<&mut Object>;
}

/// A single container is a scope with no global tier
impl ObjectScope for ObjectsContainer {
    fn has_local_object(&self, name: &str) -> bool {
        self.has_object_named(name)
    }

    fn has_global_object(&self, _name: &str) -> bool {
        false
    }

    fn object(&self, name: &str) -> Option<&Object> {
        self.get_object(name)
    }
}

impl ObjectScopeMut for ObjectsContainer {
    fn object_mut(&mut self, name: &str) -> Option<&mut Object> {
        self.get_object_mut(name)
    }
}

/// Local and global containers, read-only
#[derive(Debug, Clone, Copy)]
pub struct ObjectsContainersList<'a> {
    global: &'a ObjectsContainer,
    local: &'a ObjectsContainer,
}

impl<'a> ObjectsContainersList<'a> {
    pub fn new(global: &'a ObjectsContainer, local: &'a ObjectsContainer) -> Self {
        Self { global, local }
    }

    /// Resolve a group, preferring the local scope
    pub fn group(&self, name: &str) -> Option<&'a ObjectGroup> {
        self.local
            .groups()
            .get(name)
            .or_else(|| self.global.groups().get(name))
    }
}

impl ObjectScope for ObjectsContainersList<'_> {
    fn has_local_object(&self, name: &str) -> bool {
        self.local.has_object_named(name)
    }

    fn has_global_object(&self, name: &str) -> bool {
        self.global.has_object_named(name)
    }

    fn object(&self, name: &str) -> Option<&Object> {
        self.local
            .get_object(name)
            .or_else(|| self.global.get_object(name))
    }
}

/// Local and global containers, borrowed exclusively for a propagation pass
#[derive(Debug)]
pub struct ObjectsContainersListMut<'a> {
    global: &'a mut ObjectsContainer,
    local: &'a mut ObjectsContainer,
}

impl<'a> ObjectsContainersListMut<'a> {
    pub fn new(global: &'a mut ObjectsContainer, local: &'a mut ObjectsContainer) -> Self {
        Self { global, local }
    }

    pub fn as_list(&self) -> ObjectsContainersList<'_> {
        ObjectsContainersList::new(&*self.global, &*self.local)
    }
}

impl ObjectScope for ObjectsContainersListMut<'_> {
    fn has_local_object(&self, name: &str) -> bool {
        self.local.has_object_named(name)
    }

    fn has_global_object(&self, name: &str) -> bool {
        self.global.has_object_named(name)
    }

    fn object(&self, name: &str) -> Option<&Object> {
        self.local
            .get_object(name)
            .or_else(|| self.global.get_object(name))
    }
}

impl ObjectScopeMut for ObjectsContainersListMut<'_> {
    fn object_mut(&mut self, name: &str) -> Option<&mut Object> {
        if self.local.has_object_named(name) {
            self.local.get_object_mut(name)
        } else {
            self.global.get_object_mut(name)
        }
    }
}
