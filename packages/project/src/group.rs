//! Object groups
//!
//! A group is a named, ordered list of object names. It owns no variables:
//! its variables are a view computed from its members.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectGroup {
    pub name: String,

    #[serde(default)]
    objects: Vec<String>,
}

impl ObjectGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// Build a group from its member names, skipping duplicates
    pub fn with_objects<I, S>(name: impl Into<String>, objects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = Self::new(name);
        for object in objects {
            group.add_object(object);
        }
        group
    }

    pub fn find(&self, object_name: &str) -> bool {
        self.objects.iter().any(|name| name == object_name)
    }

    pub fn add_object(&mut self, object_name: impl Into<String>) {
        let object_name = object_name.into();
        if !self.find(&object_name) {
            self.objects.push(object_name);
        }
    }

    pub fn remove_object(&mut self, object_name: &str) {
        self.objects.retain(|name| name != object_name);
    }

    /// Member names, in group order
    pub fn object_names(&self) -> &[String] {
        &self.objects
    }
}

/// Groups declared in one scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectGroupsContainer {
    groups: Vec<ObjectGroup>,
}

impl ObjectGroupsContainer {
    pub fn has(&self, name: &str) -> bool {
        self.groups.iter().any(|group| group.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ObjectGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ObjectGroup> {
        self.groups.iter_mut().find(|group| group.name == name)
    }

    /// Add a group, replacing a group with the same name
    pub fn insert(&mut self, group: ObjectGroup) {
        match self.get_mut(&group.name) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<ObjectGroup> {
        let index = self.groups.iter().position(|group| group.name == name)?;
        Some(self.groups.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectGroup> {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_keep_order_without_duplicates() {
        let group = ObjectGroup::with_objects("Enemies", ["Orc", "Goblin", "Orc", "Bat"]);
        assert_eq!(group.object_names(), &["Orc", "Goblin", "Bat"]);
    }

    #[test]
    fn test_remove_member() {
        let mut group = ObjectGroup::with_objects("Enemies", ["Orc", "Goblin"]);
        group.remove_object("Orc");

        assert!(!group.find("Orc"));
        assert!(group.find("Goblin"));
    }

    #[test]
    fn test_groups_container() {
        let mut groups = ObjectGroupsContainer::default();
        groups.insert(ObjectGroup::with_objects("Enemies", ["Orc"]));
        groups.insert(ObjectGroup::with_objects("Enemies", ["Bat"]));

        assert_eq!(groups.iter().count(), 1);
        assert_eq!(groups.get("Enemies").unwrap().object_names(), &["Bat"]);
        assert!(groups.remove("Enemies").is_some());
        assert!(!groups.has("Enemies"));
    }
}
