//! # Initial Instances
//!
//! Placements of objects in a layout or in an events-based object variant.
//!
//! An instance's variables are overrides on top of the variables declared by
//! its object: a missing name falls back to the declared value.

use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use varsync_variables::VariablesContainer;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialInstance {
    pub object_name: String,

    #[serde(default)]
    pub x: f64,

    #[serde(default)]
    pub y: f64,

    #[serde(default)]
    pub layer: String,

    /// Overridden variables
    #[serde(default)]
    pub variables: VariablesContainer,
}

impl InitialInstance {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            ..Default::default()
        }
    }

    pub fn with_variables(mut self, variables: VariablesContainer) -> Self {
        self.variables = variables;
        self
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn variables(&self) -> &VariablesContainer {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut VariablesContainer {
        &mut self.variables
    }
}

/// Visitor over instances, mutably.
///
/// Return `ControlFlow::Break(())` to stop the iteration early. Any
/// `FnMut(&mut InitialInstance) -> ControlFlow<()>` closure is a visitor.
pub trait InstanceVisitor {
    fn visit_instance(&mut self, instance: &mut InitialInstance) -> ControlFlow<()>;
}

impl<F> InstanceVisitor for F
where
    F: FnMut(&mut InitialInstance) -> ControlFlow<()>,
{
    fn visit_instance(&mut self, instance: &mut InitialInstance) -> ControlFlow<()> {
        self(instance)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitialInstancesContainer {
    instances: Vec<InitialInstance>,
}

impl InitialInstancesContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instance: InitialInstance) -> &mut InitialInstance {
        self.instances.push(instance);
        let last = self.instances.len() - 1;
        &mut self.instances[last]
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InitialInstance> {
        self.instances.iter()
    }

    /// Visit every instance in order until the visitor breaks
    pub fn iterate_over_instances<V: InstanceVisitor>(&mut self, visitor: &mut V) -> ControlFlow<()> {
        for instance in &mut self.instances {
            visitor.visit_instance(instance)?;
        }
        ControlFlow::Continue(())
    }

    /// Visit the instances of one object until the visitor breaks
    pub fn iterate_over_instances_of<V: InstanceVisitor>(
        &mut self,
        object_name: &str,
        visitor: &mut V,
    ) -> ControlFlow<()> {
        for instance in self
            .instances
            .iter_mut()
            .filter(|instance| instance.object_name == object_name)
        {
            visitor.visit_instance(instance)?;
        }
        ControlFlow::Continue(())
    }

    pub fn instances_of<'a>(&'a self, object_name: &'a str) -> impl Iterator<Item = &'a InitialInstance> + 'a {
        self.instances
            .iter()
            .filter(move |instance| instance.object_name == object_name)
    }

    pub fn count_of(&self, object_name: &str) -> usize {
        self.instances_of(object_name).count()
    }
}
