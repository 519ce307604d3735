//! Replaying changesets on objects, instances and variants

use varsync_editor::{
    apply_changes_to_object_instances, apply_changes_to_objects, apply_changes_to_variants,
    propagate_child_object_variable_changes, GroupVariablesSession, ObjectGroup, Project, ScopeLocation, Variable,
    VariableType, VariablesChangeset, VariablesContainer,
};
use varsync_project::{
    EventsBasedObject, EventsBasedObjectVariant, InitialInstance, InitialInstancesContainer, Layout, Object,
    ObjectsContainer,
};

fn variables(entries: &[(&str, Variable)]) -> VariablesContainer {
    entries.iter().cloned().collect()
}

fn single_member(object_variables: VariablesContainer) -> (ObjectsContainer, ObjectGroup) {
    let mut objects = ObjectsContainer::new();
    objects.insert_object(Object::new("A").with_variables(object_variables));
    (objects, ObjectGroup::with_objects("G", ["A"]))
}

fn member_variables(objects: &ObjectsContainer) -> &VariablesContainer {
    objects.get_object("A").unwrap().variables()
}

#[test]
fn test_added_variable_does_not_clobber() {
    let (mut objects, group) = single_member(variables(&[("x", Variable::number(1.0))]));
    let group_variables = variables(&[("x", Variable::number(42.0))]);
    let changeset = VariablesChangeset::new().with_added("x");

    apply_changes_to_objects(&mut objects, &group_variables, &group, &changeset);

    assert_eq!(member_variables(&objects).get("x").unwrap().as_number(), Some(1.0));
}

#[test]
fn test_rename_onto_existing_name_drops_old_variable() {
    let (mut objects, group) = single_member(variables(&[("a", Variable::number(1.0)), ("b", Variable::number(2.0))]));
    let changeset = VariablesChangeset::new().with_renamed("a", "b");

    apply_changes_to_objects(&mut objects, &VariablesContainer::new(), &group, &changeset);

    let result = member_variables(&objects);
    assert_eq!(result.names().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(result.get("b").unwrap().as_number(), Some(2.0));
}

#[test]
fn test_swapping_names_loses_a_variable() {
    let (mut objects, group) = single_member(variables(&[("a", Variable::number(1.0)), ("b", Variable::number(2.0))]));
    let changeset = VariablesChangeset::new().with_renamed("a", "b").with_renamed("b", "a");

    apply_changes_to_objects(&mut objects, &VariablesContainer::new(), &group, &changeset);

    let result = member_variables(&objects);
    assert_eq!(result.names().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(result.get("a").unwrap().as_number(), Some(2.0));
}

#[test]
fn test_steps_run_in_order() {
    let (mut objects, group) = single_member(variables(&[
        ("gone", Variable::number(0.0)),
        ("old", Variable::number(1.0)),
        ("speed", Variable::number(2.0)),
        ("last", Variable::boolean(true)),
    ]));
    let group_variables = variables(&[
        ("new", Variable::number(1.0)),
        ("speed", Variable::string("fast")),
        ("fresh", Variable::boolean(false)),
    ]);
    let changeset = VariablesChangeset::new()
        .with_removed("gone")
        .with_added("fresh")
        .with_renamed("old", "new")
        .with_value_changed("speed");

    apply_changes_to_objects(&mut objects, &group_variables, &group, &changeset);

    let result = member_variables(&objects);
    assert_eq!(result.names().collect::<Vec<_>>(), vec!["new", "speed", "last", "fresh"]);
    assert_eq!(result.get("speed").unwrap().as_str(), Some("fast"));
}

#[test]
fn test_value_change_appends_when_absent() {
    let (mut objects, group) = single_member(variables(&[("a", Variable::number(1.0))]));
    let group_variables = variables(&[("b", Variable::number(2.0)), ("a", Variable::number(1.0))]);
    let changeset = VariablesChangeset::new().with_value_changed("b");

    apply_changes_to_objects(&mut objects, &group_variables, &group, &changeset);

    assert_eq!(member_variables(&objects).names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_instance_overrides_pruned_by_type() {
    let object_variables = variables(&[("hp", Variable::number(10.0)), ("name", Variable::string("orc"))]);
    let mut instances = InitialInstancesContainer::new();
    instances.push(InitialInstance::new("Orc").with_variables(variables(&[
        ("hp", Variable::string("lots")),
        ("name", Variable::string("Grunt")),
    ])));
    instances.push(InitialInstance::new("Orc").with_variables(variables(&[("hp", Variable::number(12.0))])));
    instances.push(InitialInstance::new("Bat").with_variables(variables(&[("hp", Variable::string("lots"))])));
    let changeset = VariablesChangeset::new().with_value_changed("hp").with_value_changed("name");

    apply_changes_to_object_instances(&object_variables, &mut instances, "Orc", &changeset);

    let orcs: Vec<_> = instances.instances_of("Orc").collect();
    assert!(!orcs[0].variables().has("hp"));
    assert_eq!(orcs[0].variables().get("name").unwrap().as_str(), Some("Grunt"));
    assert_eq!(orcs[1].variables().get("hp").unwrap().as_number(), Some(12.0));
    let bat = instances.instances_of("Bat").next().unwrap();
    assert!(bat.variables().has("hp"));
}

#[test]
fn test_instance_pass_never_creates_overrides() {
    let object_variables = variables(&[("hp", Variable::number(10.0)), ("mana", Variable::number(3.0))]);
    let mut instances = InitialInstancesContainer::new();
    instances.push(InitialInstance::new("Orc").with_variables(variables(&[("old", Variable::number(1.0))])));
    let changeset = VariablesChangeset::new()
        .with_added("mana")
        .with_renamed("old", "hp")
        .with_value_changed("hp");

    apply_changes_to_object_instances(&object_variables, &mut instances, "Orc", &changeset);

    let orc = instances.instances_of("Orc").next().unwrap();
    assert_eq!(orc.variables().names().collect::<Vec<_>>(), vec!["hp"]);
    assert_eq!(orc.variables().get("hp").unwrap().as_number(), Some(1.0));
}

#[test]
fn test_added_variable_prunes_override_of_another_type() {
    let object_variables = variables(&[("x", Variable::number(1.0)), ("y", Variable::string("declared"))]);
    let mut instances = InitialInstancesContainer::new();
    instances.push(InitialInstance::new("Orc").with_variables(variables(&[
        ("x", Variable::string("one")),
        ("y", Variable::string("custom")),
    ])));
    let changeset = VariablesChangeset::new().with_added("x").with_added("y");

    apply_changes_to_object_instances(&object_variables, &mut instances, "Orc", &changeset);

    let orc = instances.instances_of("Orc").next().unwrap();
    assert_eq!(orc.variables().names().collect::<Vec<_>>(), vec!["y"]);
    assert_eq!(orc.variables().get("y").unwrap().as_str(), Some("custom"));
}

#[test]
fn test_instance_rename_onto_existing_override_keeps_target() {
    let object_variables = variables(&[("b", Variable::number(0.0))]);
    let mut instances = InitialInstancesContainer::new();
    instances.push(InitialInstance::new("Orc").with_variables(variables(&[
        ("a", Variable::number(1.0)),
        ("b", Variable::number(2.0)),
    ])));
    let changeset = VariablesChangeset::new().with_renamed("a", "b");

    apply_changes_to_object_instances(&object_variables, &mut instances, "Orc", &changeset);

    let orc = instances.instances_of("Orc").next().unwrap();
    assert_eq!(orc.variables().names().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(orc.variables().get("b").unwrap().as_number(), Some(2.0));
}

fn button_with_variants() -> EventsBasedObject {
    let mut button = EventsBasedObject::new("Button");
    button.default_variant.objects.insert_object(Object::new("Label").with_variables(variables(&[
        ("text", Variable::string("OK")),
        ("size", Variable::number(12.0)),
        ("color", Variable::string("black")),
    ])));

    let mut dark = EventsBasedObjectVariant::new("Dark");
    dark.objects.insert_object(Object::new("Label").with_variables(variables(&[
        ("text", Variable::string("Okay")),
        ("size", Variable::string("large")),
        ("color", Variable::string("white")),
    ])));
    dark.initial_instances.push(
        InitialInstance::new("Label").with_variables(variables(&[("size", Variable::string("huge"))])),
    );
    button.insert_variant(dark);

    let mut empty = EventsBasedObjectVariant::new("Empty");
    empty.objects.insert_object(Object::new("Icon"));
    button.insert_variant(empty);

    button
}

#[test]
fn test_variants_take_values_from_default_variant() {
    let mut button = button_with_variants();
    button
        .default_variant
        .objects
        .get_object_mut("Label")
        .unwrap()
        .variables_mut()
        .push("hovered", Variable::boolean(false));
    let changeset = VariablesChangeset::new().with_added("hovered").with_value_changed("size");

    apply_changes_to_variants(&mut button, "Label", &changeset);

    let dark = button.variant("Dark").unwrap();
    let label = dark.objects.get_object("Label").unwrap().variables();
    assert_eq!(label.get("hovered").unwrap().as_bool(), Some(false));
    assert_eq!(label.get("size").unwrap().variable_type(), VariableType::Number);
    assert_eq!(label.get("size").unwrap().as_number(), Some(12.0));
    assert_eq!(label.get("text").unwrap().as_str(), Some("Okay"));

    let instance = dark.initial_instances.instances_of("Label").next().unwrap();
    assert!(!instance.variables().has("size"));

    let empty = button.variant("Empty").unwrap();
    assert!(!empty.objects.has_object_named("Label"));
}

#[test]
fn test_variants_keep_customized_values_of_same_type() {
    let mut button = button_with_variants();
    let changeset = VariablesChangeset::new().with_value_changed("color");

    apply_changes_to_variants(&mut button, "Label", &changeset);

    let label = button.variant("Dark").unwrap().objects.get_object("Label").unwrap().variables();
    assert_eq!(label.get("color").unwrap().as_str(), Some("white"));
}

#[test]
fn test_child_object_propagation_covers_default_variant_instances() {
    let mut project = Project::new("Game");
    let mut button = button_with_variants();
    button.default_variant.initial_instances.push(
        InitialInstance::new("Label").with_variables(variables(&[("color", Variable::boolean(true))])),
    );
    project.events_based_objects.push(button);
    let changeset = VariablesChangeset::new().with_value_changed("color");

    let report = propagate_child_object_variable_changes(&mut project, "Button", "Label", &changeset).unwrap();

    assert_eq!(report.objects, 1);
    assert_eq!(report.instance_containers, 2);
    let button = project.events_based_object("Button").unwrap();
    let instance = button.default_variant().initial_instances.instances_of("Label").next().unwrap();
    assert!(!instance.variables().has("color"));
}

#[test]
fn test_global_group_commit_prunes_instances_in_layouts() {
    let mut project = Project::new("Game");
    project
        .objects
        .insert_object(Object::new("Hero").with_variables(variables(&[("lives", Variable::number(3.0))])));
    project
        .objects
        .insert_object(Object::new("Sidekick").with_variables(variables(&[("lives", Variable::number(1.0))])));
    project
        .objects
        .groups_mut()
        .insert(ObjectGroup::with_objects("Party", ["Hero", "Sidekick"]));

    let mut level = Layout::new("Level1");
    level.initial_instances.push(
        InitialInstance::new("Hero").with_variables(variables(&[("lives", Variable::number(9.0))])),
    );
    project.layouts.push(level);

    let session = GroupVariablesSession::open(&project, ScopeLocation::Global, "Party").unwrap();
    let mut edited = session.merged().clone();
    edited.remove("lives");
    edited.push("lives", Variable::boolean(true));
    let changeset = VariablesChangeset::new().with_value_changed("lives");

    let report = session.commit(&mut project, &edited, &changeset).unwrap();

    assert_eq!(report.objects, 2);
    assert_eq!(report.instances, 1);
    let hero = project.objects.get_object("Hero").unwrap();
    assert_eq!(hero.variables().get("lives").unwrap().as_bool(), Some(true));
    let instance = project.layout("Level1").unwrap().initial_instances.instances_of("Hero").next().unwrap();
    assert!(!instance.variables().has("lives"));
}

#[test]
fn test_variants_keep_existing_names_on_add_and_rename() {
    let mut button = EventsBasedObject::new("Button");
    button.default_variant.objects.insert_object(Object::new("Label").with_variables(variables(&[
        ("n", Variable::number(1.0)),
        ("k", Variable::number(2.0)),
    ])));
    let mut dark = EventsBasedObjectVariant::new("Dark");
    dark.objects.insert_object(Object::new("Label").with_variables(variables(&[
        ("n", Variable::number(9.0)),
        ("old", Variable::number(5.0)),
        ("k", Variable::number(7.0)),
    ])));
    button.insert_variant(dark);
    let changeset = VariablesChangeset::new().with_added("n").with_renamed("old", "k");

    apply_changes_to_variants(&mut button, "Label", &changeset);

    let label = button.variant("Dark").unwrap().objects.get_object("Label").unwrap().variables();
    assert_eq!(label.names().collect::<Vec<_>>(), vec!["n", "k"]);
    assert_eq!(label.get("n").unwrap().as_number(), Some(9.0));
    assert_eq!(label.get("k").unwrap().as_number(), Some(7.0));
}
