use edutrack_core::{
    run_command, Address, CommandError, Email, LogicError, Model, Name, Person, Phone, Remark, Tag,
};
use std::collections::BTreeSet;

fn person(name: &str, phone: &str) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new("contact@example.com").unwrap(),
        Address::new("10 Downing Street").unwrap(),
        BTreeSet::new(),
        BTreeSet::new(),
        Remark::empty(),
    )
}

fn typical_model() -> Model {
    let mut model = Model::default();
    model.add_person(person("Alice Pauline", "94351253"));
    model.add_person(person("Benson Meier", "98765432"));
    model
}

#[test]
fn assign_registered_tag_succeeds_exactly_once() {
    let mut model = typical_model();
    assert!(model.add_tag(Tag::new("Physics").unwrap()));

    let result = run_command("tagassign 1 t/Physics", &mut model).unwrap();
    assert!(result.feedback().contains("Alice Pauline"));
    assert!(result.feedback().contains("Physics"));

    let tags = model.filtered_persons()[0].tags().clone();
    assert_eq!(tags.len(), 1);
    assert!(tags.contains(&Tag::new("Physics").unwrap()));

    // Re-running the identical command must fail and leave the set as-is.
    let err = run_command("tagassign 1 t/Physics", &mut model).unwrap_err();
    assert_eq!(
        err.to_string(),
        "This tag has already been assigned to this person"
    );
    assert!(matches!(
        err,
        LogicError::Command(CommandError::DuplicateTagAssignment)
    ));
    assert_eq!(model.filtered_persons()[0].tags().len(), 1);
}

#[test]
fn unregistered_tag_fails_and_leaves_model_unchanged() {
    let mut model = typical_model();
    let before = model.book().clone();

    let err = run_command("tagassign 1 t/NonExistent", &mut model).unwrap_err();
    assert_eq!(err.to_string(), "Tag not found");
    assert_eq!(model.book(), &before);
}

#[test]
fn out_of_bounds_index_fails_and_leaves_model_unchanged() {
    let mut model = typical_model();
    model.add_tag(Tag::new("Physics").unwrap());
    let before = model.book().clone();

    let err = run_command("tagassign 3 t/Physics", &mut model).unwrap_err();
    assert_eq!(err.to_string(), "The person index provided is invalid");
    assert_eq!(model.book(), &before);
}

#[test]
fn assignment_stores_the_canonical_casing() {
    let mut model = typical_model();
    model.add_tag(Tag::new("example").unwrap());

    run_command("tagassign 1 t/exAmple", &mut model).unwrap();

    let tags = model.filtered_persons()[0].tags();
    assert!(tags.contains(&Tag::new("example").unwrap()));
    assert!(tags.iter().all(|tag| tag.name() == "example"));
}

#[test]
fn index_resolves_against_the_filtered_list() {
    let mut model = typical_model();
    model.add_tag(Tag::new("Monitor").unwrap());

    run_command("find Benson", &mut model).unwrap();
    run_command("tagassign 1 t/Monitor", &mut model).unwrap();
    run_command("list", &mut model).unwrap();

    let persons = model.filtered_persons();
    assert!(persons[0].tags().is_empty());
    assert!(persons[1].has_tag(&Tag::new("Monitor").unwrap()));
}

#[test]
fn tagcreate_registers_once_and_rejects_case_insensitive_duplicates() {
    let mut model = typical_model();

    let result = run_command("tagcreate t/Physics", &mut model).unwrap();
    assert!(result.feedback().contains("Physics"));

    let err = run_command("tagcreate t/physics", &mut model).unwrap_err();
    assert_eq!(
        err.to_string(),
        "This tag already exists in the address book"
    );
    assert_eq!(model.book().tags().len(), 1);
}
