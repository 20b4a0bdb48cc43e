use edutrack_core::{
    run_command, Address, Email, LogicError, Model, Name, Person, Phone, Remark,
};
use std::collections::BTreeSet;

fn model_with_one_person() -> Model {
    let mut model = Model::default();
    model.add_person(Person::new(
        Name::new("Alice Pauline").unwrap(),
        Phone::new("94351253").unwrap(),
        Email::new("alice@example.com").unwrap(),
        Address::new("123, Jurong West Ave 6").unwrap(),
        BTreeSet::new(),
        BTreeSet::new(),
        Remark::new("old remark"),
    ));
    model
}

#[test]
fn remark_with_value_overwrites_existing_remark() {
    let mut model = model_with_one_person();

    let result = run_command("remark 1 r/Likes tea", &mut model).unwrap();
    assert!(result.feedback().starts_with("Added remark to Person:"));
    assert!(result.feedback().contains("Alice Pauline"));
    // The new remark text must appear in the success message.
    assert!(result.feedback().contains("Likes tea"));

    assert_eq!(model.filtered_persons()[0].remark().as_str(), "Likes tea");
}

#[test]
fn remark_without_prefix_removes_existing_remark() {
    let mut model = model_with_one_person();

    let result = run_command("remark 1", &mut model).unwrap();
    assert!(result.feedback().starts_with("Removed remark from Person:"));
    assert!(model.filtered_persons()[0].remark().is_empty());
}

#[test]
fn empty_remark_value_also_removes() {
    let mut model = model_with_one_person();

    run_command("remark 1 r/", &mut model).unwrap();
    assert!(model.filtered_persons()[0].remark().is_empty());
}

#[test]
fn out_of_bounds_index_fails_and_leaves_model_unchanged() {
    let mut model = model_with_one_person();
    let before = model.book().clone();

    let err = run_command("remark 2 r/Likes tea", &mut model).unwrap_err();
    assert_eq!(err.to_string(), "The person index provided is invalid");
    assert_eq!(model.book(), &before);
}

#[test]
fn malformed_index_reports_usage_hint() {
    let mut model = model_with_one_person();

    let err = run_command("remark r/Likes tea", &mut model).unwrap_err();
    assert!(matches!(err, LogicError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid command format! \n"));
    assert!(err.to_string().contains("remark 1 r/Likes tea"));
    assert_eq!(model.filtered_persons()[0].remark().as_str(), "old remark");
}
