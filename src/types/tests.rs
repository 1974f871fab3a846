use super::*;

fn stub(name: &str) -> StubType {
    StubType::qualified("System", name)
}

#[test]
fn test_stub_assignability_is_case_insensitive_name_equality() {
    let string = stub("String");
    assert!(string.is_assignable_to(&StubType::new("string")));
    assert!(string.is_assignable_to(&StubType::qualified("Other", "STRING")));
    assert!(!string.is_assignable_to(&stub("Object")));
}

#[test]
fn test_stub_namespace_is_recovered_from_full_name() {
    assert_eq!(stub("String").namespace(), "System");
    assert_eq!(StubType::new("Global").namespace(), "");
}

#[test]
fn test_disjunctive_source_is_assignable_when_any_candidate_is() {
    let query = Disjunctive::new("text", vec![stub("Int32"), stub("String")]);
    assert!(query.is_assignable_to(&stub("String")));
    assert!(!query.is_assignable_to(&stub("Double")));
}

#[test]
fn test_concrete_is_assignable_to_disjunctive_target_when_any_candidate_accepts() {
    let target = Disjunctive::new("number", vec![stub("Int32"), stub("Int64")]);
    assert!(stub("Int64").is_assignable_to(&target));
    assert!(!stub("String").is_assignable_to(&target));
}

#[test]
fn test_never_type_is_never_assignable_in_either_direction() {
    let never: Disjunctive<StubType> = Disjunctive::never("Missing");
    assert!(never.is_empty());
    assert!(!never.is_assignable_to(&stub("Missing")));
    assert!(!stub("Missing").is_assignable_to(&never));
    assert!(!never.is_assignable_to(&never));
}

#[test]
fn test_nested_disjunctions_distribute() {
    let inner = Disjunctive::new("inner", vec![stub("Char")]);
    let outer = Disjunctive::new("outer", vec![inner]);
    assert!(stub("Char").is_assignable_to(&outer));
    assert!(outer.is_assignable_to(&stub("char")));
}

#[test]
fn test_disjunctive_name_is_query_text() {
    let query = Disjunctive::new("string", vec![stub("String")]);
    assert_eq!(query.name(), "string");
    assert_eq!(query.candidates()[0].full_name(), "System.String");
}

#[test]
fn test_references_forward_identity() {
    let string = stub("String");
    let by_ref: &dyn TypeIdentity = &string;
    assert!(by_ref.is_assignable_to(&stub("string")));
    assert_eq!((&string).full_name(), "System.String");
}
