use rstest::rstest;

use super::*;
use crate::base::eq_ignore_case;
use crate::corpus::StubCorpus;
use crate::types::{Disjunctive, MaterializedType, StubType, assignable_to_target};

/// A type assignable to itself and to an explicit list of other names.
#[derive(Clone, Debug)]
struct Fake {
    name: &'static str,
    also: &'static [&'static str],
}

impl Fake {
    const fn new(name: &'static str, also: &'static [&'static str]) -> Self {
        Self { name, also }
    }
}

impl TypeIdentity for Fake {
    fn name(&self) -> &str {
        self.name
    }

    fn is_assignable_to(&self, target: &dyn TypeIdentity) -> bool {
        assignable_to_target(target, &mut |t| {
            eq_ignore_case(self.name, t.name()) || self.also.iter().any(|a| eq_ignore_case(a, t.name()))
        })
    }
}

impl MaterializedType for Fake {
    fn full_name(&self) -> &str {
        self.name
    }
}

const X: Fake = Fake::new("X", &[]);
const Y: Fake = Fake::new("Y", &[]);
const A: Fake = Fake::new("A", &["X", "Y"]);
const B: Fake = Fake::new("B", &["X"]);
const R: Fake = Fake::new("R", &[]);

fn stub(name: &str) -> StubType {
    StubType::qualified("System", name)
}

#[test]
fn test_greedy_assignment_rejects_when_early_item_takes_contested_slot() {
    let formulas = vec![Formula::static_method(R, "Combine", vec![X, Y], R)];

    let matched: Vec<_> = lookup(&formulas, &[A, B], &R).collect();
    assert!(matched.is_empty(), "A claims X first, leaving B without a slot");

    let swapped: Vec<_> = lookup(&formulas, &[B, A], &R).collect();
    assert_eq!(swapped.len(), 1, "B takes X, A falls through to Y");
}

#[test]
fn test_ingredient_slots_are_scanned_in_declaration_order() {
    assert!(ingredients_match(&[A, B], &[Y, X]));
    assert!(!ingredients_match(&[A, B], &[X, Y]));
}

#[test]
fn test_each_slot_is_claimed_at_most_once() {
    assert!(!ingredients_match(&[B, B], &[X, Y]));
    assert!(ingredients_match(&[B, B], &[X, X]));
}

#[test]
fn test_arity_mismatch_is_rejected_before_assignability() {
    let formulas = vec![
        Formula::static_property(stub("Config"), "Current", stub("Config")),
        Formula::property(stub("Config"), "Name", stub("String")),
    ];
    let target = stub("Config");

    // An empty basket only fits the zero-ingredient formula.
    let none: [StubType; 0] = [];
    let matched: Vec<_> = lookup(&formulas, &none, &target).collect();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].documentation_id(), "P:System.Config.Current");

    // A basket item that would be assignable still fails on arity.
    let matched: Vec<_> = lookup(&formulas, &[stub("Config")], &target).collect();
    assert!(matched.is_empty());
}

#[test]
fn test_empty_basket_returns_zero_ingredient_results_only() {
    let formulas = vec![
        Formula::static_field(stub("Math"), "PI", stub("Double")),
        Formula::static_method(stub("Math"), "Random", Vec::new(), stub("Double")),
        Formula::static_method(stub("Math"), "Abs", vec![stub("Double")], stub("Double")),
        Formula::static_field(stub("Math"), "Name", stub("String")),
    ];
    let none: [StubType; 0] = [];
    let ids: Vec<_> = lookup(&formulas, &none, &stub("double"))
        .map(|f| f.documentation_id())
        .collect();
    assert_eq!(ids, ["F:System.Math.PI", "M:System.Math.Random"]);
}

#[test]
fn test_results_keep_corpus_order() {
    let formulas = vec![
        Formula::method(stub("String"), "Trim", Vec::new(), stub("String")),
        Formula::method(stub("String"), "ToUpper", Vec::new(), stub("String")),
        Formula::method(stub("String"), "ToLower", Vec::new(), stub("String")),
    ];
    let names: Vec<_> = lookup(&formulas, &[stub("String")], &stub("String"))
        .map(|f| f.name())
        .collect();
    assert_eq!(names, ["Trim", "ToUpper", "ToLower"]);
}

#[test]
fn test_lookup_is_lazy() {
    let formulas = vec![
        Formula::static_field(stub("A"), "First", stub("Int32")),
        Formula::static_field(stub("A"), "Second", stub("Int32")),
    ];
    let none: [StubType; 0] = [];
    let target = stub("Int32");
    let mut results = lookup(&formulas, &none, &target);
    assert_eq!(results.next().map(|f| f.name()), Some("First"));
}

#[test]
fn test_never_target_matches_nothing() {
    let formulas = vec![
        Formula::static_field(stub("A"), "Value", stub("Int32")),
        Formula::constructor(stub("A"), Vec::new()),
    ];
    let never: Disjunctive<StubType> = Disjunctive::never("Nope");
    let none: [StubType; 0] = [];
    assert_eq!(lookup(&formulas, &none, &never).count(), 0);
}

#[rstest]
#[case("string", 1)]
#[case("String", 1)]
#[case("int", 0)]
fn test_query_resolved_through_corpus(#[case] target: &str, #[case] expected: usize) {
    let corpus = StubCorpus::new().with_formula(Formula::method(
        stub("Object"),
        "ToString",
        Vec::new(),
        stub("String"),
    ));
    let query = Query::new(["object"], target);
    let results = run(&corpus, &query);
    assert_eq!(results.len(), expected);
    if let Some(found) = results.first() {
        assert_eq!(found.result().full_name(), "System.String");
    }
}

#[test]
fn test_query_parse_splits_basket_and_target() {
    let query = Query::parse(["Int32", " ", "String", "Foo"]).unwrap();
    assert_eq!(query.basket(), ["Int32", "String"]);
    assert_eq!(query.target(), "Foo");

    let parsed: Query = "Foo".parse().unwrap();
    assert!(parsed.basket().is_empty());

    assert_eq!(Query::parse(Vec::<String>::new()), Err(QueryError::MissingTarget));
}

#[test]
fn test_resolved_query_reports_unknown_names() {
    let corpus = StubCorpus::new().with_formula(Formula::static_field(
        stub("Color"),
        "Red",
        stub("Color"),
    ));
    let resolved = Query::new(["Mystery"], "color").resolve(&corpus);
    assert_eq!(resolved.unresolved().collect::<Vec<_>>(), ["Mystery"]);
    assert_eq!(resolved.target().len(), 1);
}
