//! Formula assertion helpers.

use typesearch::Formula;

/// Documentation identifiers of `formulas`, in order.
pub fn ids<'a, T: 'a>(formulas: impl IntoIterator<Item = &'a Formula<T>>) -> Vec<String> {
    formulas
        .into_iter()
        .map(|f| f.documentation_id().to_string())
        .collect()
}

/// Assert the formula set contains `id`.
pub fn assert_has_formula<T>(formulas: &[Formula<T>], id: &str) {
    assert!(
        formulas.iter().any(|f| f.documentation_id() == id),
        "Expected formula '{}' in {:?}",
        id,
        ids(formulas)
    );
}

/// Assert no formula's identifier starts with `prefix`.
pub fn assert_no_formula_like<T>(formulas: &[Formula<T>], prefix: &str) {
    let found: Vec<_> = ids(formulas)
        .into_iter()
        .filter(|id| id.starts_with(prefix))
        .collect();
    assert!(found.is_empty(), "Unexpected formulas {:?}", found);
}
