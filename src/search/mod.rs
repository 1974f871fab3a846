//! The matching engine.
//!
//! Given formulas, a basket of available input types, and a desired output
//! type, [`lookup`] yields every formula that consumes exactly the basket and
//! produces something assignable to the target.
//!
//! ## Matching rule
//!
//! ```text
//! result.is_assignable_to(target)
//!   && len(ingredients) == len(basket)
//!   && every basket item claims a slot, greedily:
//!        for item in basket (caller order):
//!            claim the FIRST unclaimed ingredient slot (declaration order)
//!            that item.is_assignable_to(slot); none left -> reject
//! ```
//!
//! The assignment is first-fit, not a maximum bipartite matching: an early
//! basket item may take a slot a later, more constrained item needed, and the
//! formula is then rejected even though some other assignment would work.
//! That is the intended behavior.
//!
//! The engine is pure and lazy. It holds no state between calls, performs no
//! I/O, and evaluates the corpus only as far as the caller iterates.

mod query;

use crate::corpus::Corpus;
use crate::formula::Formula;
use crate::types::TypeIdentity;

pub use query::{Query, QueryError, ResolvedQuery};

/// Lazily select the formulas whose signature fits `basket -> target`.
///
/// Output order is corpus order.
pub fn lookup<'f, 'q, T, F, B>(
    formulas: F,
    basket: &'q [B],
    target: &'q dyn TypeIdentity,
) -> impl Iterator<Item = &'f Formula<T>> + 'q
where
    'f: 'q,
    T: TypeIdentity + 'f,
    F: IntoIterator<Item = &'f Formula<T>>,
    F::IntoIter: 'q,
    B: TypeIdentity,
{
    formulas.into_iter().filter(move |formula| {
        result_matches(formula.result(), target)
            && ingredients_match(basket, formula.ingredients())
    })
}

/// The result half of the rule.
pub fn result_matches(result: &dyn TypeIdentity, target: &dyn TypeIdentity) -> bool {
    result.is_assignable_to(target)
}

/// The ingredient half of the rule: exact arity, then greedy first-fit claims.
pub fn ingredients_match<B: TypeIdentity, I: TypeIdentity>(basket: &[B], ingredients: &[I]) -> bool {
    if ingredients.len() != basket.len() {
        return false;
    }
    if ingredients.is_empty() {
        return true;
    }

    let mut claimed = vec![false; ingredients.len()];
    basket.iter().all(|item| {
        let slot = (0..ingredients.len())
            .find(|&i| !claimed[i] && item.is_assignable_to(&ingredients[i]));
        match slot {
            Some(i) => {
                claimed[i] = true;
                true
            }
            None => {
                tracing::trace!(item = item.name(), "no claimable ingredient slot");
                false
            }
        }
    })
}

/// Resolve `query` against `corpus` and collect the matches.
pub fn run<'c, C: Corpus>(corpus: &'c C, query: &Query) -> Vec<&'c Formula<C::Type>> {
    let resolved = query.resolve(corpus);
    let results: Vec<_> = lookup(corpus.formulas(), resolved.basket(), resolved.target()).collect();
    tracing::debug!(
        basket = query.basket().len(),
        target = %query.target(),
        matches = results.len(),
        "query evaluated"
    );
    results
}

#[cfg(test)]
mod tests;
