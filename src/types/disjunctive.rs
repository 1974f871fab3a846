//! Disjunctive ("any of these") type handles.

use super::TypeIdentity;
use crate::base::Name;

/// A type standing for any one of several candidate types.
///
/// Produced when a free-text query names more than one type (or none). The
/// name is the query text itself; the candidates are whatever the corpus
/// found. With zero candidates this is the "never" type: it is assignable to
/// nothing and nothing is assignable to it.
#[derive(Clone, Debug)]
pub struct Disjunctive<T> {
    name: Name,
    candidates: Vec<T>,
}

impl<T> Disjunctive<T> {
    pub fn new(name: impl Into<Name>, candidates: Vec<T>) -> Self {
        Self {
            name: name.into(),
            candidates,
        }
    }

    /// The total "never" type for a query that matched nothing.
    pub fn never(name: impl Into<Name>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<T: TypeIdentity> TypeIdentity for Disjunctive<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_assignable_to(&self, target: &dyn TypeIdentity) -> bool {
        self.candidates
            .iter()
            .any(|candidate| candidate.is_assignable_to(target))
    }

    fn any_candidate(&self, visit: &mut dyn FnMut(&dyn TypeIdentity) -> bool) -> Option<bool> {
        Some(self.candidates.iter().any(|candidate| visit(candidate)))
    }
}
