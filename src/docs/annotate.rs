use rustc_hash::FxHashSet;

use super::{DocEntry, Documentation};
use crate::formula::Formula;

/// A formula and the documentation entry sharing its identifier, if any.
#[derive(Debug)]
pub struct Annotation<'f, 'd, T> {
    pub formula: &'f Formula<T>,
    pub entry: Option<&'d DocEntry>,
}

/// The result of pairing formulas with documentation.
#[derive(Debug)]
pub struct Annotated<'f, 'd, T> {
    /// One annotation per distinct identifier, in formula order.
    pub annotations: Vec<Annotation<'f, 'd, T>>,
    /// Formulas dropped because an earlier formula had the same identifier.
    pub collisions: Vec<&'f Formula<T>>,
}

impl<'f, 'd, T> Annotated<'f, 'd, T> {
    /// Annotations that found an entry.
    pub fn documented(&self) -> impl Iterator<Item = &Annotation<'f, 'd, T>> {
        self.annotations.iter().filter(|a| a.entry.is_some())
    }
}

/// Pair each formula with the entry whose identifier matches exactly.
///
/// Several formulas can render the same identifier (the same type defined
/// in two images, or parameters that did not resolve). Only the first such
/// formula is kept; the rest are reported in
/// [`Annotated::collisions`].
pub fn annotate<'f, 'd, T>(
    formulas: impl IntoIterator<Item = &'f Formula<T>>,
    documentation: &'d Documentation,
) -> Annotated<'f, 'd, T>
where
    T: 'f,
{
    let mut seen = FxHashSet::default();
    let mut annotations = Vec::new();
    let mut collisions = Vec::new();

    for formula in formulas {
        let id = formula.documentation_id();
        if !seen.insert(id) {
            tracing::warn!(identifier = id, "formulas share a documentation identifier");
            collisions.push(formula);
            continue;
        }
        annotations.push(Annotation {
            formula,
            entry: documentation.get(id),
        });
    }

    Annotated {
        annotations,
        collisions,
    }
}
