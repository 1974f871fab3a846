//! An in-memory corpus of stub types, for fixtures and tests.

use super::{Corpus, matches_query};
use crate::base::Name;
use crate::formula::Formula;
use crate::types::{Disjunctive, StubType, TypeIdentity};

/// A hand-built corpus: formulas and the types queries can name.
#[derive(Clone, Debug, Default)]
pub struct StubCorpus {
    types: Vec<StubType>,
    formulas: Vec<Formula<StubType>>,
}

impl StubCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type so queries can resolve to it.
    pub fn add_type(&mut self, ty: StubType) -> &mut Self {
        if !self.types.contains(&ty) {
            self.types.push(ty);
        }
        self
    }

    /// Add a formula, registering the types it mentions.
    pub fn add_formula(&mut self, formula: Formula<StubType>) -> &mut Self {
        self.add_type(formula.declaring_type().clone());
        self.add_type(formula.result().clone());
        for ingredient in formula.ingredients() {
            self.add_type(ingredient.clone());
        }
        self.formulas.push(formula);
        self
    }

    /// Builder form of [`add_formula`](Self::add_formula).
    pub fn with_formula(mut self, formula: Formula<StubType>) -> Self {
        self.add_formula(formula);
        self
    }

    pub fn types(&self) -> &[StubType] {
        &self.types
    }
}

impl Corpus for StubCorpus {
    type Type = StubType;

    fn formulas(&self) -> &[Formula<StubType>] {
        &self.formulas
    }

    fn type_from_query(&self, text: &str) -> Disjunctive<StubType> {
        let candidates = self
            .types
            .iter()
            .filter(|ty| matches_query(ty.namespace(), ty.name(), text))
            .cloned()
            .collect();
        Disjunctive::new(Name::new(text), candidates)
    }
}
