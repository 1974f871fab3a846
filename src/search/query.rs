//! The query shape consumed by every front end.
//!
//! A query is zero or more input type names followed by exactly one output
//! type name: `Int32 String Foo` asks for members consuming an `Int32` and a
//! `String` that produce a `Foo`. Input order is significant; it becomes the
//! basket order the greedy matcher walks.

use std::str::FromStr;

use thiserror::Error;

use crate::base::Name;
use crate::corpus::Corpus;
use crate::types::{Disjunctive, TypeIdentity};

/// Errors from building a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No words at all: there is nothing to use as the output type.
    #[error("query names no output type")]
    MissingTarget,
}

/// Unresolved query text: basket names and a target name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    basket: Vec<Name>,
    target: Name,
}

impl Query {
    pub fn new<I, S>(basket: I, target: impl Into<Name>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Name>,
    {
        Self {
            basket: basket.into_iter().map(Into::into).collect(),
            target: target.into(),
        }
    }

    /// Split a word list into basket (all but the last) and target (the last).
    ///
    /// Blank words are ignored.
    pub fn parse<I, S>(words: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut basket: Vec<Name> = words
            .into_iter()
            .map(|word| Name::new(word.as_ref().trim()))
            .filter(|word| !word.is_empty())
            .collect();
        let target = basket.pop().ok_or(QueryError::MissingTarget)?;
        Ok(Self { basket, target })
    }

    pub fn basket(&self) -> &[Name] {
        &self.basket
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Resolve every name through the corpus.
    ///
    /// Unknown names resolve to the "never" type rather than failing, so a
    /// resolved query is always safe to hand to the matcher.
    pub fn resolve<C: Corpus>(&self, corpus: &C) -> ResolvedQuery<C::Type> {
        ResolvedQuery {
            basket: self
                .basket
                .iter()
                .map(|name| corpus.type_from_query(name))
                .collect(),
            target: corpus.type_from_query(&self.target),
        }
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.split_whitespace())
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for name in &self.basket {
            write!(f, "{name} ")?;
        }
        write!(f, "-> {}", self.target)
    }
}

/// A query whose names have been resolved to type handles.
#[derive(Clone, Debug)]
pub struct ResolvedQuery<T> {
    basket: Vec<Disjunctive<T>>,
    target: Disjunctive<T>,
}

impl<T: TypeIdentity> ResolvedQuery<T> {
    pub fn basket(&self) -> &[Disjunctive<T>] {
        &self.basket
    }

    pub fn target(&self) -> &Disjunctive<T> {
        &self.target
    }

    /// Names that matched no type in the corpus.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.basket
            .iter()
            .chain(std::iter::once(&self.target))
            .filter(|t| t.is_empty())
            .map(|t| t.name())
    }
}
