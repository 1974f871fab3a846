//! Corpus aggregation.
//!
//! A corpus is everything one search runs against: the formulas of one or
//! more extraction passes plus a way to turn free-text type names into type
//! handles. Each backend provides its own aggregator:
//!
//! ```text
//! ┌─────────────────┐  ┌──────────────────┐  ┌──────────────┐
//! │ MetadataCorpus  │  │ runtime::Package │  │  StubCorpus  │
//! │ (static images) │  │ (load context)   │  │  (fixtures)  │
//! └────────┬────────┘  └────────┬─────────┘  └──────┬───────┘
//!          └────────────────────┼───────────────────┘
//!                               ▼
//!                 Corpus { formulas(), type_from_query() }
//!                               │
//!                               ▼
//!                   search::lookup(formulas, basket, target)
//! ```
//!
//! Aggregators are mutated (`add_image`, disposal) from one thread at a time;
//! once loading is finished, concurrent reads are fine.

mod options;
mod stub;

use crate::base::{eq_ignore_case, pretty_name};
use crate::formula::Formula;
use crate::types::{Disjunctive, MaterializedType};

pub use options::{CorpusOptions, InterfaceWalk};
pub use stub::StubCorpus;

/// What the matching engine needs from a backend.
pub trait Corpus {
    /// The backend's materialized type handle.
    type Type: MaterializedType + Clone;

    /// Every formula extracted so far, in extraction order.
    fn formulas(&self) -> &[Formula<Self::Type>];

    /// Resolve free text to every public type it names.
    ///
    /// Never fails: an unknown name yields an empty disjunction.
    fn type_from_query(&self, text: &str) -> Disjunctive<Self::Type>;
}

/// The query-matching rule shared by every backend.
///
/// A type matches when `text` equals, ignoring case, either its bare name or
/// its pretty rendering (`int` for `System.Int32`, `System.Text.StringBuilder`).
pub fn matches_query(namespace: &str, name: &str, text: &str) -> bool {
    let text = text.trim();
    eq_ignore_case(name, text) || eq_ignore_case(&pretty_name(namespace, name), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("System", "String", "string", true)]
    #[case("System", "String", "STRING", true)]
    #[case("System", "Int32", "int", true)]
    #[case("System", "Int32", "Int32", true)]
    #[case("System.Text", "StringBuilder", "System.Text.StringBuilder", true)]
    #[case("System.Text", "StringBuilder", "Text.StringBuilder", false)]
    #[case("Acme", "Int32", "int", false)]
    #[case("System", "Int32", "System.Int32", false)]
    fn test_matches_query(
        #[case] namespace: &str,
        #[case] name: &str,
        #[case] text: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matches_query(namespace, name, text), expected);
    }
}
