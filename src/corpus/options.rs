//! Corpus configuration.

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

/// How far the static-metadata backend follows interface declarations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum InterfaceWalk {
    /// Only interfaces declared directly on each ancestor are compared.
    #[default]
    Direct,
    /// Interfaces are followed through their own base interfaces as well.
    Transitive,
}

/// Options shared by the corpus aggregators.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct CorpusOptions {
    /// Interface walk used by static-metadata assignability.
    pub interface_walk: InterfaceWalk,

    /// Whether reference images (added for resolution only) answer queries.
    pub include_references_in_queries: bool,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            interface_walk: InterfaceWalk::Direct,
            include_references_in_queries: true,
        }
    }
}

impl CorpusOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interface walk.
    pub fn with_interface_walk(mut self, walk: InterfaceWalk) -> Self {
        self.interface_walk = walk;
        self
    }

    /// Choose whether reference images answer queries.
    pub fn with_references_in_queries(mut self, include: bool) -> Self {
        self.include_references_in_queries = include;
        self
    }
}
