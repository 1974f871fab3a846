//! # typesearch-base
//!
//! Type-directed member search: given the types you hold and the type you
//! want, find the fields, properties, methods and constructors that get you
//! there.
//!
//! Every public member of a corpus becomes a [`Formula`]: it consumes its
//! ingredient types (the receiver first, for instance members) and produces
//! its result type. A query is a basket of input types plus one target;
//! [`search::lookup`] keeps the formulas whose arity equals the basket, whose
//! result is assignable to the target, and whose slots the basket can claim
//! greedily in order.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON/YAML images, XML docs, ZIP packages (feature-gated I/O)
//!   ↓
//! docs        → Documentation model, formula annotation
//!   ↓
//! inspect     → Static backend: lazy resolution, MetadataCorpus
//! runtime     → Load-context backend: eager binding, unloadable Package
//!   ↓
//! corpus      → Corpus trait, query-name rule, options, StubCorpus
//! search      → lookup (greedy, arity-exact), Query
//!   ↓
//! metadata    → Image / TypeDef model the backends read
//! formula     → Formula<T>, FormulaKind, documentation identifiers
//!   ↓
//! types       → TypeIdentity, MaterializedType, Disjunctive, StubType
//!   ↓
//! base        → Names, case-insensitive comparison, pretty aliases
//! ```

// ============================================================================
// MODULES (dependency order: base → types → formula → search/corpus → backends)
// ============================================================================

/// Foundation: names, case-insensitive comparison, keyword aliases
pub mod base;

/// Type identity and assignability
pub mod types;

/// Members as formulas: ingredients, result, documentation identifier
pub mod formula;

/// In-memory metadata images
pub mod metadata;

/// Corpus contract and aggregation options
pub mod corpus;

/// The matching engine and the query shape
pub mod search;

/// Static-metadata backend
pub mod inspect;

/// Load-context backend with guaranteed unload
pub mod runtime;

/// External documentation and its pairing with formulas
pub mod docs;

/// Image, documentation and package formats
pub mod interchange;

// Re-export the engine surface
pub use corpus::{Corpus, CorpusOptions, InterfaceWalk};
pub use formula::{Formula, FormulaKind};
pub use search::{Query, QueryError, lookup};
pub use types::{Disjunctive, MaterializedType, TypeIdentity};

// Re-export foundation types
pub use base::Name;
