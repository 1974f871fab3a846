//! Foundation helpers for the type-search toolchain.
//!
//! This module provides the small, dependency-free pieces every backend needs:
//! - [`Name`] - Cheap-to-clone type and member names
//! - [`eq_ignore_case`] - The one name comparison used by every assignability rule
//! - [`full_name`] - Namespace-qualified rendering of a type name
//! - [`pretty_name`] - The C#-style rendering queries are also matched against
//!
//! This module has NO dependencies on other typesearch modules.

mod names;
mod pretty;

pub use names::{Name, eq_ignore_case, full_name};
pub use pretty::{keyword_alias, pretty_name};
