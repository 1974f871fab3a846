//! Type identity and assignability.
//!
//! Every source of type information (static metadata inspection, an isolated
//! load context, test stubs) answers the same two questions through
//! [`TypeIdentity`]: what is this type called, and may a value of it be used
//! where `target` is expected.
//!
//! ```text
//! TypeIdentity            name(), is_assignable_to()
//!   ├── MaterializedType  + full_name()          (InspectType, RuntimeType, StubType)
//!   └── Disjunctive<T>    "any of these N types"  (query results)
//! ```
//!
//! Assignability is NOT equality. Concrete backends walk a type's ancestry
//! and compare bare names case-insensitively. A disjunction on either side
//! distributes: it is assignable if any candidate is, and a concrete type is
//! assignable to it if it is assignable to any candidate. A disjunction with
//! no candidates is the total "never" type.

mod disjunctive;
mod stub;

use std::any::Any;
use std::fmt;

pub use disjunctive::Disjunctive;
pub use stub::StubType;

/// A handle that can answer "is this type assignable to that one".
pub trait TypeIdentity: fmt::Debug {
    /// The bare (unqualified) type name.
    fn name(&self) -> &str;

    /// True when a value of `self` may be used where `target` is expected.
    fn is_assignable_to(&self, target: &dyn TypeIdentity) -> bool;

    /// Visit the candidates of a disjunctive handle until `visit` returns true.
    ///
    /// Returns `None` for concrete handles, `Some(found)` for disjunctions.
    fn any_candidate(&self, _visit: &mut dyn FnMut(&dyn TypeIdentity) -> bool) -> Option<bool> {
        None
    }

    /// Expose the concrete handle so a backend can recognize its own types.
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }
}

/// A concrete type with a stable, namespace-qualified name.
///
/// Full names feed documentation identifiers, so they must be deterministic.
pub trait MaterializedType: TypeIdentity {
    /// The namespace-qualified name (`System.String`).
    fn full_name(&self) -> &str;

    /// The name written into documentation identifiers.
    ///
    /// Same as [`full_name`](Self::full_name) unless a backend can name a
    /// type it has not bound yet.
    fn documentation_name(&self) -> &str {
        self.full_name()
    }
}

/// Apply a concrete backend's check against `target`, distributing over
/// disjunctive targets.
///
/// Concrete backends implement [`TypeIdentity::is_assignable_to`] as
/// `assignable_to_target(target, &mut |t| self.native_check(t))`, so the
/// disjunction rule lives in one place.
pub fn assignable_to_target(
    target: &dyn TypeIdentity,
    concrete: &mut dyn FnMut(&dyn TypeIdentity) -> bool,
) -> bool {
    let expanded = target.any_candidate(&mut |candidate| assignable_to_target(candidate, concrete));
    match expanded {
        Some(found) => found,
        None => concrete(target),
    }
}

impl<T: TypeIdentity + ?Sized> TypeIdentity for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_assignable_to(&self, target: &dyn TypeIdentity) -> bool {
        (**self).is_assignable_to(target)
    }

    fn any_candidate(&self, visit: &mut dyn FnMut(&dyn TypeIdentity) -> bool) -> Option<bool> {
        (**self).any_candidate(visit)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        (**self).as_any()
    }
}

impl<T: MaterializedType + ?Sized> MaterializedType for &T {
    fn full_name(&self) -> &str {
        (**self).full_name()
    }

    fn documentation_name(&self) -> &str {
        (**self).documentation_name()
    }
}

#[cfg(test)]
mod tests;
