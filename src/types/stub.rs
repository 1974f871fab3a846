//! Name-only type handles for fixtures and tests.

use super::{MaterializedType, TypeIdentity, assignable_to_target};
use crate::base::{Name, eq_ignore_case, full_name};

/// A type known only by name.
///
/// Assignability is case-insensitive bare-name equality: there is no
/// hierarchy to walk. Disjunctive targets still distribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StubType {
    name: Name,
    full_name: Name,
}

impl StubType {
    /// A type in the global namespace.
    pub fn new(name: impl Into<Name>) -> Self {
        let name = name.into();
        Self {
            full_name: name.clone(),
            name,
        }
    }

    /// A type in `namespace`.
    pub fn qualified(namespace: &str, name: impl Into<Name>) -> Self {
        let name = name.into();
        Self {
            full_name: full_name(namespace, &name),
            name,
        }
    }

    /// The namespace portion of the full name (empty for global types).
    pub fn namespace(&self) -> &str {
        self.full_name
            .strip_suffix(self.name.as_str())
            .and_then(|prefix| prefix.strip_suffix('.'))
            .unwrap_or("")
    }
}

impl TypeIdentity for StubType {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_assignable_to(&self, target: &dyn TypeIdentity) -> bool {
        assignable_to_target(target, &mut |t| eq_ignore_case(&self.name, t.name()))
    }
}

impl MaterializedType for StubType {
    fn full_name(&self) -> &str {
        &self.full_name
    }
}
