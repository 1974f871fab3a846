use std::fmt;
use std::sync::{Arc, OnceLock};

use super::scope::{Scope, TypeNode};
use crate::base::Name;
use crate::types::{MaterializedType, TypeIdentity, assignable_to_target};

/// A type handle from static metadata.
///
/// A handle is a reference by full name plus the scope to bind it in.
/// Binding happens on first use and is cached once it succeeds. A handle
/// whose reference never binds is the unresolved type: its names are empty
/// and it is assignable to nothing.
#[derive(Clone)]
pub struct InspectType {
    reference: Name,
    node: OnceLock<Arc<TypeNode>>,
    scope: Arc<Scope>,
}

impl InspectType {
    pub(crate) fn bound(node: Arc<TypeNode>, scope: Arc<Scope>) -> Self {
        Self {
            reference: node.full_name.clone(),
            node: OnceLock::from(node),
            scope,
        }
    }

    pub(crate) fn reference(full_name: Name, scope: Arc<Scope>) -> Self {
        Self {
            reference: full_name,
            node: OnceLock::new(),
            scope,
        }
    }

    fn node(&self) -> Option<&Arc<TypeNode>> {
        if let Some(node) = self.node.get() {
            return Some(node);
        }
        let found = self.scope.get(&self.reference)?;
        Some(self.node.get_or_init(|| found))
    }

    /// True once the reference binds to a definition.
    pub fn is_resolved(&self) -> bool {
        self.node().is_some()
    }

    /// The full name this handle refers to, bound or not.
    pub fn referenced_name(&self) -> &str {
        &self.reference
    }

    pub fn namespace(&self) -> &str {
        self.node().map_or("", |node| node.namespace.as_str())
    }
}

impl TypeIdentity for InspectType {
    fn name(&self) -> &str {
        self.node().map_or("", |node| node.name.as_str())
    }

    fn is_assignable_to(&self, target: &dyn TypeIdentity) -> bool {
        let Some(node) = self.node() else {
            return false;
        };
        assignable_to_target(target, &mut |t| self.scope.accepts(node, t.name()))
    }
}

impl MaterializedType for InspectType {
    fn full_name(&self) -> &str {
        self.node().map_or("", |node| node.full_name.as_str())
    }

    /// The referenced name, so identifiers do not depend on load order.
    fn documentation_name(&self) -> &str {
        &self.reference
    }
}

impl fmt::Debug for InspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_resolved() {
            write!(f, "InspectType({})", self.reference)
        } else {
            write!(f, "InspectType(<unresolved {}>)", self.reference)
        }
    }
}
