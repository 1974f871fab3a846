//! The resolution scope shared by every handle of one corpus.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::base::{Name, eq_ignore_case};
use crate::corpus::InterfaceWalk;
use crate::metadata::{TypeDef, TypeRef};

/// Where a type definition came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Origin {
    /// An image whose members were extracted.
    Primary,
    /// An image loaded only so references into it resolve.
    Reference,
}

/// A type reference as written in metadata: both names, no binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Reference {
    pub name: Name,
    pub full_name: Name,
}

impl From<&TypeRef> for Reference {
    fn from(r: &TypeRef) -> Self {
        Self {
            name: Name::new(&r.name),
            full_name: r.full_name(),
        }
    }
}

/// A type definition as the scope stores it.
#[derive(Debug)]
pub(crate) struct TypeNode {
    pub namespace: Name,
    pub name: Name,
    pub full_name: Name,
    pub public: bool,
    pub origin: Origin,
    pub base: Option<Reference>,
    pub interfaces: Vec<Reference>,
}

impl TypeNode {
    pub fn from_def(def: &TypeDef, origin: Origin) -> Self {
        Self {
            namespace: Name::new(&def.namespace),
            name: Name::new(&def.name),
            full_name: def.full_name(),
            public: def.is_public(),
            origin,
            base: def.base.as_ref().map(Reference::from),
            interfaces: def.interfaces.iter().map(Reference::from).collect(),
        }
    }
}

type TypeTable = IndexMap<Name, Arc<TypeNode>, FxBuildHasher>;

/// Every type definition loaded into one corpus, by full name.
///
/// References are bound against this table when they are first used, not
/// when they are read, so an image may refer to types that only arrive in a
/// later image.
#[derive(Debug)]
pub(crate) struct Scope {
    types: RwLock<TypeTable>,
    walk: InterfaceWalk,
}

impl Scope {
    pub fn new(walk: InterfaceWalk) -> Self {
        Self {
            types: RwLock::new(TypeTable::default()),
            walk,
        }
    }

    /// Register a definition. The first definition of a full name wins.
    pub fn define(&self, node: TypeNode) -> Arc<TypeNode> {
        let mut types = self.types.write();
        if let Some(existing) = types.get(&node.full_name) {
            tracing::debug!(
                full_name = %node.full_name,
                "duplicate type definition ignored"
            );
            return existing.clone();
        }
        let node = Arc::new(node);
        types.insert(node.full_name.clone(), node.clone());
        node
    }

    pub fn get(&self, full_name: &str) -> Option<Arc<TypeNode>> {
        self.types.read().get(full_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    /// Snapshot of the definitions satisfying `keep`, in load order.
    pub fn select(&self, mut keep: impl FnMut(&TypeNode) -> bool) -> Vec<Arc<TypeNode>> {
        self.types
            .read()
            .values()
            .filter(|node| keep(node))
            .cloned()
            .collect()
    }

    /// The static assignability rule.
    ///
    /// Walks `start` and its base chain. At each ancestor the ancestor's own
    /// name and the names of its declared interfaces are compared with
    /// `target`. The base chain stops at the first reference that does not
    /// resolve, and at a repeated type in a malformed cyclic chain.
    pub fn accepts(&self, start: &Arc<TypeNode>, target: &str) -> bool {
        let mut visited = FxHashSet::default();
        let mut current = Some(start.clone());

        while let Some(node) = current {
            if !visited.insert(node.full_name.clone()) {
                tracing::trace!(full_name = %node.full_name, "cyclic base chain");
                break;
            }
            if eq_ignore_case(&node.name, target) || self.interfaces_accept(&node, target) {
                return true;
            }
            current = node.base.as_ref().and_then(|base| self.get(&base.full_name));
        }
        false
    }

    fn interfaces_accept(&self, node: &TypeNode, target: &str) -> bool {
        match self.walk {
            InterfaceWalk::Direct => node
                .interfaces
                .iter()
                .any(|interface| eq_ignore_case(&interface.name, target)),
            InterfaceWalk::Transitive => {
                let mut seen = FxHashSet::default();
                let mut pending: Vec<Reference> = node.interfaces.clone();
                while let Some(interface) = pending.pop() {
                    if !seen.insert(interface.full_name.clone()) {
                        continue;
                    }
                    if eq_ignore_case(&interface.name, target) {
                        return true;
                    }
                    if let Some(resolved) = self.get(&interface.full_name) {
                        pending.extend(resolved.interfaces.iter().cloned());
                    }
                }
                false
            }
        }
    }
}
