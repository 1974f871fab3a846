//! Isolated load contexts.

use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashSet};

use super::{LoadError, RuntimeType};
use crate::base::Name;
use crate::metadata::{Image, TypeDef, TypeRef};

/// Whether a loaded image contributes formulas or only resolves references.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Primary,
    Reference,
}

#[derive(Debug)]
pub(crate) struct Definition {
    pub public: bool,
    pub role: Role,
    pub base: Option<usize>,
    pub interfaces: Vec<usize>,
}

/// One bound type. A slot exists as soon as any loaded image mentions the
/// type; `definition` is filled in when the defining image loads.
#[derive(Debug)]
pub(crate) struct Slot {
    pub namespace: Name,
    pub name: Name,
    pub full_name: Name,
    pub definition: Option<Definition>,
}

#[derive(Debug)]
pub(crate) struct ContextData {
    types: IndexMap<Name, Slot, FxBuildHasher>,
}

pub(crate) type SharedData = Arc<RwLock<ContextData>>;

impl ContextData {
    fn new() -> Self {
        Self {
            types: IndexMap::default(),
        }
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.types.get_index(index).map(|(_, slot)| slot)
    }

    pub fn slots(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.types.values().enumerate()
    }

    pub fn index_of(&self, full_name: &str) -> Option<usize> {
        self.types.get_index_of(full_name)
    }

    fn bind(&mut self, reference: &TypeRef) -> usize {
        let full = reference.full_name();
        if let Some(index) = self.types.get_index_of(&full) {
            return index;
        }
        let slot = Slot {
            namespace: Name::new(&reference.namespace),
            name: Name::new(&reference.name),
            full_name: full.clone(),
            definition: None,
        };
        self.types.insert_full(full, slot).0
    }

    /// Reject the batch if any type is already defined or defined twice.
    fn check_loadable(&self, images: &[Image], context: &str) -> Result<(), LoadError> {
        let mut seen = FxHashSet::default();
        for (image, def) in images.iter().flat_map(|i| i.types.iter().map(move |d| (i, d))) {
            let full = def.full_name();
            let already_defined = self
                .types
                .get(&full)
                .is_some_and(|slot| slot.definition.is_some());
            if already_defined || !seen.insert(full.clone()) {
                return Err(LoadError::DuplicateType {
                    image: image.name.clone(),
                    full_name: full.to_string(),
                    context: context.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Bind every type the images define or mention, member signatures
    /// included. Nothing is changed if any image is rejected.
    fn load(
        &mut self,
        images: &[Image],
        role: Role,
        context: &str,
    ) -> Result<Vec<Vec<usize>>, LoadError> {
        self.check_loadable(images, context)?;
        let mut defined = Vec::with_capacity(images.len());
        for image in images {
            let mut indices = Vec::with_capacity(image.types.len());
            for def in &image.types {
                let index = self.bind(&def.reference());
                let definition = self.bind_definition(def, role);
                if let Some((_, slot)) = self.types.get_index_mut(index) {
                    slot.definition = Some(definition);
                }
                for reference in def.signature_types() {
                    self.bind(reference);
                }
                indices.push(index);
            }
            defined.push(indices);
        }
        Ok(defined)
    }

    fn bind_definition(&mut self, def: &TypeDef, role: Role) -> Definition {
        Definition {
            public: def.is_public(),
            role,
            base: def.base.as_ref().map(|base| self.bind(base)),
            interfaces: def.interfaces.iter().map(|i| self.bind(i)).collect(),
        }
    }

    /// True when `pred` holds for `start` or anything it derives from or
    /// implements, following base types and interfaces transitively.
    pub fn any_ancestor(&self, start: usize, mut pred: impl FnMut(usize, &Slot) -> bool) -> bool {
        let mut visited = FxHashSet::default();
        let mut pending = vec![start];
        while let Some(index) = pending.pop() {
            if !visited.insert(index) {
                continue;
            }
            let Some(slot) = self.slot(index) else {
                continue;
            };
            if pred(index, slot) {
                return true;
            }
            if let Some(definition) = &slot.definition {
                pending.extend(definition.base);
                pending.extend(definition.interfaces.iter().copied());
            }
        }
        false
    }
}

/// An isolated, unloadable set of bound types.
///
/// Handles created from a context hold only a weak reference to it. Once the
/// context is unloaded the bound tables are freed and every handle goes
/// inert.
#[derive(Debug)]
pub struct LoadContext {
    name: Name,
    data: Option<SharedData>,
}

impl LoadContext {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            data: Some(Arc::new(RwLock::new(ContextData::new()))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_unloaded(&self) -> bool {
        self.data.is_none()
    }

    /// A weak observer of this context's lifetime.
    pub fn probe(&self) -> UnloadProbe {
        UnloadProbe {
            data: self.data.as_ref().map_or_else(Weak::new, Arc::downgrade),
        }
    }

    /// Load `images` as one batch: all of them or none.
    pub(crate) fn load(
        &self,
        images: &[Image],
        role: Role,
    ) -> Result<Vec<Vec<RuntimeType>>, LoadError> {
        let data = self.live()?;
        let batches = data.write().load(images, role, &self.name)?;
        Ok(batches
            .into_iter()
            .map(|indices| {
                indices
                    .into_iter()
                    .filter_map(|i| self.handle_in(data, i))
                    .collect()
            })
            .collect())
    }

    fn handle_in(&self, data: &SharedData, index: usize) -> Option<RuntimeType> {
        let guard = data.read();
        let slot = guard.slot(index)?;
        Some(RuntimeType::new(index, slot, Arc::downgrade(data)))
    }

    /// Handles for every defined type satisfying `keep`, in bind order.
    pub(crate) fn defined_types(
        &self,
        mut keep: impl FnMut(&Slot, &Definition) -> bool,
    ) -> Vec<RuntimeType> {
        let Some(data) = &self.data else {
            return Vec::new();
        };
        let guard = data.read();
        guard
            .slots()
            .filter(|(_, slot)| slot.definition.as_ref().is_some_and(|d| keep(slot, d)))
            .map(|(index, slot)| RuntimeType::new(index, slot, Arc::downgrade(data)))
            .collect()
    }

    /// A handle for a type by full name, if anything in the context mentions it.
    pub fn type_named(&self, qualified: &str) -> Option<RuntimeType> {
        let data = self.data.as_ref()?;
        let index = data.read().index_of(qualified)?;
        self.handle_in(data, index)
    }

    fn live(&self) -> Result<&SharedData, LoadError> {
        self.data
            .as_ref()
            .ok_or_else(|| LoadError::Unloaded(self.name.to_string()))
    }

    /// Release the bound tables. Idempotent.
    pub fn unload(&mut self) {
        if let Some(data) = self.data.take() {
            let types = data.read().types.len();
            drop(data);
            tracing::debug!(context = %self.name, types, "load context unloaded");
        }
    }
}

impl Drop for LoadContext {
    fn drop(&mut self) {
        self.unload();
    }
}

/// Observes whether a [`LoadContext`]'s tables are still alive.
#[derive(Clone, Debug)]
pub struct UnloadProbe {
    data: Weak<RwLock<ContextData>>,
}

impl UnloadProbe {
    pub fn is_unloaded(&self) -> bool {
        self.data.strong_count() == 0
    }
}
