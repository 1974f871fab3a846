use std::any::Any;
use std::fmt;
use std::sync::Weak;

use parking_lot::RwLock;

use super::context::{ContextData, Slot};
use crate::base::{Name, eq_ignore_case};
use crate::types::{MaterializedType, TypeIdentity, assignable_to_target};

/// A type bound in a [`LoadContext`](super::LoadContext).
///
/// Names are copied into the handle, so they stay readable after the context
/// is unloaded. Assignability does not: a handle whose context is gone is
/// assignable to nothing.
#[derive(Clone)]
pub struct RuntimeType {
    index: usize,
    namespace: Name,
    name: Name,
    full_name: Name,
    context: Weak<RwLock<ContextData>>,
}

impl RuntimeType {
    pub(crate) fn new(index: usize, slot: &Slot, context: Weak<RwLock<ContextData>>) -> Self {
        Self {
            index,
            namespace: slot.namespace.clone(),
            name: slot.name.clone(),
            full_name: slot.full_name.clone(),
            context,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// True while the owning context is loaded.
    pub fn is_live(&self) -> bool {
        self.context.strong_count() > 0
    }

    fn same_context(&self, other: &RuntimeType) -> bool {
        Weak::ptr_eq(&self.context, &other.context)
    }

    /// Native assignability against a single, non-disjunctive target.
    ///
    /// Same context: `target` is `self` or one of its base types or
    /// interfaces. Other context: same comparison by full name. Any other
    /// handle: bare-name comparison, ignoring case.
    fn accepts(&self, data: &ContextData, target: &dyn TypeIdentity) -> bool {
        let runtime_target = target.as_any().and_then(|any| any.downcast_ref::<RuntimeType>());
        match runtime_target {
            Some(other) if self.same_context(other) => {
                data.any_ancestor(self.index, |index, _| index == other.index)
            }
            Some(other) => {
                other.is_live()
                    && data.any_ancestor(self.index, |_, slot| slot.full_name == other.full_name)
            }
            None => data.any_ancestor(self.index, |_, slot| eq_ignore_case(&slot.name, target.name())),
        }
    }
}

impl TypeIdentity for RuntimeType {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_assignable_to(&self, target: &dyn TypeIdentity) -> bool {
        let Some(context) = self.context.upgrade() else {
            return false;
        };
        assignable_to_target(target, &mut |t| self.accepts(&context.read(), t))
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl MaterializedType for RuntimeType {
    fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl fmt::Debug for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_live() { "" } else { ", unloaded" };
        write!(f, "RuntimeType({}{state})", self.full_name)
    }
}
