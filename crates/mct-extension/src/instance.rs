// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-erased values handed out by the injector.

use std::any::Any;
use std::sync::Arc;

/// A shared, resolved value of any concrete type.
///
/// Cloning is cheap: clones point at the same allocation, so a provider
/// resolved once is observed identically by every dependent.
#[derive(Clone)]
pub struct Instance {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Instance {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrows the value as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns a shared handle to the value as `T`, if it is one.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Name of the concrete type stored in this instance.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True if both instances share the same allocation.
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    /// Convenience accessor for aggregate (`category[]`) instances.
    pub fn as_list(&self) -> Option<&Vec<Instance>> {
        self.downcast_ref::<Vec<Instance>>()
    }

    /// Convenience accessor for static JSON definitions.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        self.downcast_ref::<serde_json::Value>()
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Instance").field(&self.type_name).finish()
    }
}
