// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The policy trait and all-must-allow aggregation.

use std::any::Any;
use std::sync::Arc;

use mct_extension::{BoundConstructor, Instance};

/// Decides whether `candidate` may be offered in `context`.
pub trait Policy<C, X>: Send + Sync {
    fn allow(&self, candidate: &C, context: &X) -> bool;
}

/// A policy as registered in the `policies` category, tagged with the
/// category it constrains.
pub struct PolicyEntry<C, X> {
    pub category: String,
    pub policy: Arc<dyn Policy<C, X>>,
}

impl<C, X> PolicyEntry<C, X> {
    pub fn new(category: impl Into<String>, policy: Arc<dyn Policy<C, X>>) -> Self {
        Self {
            category: category.into(),
            policy,
        }
    }
}

/// All policies for one category.
pub struct PolicyProvider<C, X> {
    category: String,
    policies: Vec<Arc<dyn Policy<C, X>>>,
}

impl<C: 'static, X: 'static> PolicyProvider<C, X> {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            policies: Vec::new(),
        }
    }

    /// Picks this category's entries out of a resolved `policies[]` list.
    ///
    /// Constructed extensions are instantiated first; a constructor failure
    /// is logged and that policy left out. Entries for other categories or
    /// candidate types are skipped.
    pub fn from_instances(category: impl Into<String>, instances: &[Instance]) -> Self {
        let mut provider = Self::new(category);
        for instance in instances {
            let instance = match instance.downcast_ref::<BoundConstructor>() {
                Some(bound) => match bound.construct() {
                    Ok(built) => built,
                    Err(e) => {
                        tracing::warn!(policy = bound.name(), error = %e, "could not instantiate policy");
                        continue;
                    }
                },
                None => instance.clone(),
            };
            match instance.downcast_ref::<PolicyEntry<C, X>>() {
                Some(entry) if entry.category == provider.category => {
                    provider.policies.push(Arc::clone(&entry.policy));
                }
                Some(_) => {}
                None => tracing::trace!(
                    category = %provider.category,
                    instance = instance.type_name(),
                    "not a policy for this category"
                ),
            }
        }
        tracing::debug!(
            category = %provider.category,
            count = provider.policies.len(),
            "policies collected"
        );
        provider
    }

    pub fn add(&mut self, policy: Arc<dyn Policy<C, X>>) {
        self.policies.push(policy);
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// True when every policy allows `candidate`. Vacuously true with none.
    pub fn allow(&self, candidate: &C, context: &X) -> bool {
        self.policies.iter().all(|p| p.allow(candidate, context))
    }
}

impl<C, X> Policy<C, X> for PolicyProvider<C, X>
where
    C: Any + Send + Sync,
    X: Any + Send + Sync,
{
    fn allow(&self, candidate: &C, context: &X) -> bool {
        PolicyProvider::allow(self, candidate, context)
    }
}
