// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dependency-injection container seam and the default on-demand injector.
//!
//! The registrar only ever calls [`Container::factory`]. The [`Injector`]
//! stores each [`Provider`] by name and resolves it lazily the first time it
//! (or something depending on it) is requested, caching the result.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use mct_core::MctError;

use crate::instance::Instance;

/// Builds a provider's value from its resolved dependencies, in declared order.
pub type ProviderFn = Arc<dyn Fn(Vec<Instance>) -> Result<Instance, MctError> + Send + Sync>;

/// A named registration: dependency names plus a factory over their values.
#[derive(Clone)]
pub struct Provider {
    depends: Vec<String>,
    factory: ProviderFn,
}

impl Provider {
    pub fn new<F>(depends: Vec<String>, factory: F) -> Self
    where
        F: Fn(Vec<Instance>) -> Result<Instance, MctError> + Send + Sync + 'static,
    {
        Self {
            depends,
            factory: Arc::new(factory),
        }
    }

    /// A dependency-free provider that always yields `instance`.
    pub fn value(instance: Instance) -> Self {
        Self::new(Vec::new(), move |_| Ok(instance.clone()))
    }

    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    pub fn invoke(&self, dependencies: Vec<Instance>) -> Result<Instance, MctError> {
        (self.factory)(dependencies)
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("depends", &self.depends)
            .finish_non_exhaustive()
    }
}

/// Anything extensions can be registered into.
pub trait Container {
    /// Registers `provider` under `name`.
    fn factory(&mut self, name: &str, provider: Provider);
}

/// Name-keyed provider registry with memoized, on-demand resolution.
#[derive(Debug, Default)]
pub struct Injector {
    providers: HashMap<String, Provider>,
    instances: HashMap<String, Instance>,
}

impl Injector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Returns the declared dependencies of a registered provider.
    pub fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.providers.get(name).map(Provider::depends)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolves `name`, building its dependencies first.
    pub fn resolve(&mut self, name: &str) -> Result<Instance, MctError> {
        let mut path = Vec::new();
        self.resolve_from(name, None, &mut path)
    }

    /// Resolves `name` and downcasts it to `T`.
    pub fn resolve_as<T: Any + Send + Sync>(&mut self, name: &str) -> Result<Arc<T>, MctError> {
        self.resolve(name)?
            .downcast::<T>()
            .ok_or_else(|| MctError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    fn resolve_from(
        &mut self,
        name: &str,
        required_by: Option<&str>,
        path: &mut Vec<String>,
    ) -> Result<Instance, MctError> {
        if let Some(instance) = self.instances.get(name) {
            return Ok(instance.clone());
        }

        if path.iter().any(|p| p == name) {
            path.push(name.to_string());
            return Err(MctError::CircularDependency {
                chain: path.join(" -> "),
            });
        }

        let provider = self
            .providers
            .get(name)
            .cloned()
            .ok_or_else(|| MctError::UnknownProvider {
                name: name.to_string(),
                required_by: required_by.map(str::to_owned),
            })?;

        path.push(name.to_string());
        let dependencies = provider
            .depends()
            .iter()
            .map(|dep| self.resolve_from(dep, Some(name), path))
            .collect::<Result<Vec<_>, _>>()?;
        path.pop();

        let instance = provider.invoke(dependencies)?;
        tracing::trace!(name, value = instance.type_name(), "provider resolved");
        self.instances.insert(name.to_string(), instance.clone());
        Ok(instance)
    }
}

impl Container for Injector {
    fn factory(&mut self, name: &str, provider: Provider) {
        if self.providers.insert(name.to_string(), provider).is_some() {
            tracing::debug!(name, "provider replaced");
            self.instances.remove(name);
        }
    }
}
