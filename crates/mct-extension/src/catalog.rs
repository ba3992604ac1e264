// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compiled-in implementations that bundle definitions can name.
//!
//! A definition carrying `implementation = "CopyPolicy"` becomes a
//! constructed extension when the catalog knows that name. No code is ever
//! loaded at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use mct_core::MctError;

use crate::extension::{Constructor, Definition, Extension, ExtensionKind};
use crate::instance::Instance;

/// Implementation name to constructor lookup.
#[derive(Clone, Default)]
pub struct ImplementationCatalog {
    constructors: HashMap<String, Constructor>,
}

impl ImplementationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an implementation.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn(&Definition, Vec<Instance>) -> Result<Instance, MctError> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Arc::new(constructor));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// All implementation names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Turns a declared definition into an extension.
    ///
    /// Definitions naming an unknown implementation are kept as static values
    /// so the rest of the bundle still registers.
    pub fn resolve(&self, category: &str, definition: Definition) -> Extension {
        let Some(implementation) = definition.get_str("implementation").map(str::to_owned) else {
            return Extension::from_definition(definition);
        };

        match self.constructors.get(&implementation) {
            Some(constructor) => {
                Extension::new(definition, ExtensionKind::Constructed(Arc::clone(constructor)))
            }
            None => {
                tracing::warn!(
                    category,
                    implementation = %implementation,
                    "could not find implementation; registering the definition as a static value"
                );
                Extension::from_definition(definition)
            }
        }
    }
}

impl std::fmt::Debug for ImplementationCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImplementationCatalog")
            .field("implementations", &self.names())
            .finish()
    }
}
