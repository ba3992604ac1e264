// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-stage construction of extension instances.
//!
//! The injector supplies an extension's declared dependencies when the
//! provider is resolved; callers supply per-instance arguments later (an
//! action's context, a capability's domain object). The constructor itself
//! receives one flat argument list and never distinguishes the two.

use std::sync::Arc;

use mct_core::MctError;

use crate::extension::{Constructor, Definition};
use crate::instance::Instance;

/// A constructor waiting for its injected dependencies.
#[derive(Clone)]
pub struct PartialConstructor {
    name: String,
    definition: Arc<Definition>,
    constructor: Constructor,
}

impl PartialConstructor {
    pub fn new(name: impl Into<String>, definition: Definition, constructor: Constructor) -> Self {
        Self {
            name: name.into(),
            definition: Arc::new(definition),
            constructor,
        }
    }

    /// Binds the first argument set.
    pub fn with_dependencies(&self, dependencies: Vec<Instance>) -> BoundConstructor {
        BoundConstructor {
            name: self.name.clone(),
            definition: Arc::clone(&self.definition),
            constructor: Arc::clone(&self.constructor),
            dependencies,
        }
    }
}

/// A constructor with its dependencies bound, waiting for instance arguments.
///
/// This is what a constructed extension's provider resolves to.
#[derive(Clone)]
pub struct BoundConstructor {
    name: String,
    definition: Arc<Definition>,
    constructor: Constructor,
    dependencies: Vec<Instance>,
}

impl BoundConstructor {
    /// Registration name of the extension this constructor came from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The extension's declared fields, readable without constructing.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Constructs a new instance from `dependencies ++ args`.
    pub fn with_instance_args(&self, args: Vec<Instance>) -> Result<Instance, MctError> {
        let mut all = Vec::with_capacity(self.dependencies.len() + args.len());
        all.extend(self.dependencies.iter().cloned());
        all.extend(args);

        (self.constructor)(&*self.definition, all).map_err(|e| match e {
            MctError::Construction { .. } => e,
            other => MctError::Construction {
                name: self.name.clone(),
                message: other.to_string(),
            },
        })
    }

    /// Constructs with no instance arguments.
    pub fn construct(&self) -> Result<Instance, MctError> {
        self.with_instance_args(Vec::new())
    }
}

impl std::fmt::Debug for BoundConstructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundConstructor")
            .field("name", &self.name)
            .field("dependencies", &self.dependencies.len())
            .finish()
    }
}
