// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The extension model: declared definitions plus a constructed or static body.

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;
use mct_core::MctError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::instance::Instance;

/// Builds an extension instance from its definition and the concatenation of
/// injected dependencies and per-instance arguments.
pub type Constructor =
    Arc<dyn Fn(&Definition, Vec<Instance>) -> Result<Instance, MctError> + Send + Sync>;

/// Extensions grouped by category, in declaration order.
pub type ExtensionGroup = IndexMap<String, Vec<Extension>>;

/// The declared fields of an extension (`key`, `depends`, `priority`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Definition(Map<String, Value>);

impl Definition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a definition from a JSON object.
    pub fn from_value(value: Value) -> Result<Self, MctError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(MctError::Config(format!(
                "extension definition must be a table, got {other}"
            ))),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn key(&self) -> Option<&str> {
        self.get_str("key")
    }

    /// Declared dependency names. Non-string entries are ignored.
    pub fn depends(&self) -> Vec<String> {
        self.0
            .get("depends")
            .and_then(Value::as_array)
            .map(|deps| {
                deps.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// What an extension provides once registered.
#[derive(Clone)]
pub enum ExtensionKind {
    /// Resolved to a partially applied constructor awaiting instance arguments.
    Constructed(Constructor),
    /// Resolved to this value unchanged.
    Static(Instance),
}

/// A plugin-declared unit of functionality.
#[derive(Clone)]
pub struct Extension {
    /// Optional identifier, used in the registration name.
    pub key: Option<String>,
    /// Names of the providers injected ahead of instance arguments.
    pub depends: Vec<String>,
    /// All declared fields.
    pub definition: Definition,
    pub kind: ExtensionKind,
}

impl Extension {
    /// Creates an extension, taking `key` and `depends` from the definition.
    pub fn new(definition: Definition, kind: ExtensionKind) -> Self {
        Self {
            key: definition.key().map(str::to_owned),
            depends: definition.depends(),
            definition,
            kind,
        }
    }

    /// A static extension whose value is the definition itself, as JSON.
    pub fn from_definition(definition: Definition) -> Self {
        let value = Instance::new(definition.to_value());
        Self::new(definition, ExtensionKind::Static(value))
    }

    /// A static extension resolving to an arbitrary value.
    pub fn with_value<T: Any + Send + Sync>(definition: Definition, value: T) -> Self {
        Self::new(definition, ExtensionKind::Static(Instance::new(value)))
    }

    /// A constructed extension.
    pub fn constructed<F>(definition: Definition, constructor: F) -> Self
    where
        F: Fn(&Definition, Vec<Instance>) -> Result<Instance, MctError> + Send + Sync + 'static,
    {
        Self::new(definition, ExtensionKind::Constructed(Arc::new(constructor)))
    }

    /// Shorthand for a static extension declaring only a key.
    pub fn keyed(key: &str) -> Self {
        Self::from_definition(Definition::new().with("key", key))
    }

    /// Replaces the declared dependencies.
    pub fn depending_on<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends = names.into_iter().map(Into::into).collect();
        self.definition.insert(
            "depends",
            Value::Array(self.depends.iter().cloned().map(Value::from).collect()),
        );
        self
    }

    pub fn is_constructed(&self) -> bool {
        matches!(self.kind, ExtensionKind::Constructed(_))
    }
}

impl std::fmt::Debug for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension")
            .field("key", &self.key)
            .field("depends", &self.depends)
            .field("constructed", &self.is_constructed())
            .finish()
    }
}
