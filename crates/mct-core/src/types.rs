// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by domain objects, policies, and views.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A domain object's persisted model. Externally owned JSON record.
pub type Model = Value;

/// Feature flag marking a type whose instances users may create.
pub const FEATURE_CREATION: &str = "creation";

/// Describes the type of a domain object (folder, telemetry point, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectType {
    /// Unique type key, e.g. `"folder"`.
    pub key: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Features this type supports, e.g. `["creation"]`.
    #[serde(default)]
    pub features: Vec<String>,
    /// Keys of the types this type inherits from.
    #[serde(default)]
    pub inherits: Vec<String>,
}

impl ObjectType {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: String::new(),
            features: Vec::new(),
            inherits: Vec::new(),
        }
    }

    /// Adds a feature flag.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Adds an inherited type key.
    pub fn inheriting(mut self, key: impl Into<String>) -> Self {
        self.inherits.push(key.into());
        self
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// True if this type is `key` or directly inherits from it.
    pub fn instance_of(&self, key: &str) -> bool {
        self.key == key || self.inherits.iter().any(|k| k == key)
    }
}

/// Walks `path` through nested JSON objects, returning the value at the end.
pub fn lookup_path<'a>(model: &'a Model, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(model, |value, segment| value.get(segment))
}

/// Walks `path`, creating (or replacing non-object values with) empty objects
/// along the way, and returns a mutable slot for the final segment.
pub fn ensure_path<'a>(model: &'a mut Model, path: &[&str]) -> &'a mut Value {
    let mut current = model;
    for segment in path {
        if !current.is_object() {
            *current = Value::Object(serde_json::Map::new());
        }
        current = match current {
            Value::Object(map) => map.entry(segment.to_string()).or_insert(Value::Null),
            _ => unreachable!("value was just replaced by an object"),
        };
    }
    current
}
