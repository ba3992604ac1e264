// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The domain object seam and an in-memory implementation.
//!
//! Views, policies, and the table configuration only ever talk to objects
//! through [`DomainObject`]. [`MemoryObject`] keeps its model behind an
//! `ArcSwap` so readers never block while a mutation swaps in a new model.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use async_trait::async_trait;
use serde_json::Value;

use crate::error::MctError;
use crate::types::{Model, ObjectType};

/// Capability name under which every object exposes its model.
pub const CAPABILITY_MODEL: &str = "model";
/// Capability name under which typed objects expose their type.
pub const CAPABILITY_TYPE: &str = "type";
/// Capability name for model mutation.
pub const CAPABILITY_MUTATION: &str = "mutation";

/// Edits a model in place. Returning `false` cancels the mutation.
pub type Mutator = Box<dyn FnOnce(&mut Model) -> bool + Send>;

/// An addressable object owning a model and a set of named capabilities.
#[async_trait]
pub trait DomainObject: Send + Sync {
    /// Returns the object's identifier.
    fn id(&self) -> &str;

    /// Returns a snapshot of the object's current model.
    fn model(&self) -> Model;

    /// Returns the object's type, if it has one.
    fn object_type(&self) -> Option<&ObjectType>;

    /// Returns true if the named capability can be used on this object.
    fn has_capability(&self, name: &str) -> bool;

    /// Resolves the named capability to a value.
    async fn use_capability(&self, name: &str) -> Result<Value, MctError>;

    /// Applies `mutator` to a copy of the model and stores the result.
    ///
    /// Returns `Ok(false)` when the mutator cancelled the change.
    async fn mutate(&self, mutator: Mutator) -> Result<bool, MctError>;

    /// Timestamp of the last mutation, read from the model's `modified` field.
    fn modified(&self) -> Option<i64> {
        self.model().get("modified").and_then(Value::as_i64)
    }
}

/// A domain object held entirely in memory.
pub struct MemoryObject {
    id: String,
    model: ArcSwap<Value>,
    /// Serializes mutations; readers go through `model` without it.
    writer: Mutex<()>,
    object_type: Option<ObjectType>,
    capabilities: HashMap<String, Value>,
}

impl MemoryObject {
    /// Creates an untyped object with the given model.
    pub fn new(id: impl Into<String>, model: Model) -> Self {
        Self {
            id: id.into(),
            model: ArcSwap::from_pointee(model),
            writer: Mutex::new(()),
            object_type: None,
            capabilities: HashMap::new(),
        }
    }

    /// Sets the object's type.
    pub fn with_type(mut self, object_type: ObjectType) -> Self {
        self.object_type = Some(object_type);
        self
    }

    /// Registers a static capability value.
    pub fn with_capability(mut self, name: impl Into<String>, value: Value) -> Self {
        self.capabilities.insert(name.into(), value);
        self
    }

    /// Wraps the object for sharing across views and policies.
    pub fn shared(self) -> Arc<dyn DomainObject> {
        Arc::new(self)
    }
}

impl std::fmt::Debug for MemoryObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryObject")
            .field("id", &self.id)
            .field("object_type", &self.object_type.as_ref().map(|t| &t.key))
            .field("capabilities", &self.capabilities.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[async_trait]
impl DomainObject for MemoryObject {
    fn id(&self) -> &str {
        &self.id
    }

    fn model(&self) -> Model {
        self.model.load().as_ref().clone()
    }

    fn object_type(&self) -> Option<&ObjectType> {
        self.object_type.as_ref()
    }

    fn has_capability(&self, name: &str) -> bool {
        match name {
            CAPABILITY_MODEL | CAPABILITY_MUTATION => true,
            CAPABILITY_TYPE => self.object_type.is_some(),
            other => self.capabilities.contains_key(other),
        }
    }

    async fn use_capability(&self, name: &str) -> Result<Value, MctError> {
        let unavailable = || MctError::CapabilityUnavailable {
            object: self.id.clone(),
            capability: name.to_string(),
        };

        match name {
            CAPABILITY_MODEL => Ok(self.model()),
            CAPABILITY_TYPE => {
                let ty = self.object_type.as_ref().ok_or_else(unavailable)?;
                serde_json::to_value(ty).map_err(|e| MctError::Internal(e.to_string()))
            }
            other => self.capabilities.get(other).cloned().ok_or_else(unavailable),
        }
    }

    async fn mutate(&self, mutator: Mutator) -> Result<bool, MctError> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.model.load_full();
        let mut next = current.as_ref().clone();

        if !mutator(&mut next) {
            tracing::debug!(object = %self.id, "mutation cancelled");
            return Ok(false);
        }

        // Views refresh on a changed timestamp, so it must advance even when
        // two mutations land within the same millisecond.
        let previous = current.get("modified").and_then(Value::as_i64).unwrap_or(0);
        let stamp = chrono::Utc::now().timestamp_millis().max(previous + 1);
        match &mut next {
            Value::Object(map) => {
                map.insert("modified".to_string(), Value::from(stamp));
            }
            _ => {
                return Err(MctError::Internal(format!(
                    "model of {} is not an object",
                    self.id
                )));
            }
        }

        self.model.store(Arc::new(next));
        tracing::debug!(object = %self.id, modified = stamp, "model mutated");
        Ok(true)
    }
}
