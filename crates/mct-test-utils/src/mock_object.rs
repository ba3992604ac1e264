// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock domain object for deterministic testing.
//!
//! `MockObject` answers capabilities from a script, can be told to fail
//! specific ones, and records every capability use and mutation so tests
//! can assert on how views and policies drove it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mct_core::object::{CAPABILITY_MODEL, CAPABILITY_MUTATION};
use mct_core::{DomainObject, MctError, Model, Mutator, ObjectType};
use serde_json::Value;

#[derive(Default)]
struct State {
    model: Model,
    calls: Vec<String>,
    mutations: usize,
}

/// A domain object with scripted capabilities.
pub struct MockObject {
    id: String,
    object_type: Option<ObjectType>,
    capabilities: HashMap<String, Value>,
    failing: Vec<String>,
    mutable: bool,
    state: Mutex<State>,
}

impl MockObject {
    /// Create an untyped, mutable object with the given model.
    pub fn new(id: impl Into<String>, model: Model) -> Self {
        Self {
            id: id.into(),
            object_type: None,
            capabilities: HashMap::new(),
            failing: Vec::new(),
            mutable: true,
            state: Mutex::new(State {
                model,
                ..State::default()
            }),
        }
    }

    pub fn with_type(mut self, object_type: ObjectType) -> Self {
        self.object_type = Some(object_type);
        self
    }

    /// Script a capability to resolve to `value`.
    pub fn with_capability(mut self, name: impl Into<String>, value: Value) -> Self {
        self.capabilities.insert(name.into(), value);
        self
    }

    /// Script a capability that is advertised but fails when used.
    pub fn with_failing_capability(mut self, name: impl Into<String>) -> Self {
        self.failing.push(name.into());
        self
    }

    /// Remove the mutation capability.
    pub fn read_only(mut self) -> Self {
        self.mutable = false;
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Capability names used so far, in call order.
    pub fn capability_calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    /// Number of mutations applied (cancelled ones excluded).
    pub fn mutation_count(&self) -> usize {
        self.state().mutations
    }

    /// Replace the model directly, as an external writer would.
    pub fn set_model(&self, model: Model) {
        self.state().model = model;
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DomainObject for MockObject {
    fn id(&self) -> &str {
        &self.id
    }

    fn model(&self) -> Model {
        self.state().model.clone()
    }

    fn object_type(&self) -> Option<&ObjectType> {
        self.object_type.as_ref()
    }

    fn has_capability(&self, name: &str) -> bool {
        match name {
            CAPABILITY_MODEL => true,
            CAPABILITY_MUTATION => self.mutable,
            other => {
                self.capabilities.contains_key(other) || self.failing.iter().any(|f| f == other)
            }
        }
    }

    async fn use_capability(&self, name: &str) -> Result<Value, MctError> {
        self.state().calls.push(name.to_string());

        if self.failing.iter().any(|f| f == name) {
            return Err(MctError::Internal(format!("capability {name} failed")));
        }
        match name {
            CAPABILITY_MODEL => Ok(self.model()),
            other => self.capabilities.get(other).cloned().ok_or_else(|| {
                MctError::CapabilityUnavailable {
                    object: self.id.clone(),
                    capability: other.to_string(),
                }
            }),
        }
    }

    async fn mutate(&self, mutator: Mutator) -> Result<bool, MctError> {
        if !self.mutable {
            return Err(MctError::CapabilityUnavailable {
                object: self.id.clone(),
                capability: CAPABILITY_MUTATION.to_string(),
            });
        }

        let mut state = self.state();
        let mut next = state.model.clone();
        if !mutator(&mut next) {
            return Ok(false);
        }
        state.mutations += 1;
        let modified = state.mutations as i64;
        if let Value::Object(map) = &mut next {
            map.insert("modified".to_string(), Value::from(modified));
        }
        state.model = next;
        Ok(true)
    }
}
