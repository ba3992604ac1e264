// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A live representation of one domain object.
//!
//! [`Representation::update`] is called whenever its inputs may have
//! changed. It only rebuilds state when the key, the object identity, or the
//! object's `modified` timestamp differ from the previous refresh; parameters
//! are always taken as given.

use std::sync::Arc;

use mct_core::DomainObject;
use serde_json::{Map, Value};

use crate::definition::{RepresentationDefinition, Template};
use crate::gesture::GestureHandle;
use crate::representer::Representer;

/// Scope values a template renders against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepresentationState {
    pub key: Option<String>,
    pub definition: Option<RepresentationDefinition>,
    pub template: Option<Template>,
    /// Snapshot of the object's model.
    pub model: Option<Value>,
    /// `model.configuration[key]`, or an empty object.
    pub configuration: Value,
    pub parameters: Value,
    /// Resolved `uses` capabilities, by name.
    pub capabilities: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
struct Fingerprint {
    key: Option<String>,
    object_id: Option<String>,
    modified: Option<i64>,
}

/// A binding point for `key` and a domain object.
pub struct Representation {
    representer: Arc<Representer>,
    state: RepresentationState,
    last: Option<Fingerprint>,
    gestures: Option<Box<dyn GestureHandle>>,
}

impl Representation {
    pub fn new(representer: Arc<Representer>) -> Self {
        Self {
            representer,
            state: RepresentationState::default(),
            last: None,
            gestures: None,
        }
    }

    pub fn state(&self) -> &RepresentationState {
        &self.state
    }

    /// Applies new inputs. Returns `true` if the state was rebuilt.
    pub async fn update(
        &mut self,
        key: Option<&str>,
        object: Option<&Arc<dyn DomainObject>>,
        parameters: Value,
    ) -> bool {
        self.state.parameters = parameters;

        let fingerprint = Fingerprint {
            key: key.map(str::to_string),
            object_id: object.map(|o| o.id().to_string()),
            modified: object.and_then(|o| o.modified()),
        };
        if self.last.as_ref() == Some(&fingerprint) {
            return false;
        }

        self.refresh(key, object).await;
        self.last = Some(fingerprint);
        true
    }

    async fn refresh(&mut self, key: Option<&str>, object: Option<&Arc<dyn DomainObject>>) {
        self.detach();

        let definition = key.and_then(|k| {
            let found = self.representer.lookup(k, object.map(|o| &**o));
            if found.is_none() {
                tracing::warn!(key = k, "no representation found");
            }
            found.cloned()
        });

        let model = object.map(|o| o.model());
        let configuration = key
            .zip(model.as_ref())
            .and_then(|(k, m)| m.get("configuration")?.get(k).cloned())
            .unwrap_or_else(|| Value::Object(Map::new()));

        let mut capabilities = Map::new();
        if let (Some(def), Some(object)) = (&definition, object) {
            for name in &def.uses {
                if !object.has_capability(name) {
                    tracing::debug!(object = object.id(), capability = %name, "capability not exposed");
                    continue;
                }
                match object.use_capability(name).await {
                    Ok(value) => {
                        capabilities.insert(name.clone(), value);
                    }
                    Err(e) => {
                        tracing::warn!(object = object.id(), capability = %name, error = %e, "capability failed");
                    }
                }
            }
        }

        if let (Some(def), Some(object)) = (&definition, object) {
            self.gestures = Some(
                self.representer
                    .gesture_service()
                    .attach(object, &def.gestures),
            );
        }

        self.state = RepresentationState {
            key: key.map(str::to_string),
            template: definition.as_ref().and_then(RepresentationDefinition::template),
            definition,
            model,
            configuration,
            parameters: std::mem::take(&mut self.state.parameters),
            capabilities,
        };
    }

    /// Detaches gestures. The state is kept until the next update.
    pub fn destroy(&mut self) {
        self.detach();
        self.last = None;
    }

    fn detach(&mut self) {
        if let Some(mut handle) = self.gestures.take() {
            handle.destroy();
        }
    }
}

impl Drop for Representation {
    fn drop(&mut self) {
        self.detach();
    }
}
