// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidates and context for `action` policies.

use std::sync::Arc;

use mct_core::DomainObject;

use crate::policy::PolicyEntry;

/// Category name of policies that gate actions.
pub const ACTION_CATEGORY: &str = "action";

/// A policy entry for the `action` category.
pub type ActionPolicy = PolicyEntry<ActionMetadata, ActionContext>;

/// Describes an action being offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMetadata {
    pub key: String,
    pub name: Option<String>,
}

impl ActionMetadata {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
        }
    }
}

/// Where an action would be performed.
#[derive(Clone, Default)]
pub struct ActionContext {
    /// The object the action is invoked on.
    pub domain_object: Option<Arc<dyn DomainObject>>,
    /// The object selected for the action (e.g. the object being dragged).
    pub selected_object: Option<Arc<dyn DomainObject>>,
}

impl ActionContext {
    pub fn for_object(object: Arc<dyn DomainObject>) -> Self {
        Self {
            domain_object: Some(object),
            selected_object: None,
        }
    }

    pub fn with_selection(mut self, object: Arc<dyn DomainObject>) -> Self {
        self.selected_object = Some(object);
        self
    }

    /// The object the action targets: the selection if any, else the
    /// context's domain object.
    pub fn target(&self) -> Option<&Arc<dyn DomainObject>> {
        self.selected_object.as_ref().or(self.domain_object.as_ref())
    }
}

impl std::fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContext")
            .field("domain_object", &self.domain_object.as_ref().map(|o| o.id().to_string()))
            .field("selected_object", &self.selected_object.as_ref().map(|o| o.id().to_string()))
            .finish()
    }
}
