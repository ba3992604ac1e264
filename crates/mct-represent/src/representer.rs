// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-to-representation lookup over the registered representations and views.

use std::sync::Arc;

use mct_core::DomainObject;
use mct_extension::Definition;

use crate::definition::RepresentationDefinition;
use crate::gesture::GestureService;

/// Resolves representation keys for domain objects.
pub struct Representer {
    representations: Vec<RepresentationDefinition>,
    views: Vec<RepresentationDefinition>,
    gestures: Arc<dyn GestureService>,
}

impl Representer {
    pub fn new(
        representations: Vec<RepresentationDefinition>,
        views: Vec<RepresentationDefinition>,
        gestures: Arc<dyn GestureService>,
    ) -> Self {
        Self {
            representations,
            views,
            gestures,
        }
    }

    /// Builds a representer from raw extension definitions.
    ///
    /// Definitions that cannot be read as representations are logged and
    /// left out.
    pub fn from_definitions(
        representations: &[Definition],
        views: &[Definition],
        gestures: Arc<dyn GestureService>,
    ) -> Self {
        Self::new(read_all(representations), read_all(views), gestures)
    }

    /// Finds the representation for `key`: representations before views, in
    /// declaration order, taking the first whose type filter admits `object`.
    pub fn lookup(
        &self,
        key: &str,
        object: Option<&dyn DomainObject>,
    ) -> Option<&RepresentationDefinition> {
        self.representations
            .iter()
            .chain(&self.views)
            .find(|def| def.key == key && def.applies_to(object))
    }

    /// Every key a representation or view is registered under, deduplicated.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for def in self.representations.iter().chain(&self.views) {
            if !keys.contains(&def.key.as_str()) {
                keys.push(&def.key);
            }
        }
        keys
    }

    pub fn gesture_service(&self) -> &Arc<dyn GestureService> {
        &self.gestures
    }
}

fn read_all(definitions: &[Definition]) -> Vec<RepresentationDefinition> {
    definitions
        .iter()
        .filter_map(|definition| match RepresentationDefinition::from_definition(definition) {
            Ok(def) => Some(def),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable representation");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::NoGestures;
    use mct_core::{MemoryObject, ObjectType};
    use serde_json::json;

    fn typed(key: &str, ty: &str) -> RepresentationDefinition {
        let mut def = RepresentationDefinition::new(key);
        def.object_type = Some(ty.to_string());
        def.name = Some(format!("{key} for {ty}"));
        def
    }

    #[test]
    fn representations_win_over_views() {
        let mut rep = RepresentationDefinition::new("label");
        rep.name = Some("representation".to_string());
        let mut view = RepresentationDefinition::new("label");
        view.name = Some("view".to_string());

        let representer = Representer::new(vec![rep], vec![view], Arc::new(NoGestures));
        let found = representer.lookup("label", None).unwrap();
        assert_eq!(found.name.as_deref(), Some("representation"));
        assert!(representer.lookup("missing", None).is_none());
    }

    #[test]
    fn skips_candidates_whose_type_does_not_match() {
        let representer = Representer::new(
            Vec::new(),
            vec![typed("plot", "telemetry"), RepresentationDefinition::new("plot")],
            Arc::new(NoGestures),
        );
        let point = MemoryObject::new("p", json!({}))
            .with_type(ObjectType::new("generator").inheriting("telemetry"));
        let folder = MemoryObject::new("f", json!({})).with_type(ObjectType::new("folder"));

        let for_point = representer.lookup("plot", Some(&point as &dyn DomainObject));
        assert_eq!(for_point.unwrap().object_type.as_deref(), Some("telemetry"));
        let for_folder = representer.lookup("plot", Some(&folder as &dyn DomainObject));
        assert_eq!(for_folder.unwrap().object_type, None);
    }

    #[test]
    fn keys_are_deduplicated_in_order() {
        let representer = Representer::new(
            vec![RepresentationDefinition::new("label")],
            vec![
                RepresentationDefinition::new("table"),
                RepresentationDefinition::new("label"),
            ],
            Arc::new(NoGestures),
        );
        assert_eq!(representer.keys(), vec!["label", "table"]);
    }

    #[test]
    fn unreadable_definitions_are_dropped() {
        let good = Definition::from_value(json!({"key": "table"})).unwrap();
        let bad = Definition::from_value(json!({"uses": "not-a-list"})).unwrap();
        let representer = Representer::from_definitions(&[], &[good, bad], Arc::new(NoGestures));
        assert_eq!(representer.keys(), vec!["table"]);
    }
}
