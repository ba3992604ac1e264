// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Only creatable objects may be copied.

use std::sync::Arc;

use mct_core::MctError;
use mct_core::types::FEATURE_CREATION;
use mct_extension::{Definition, ImplementationCatalog, Instance};

use crate::action::{ACTION_CATEGORY, ActionContext, ActionMetadata, ActionPolicy};
use crate::policy::Policy;

/// Action key this policy constrains.
pub const COPY_ACTION: &str = "copy";

/// Denies `copy` for objects whose type lacks the `creation` feature.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyPolicy;

impl Policy<ActionMetadata, ActionContext> for CopyPolicy {
    fn allow(&self, action: &ActionMetadata, context: &ActionContext) -> bool {
        if action.key != COPY_ACTION {
            return true;
        }
        context
            .target()
            .and_then(|object| object.object_type())
            .is_some_and(|ty| ty.has_feature(FEATURE_CREATION))
    }
}

/// Registers `CopyPolicy` as a catalog implementation.
pub(crate) fn register(catalog: &mut ImplementationCatalog) {
    catalog.register(
        "CopyPolicy",
        |definition: &Definition, _: Vec<Instance>| -> Result<Instance, MctError> {
            let category = definition.get_str("category").unwrap_or(ACTION_CATEGORY);
            Ok(Instance::new(ActionPolicy::new(category, Arc::new(CopyPolicy))))
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use mct_core::DomainObject;
    use mct_test_utils::MockObject;
    use mct_test_utils::fixtures::{creatable_type, fixed_type};
    use serde_json::json;

    fn object(ty: Option<mct_core::ObjectType>) -> Arc<dyn DomainObject> {
        let object = MockObject::new("o", json!({}));
        match ty {
            Some(ty) => Arc::new(object.with_type(ty)),
            None => Arc::new(object),
        }
    }

    #[test]
    fn copy_requires_creation_feature() {
        let copy = ActionMetadata::new("copy");
        assert!(CopyPolicy.allow(&copy, &ActionContext::for_object(object(Some(creatable_type())))));
        assert!(!CopyPolicy.allow(&copy, &ActionContext::for_object(object(Some(fixed_type())))));
    }

    #[test]
    fn untyped_or_missing_objects_are_not_copyable() {
        let copy = ActionMetadata::new("copy");
        assert!(!CopyPolicy.allow(&copy, &ActionContext::for_object(object(None))));
        assert!(!CopyPolicy.allow(&copy, &ActionContext::default()));
    }

    #[test]
    fn selection_takes_precedence() {
        let copy = ActionMetadata::new("copy");
        let context = ActionContext::for_object(object(Some(creatable_type())))
            .with_selection(object(Some(fixed_type())));
        assert!(!CopyPolicy.allow(&copy, &context));

        let context = ActionContext::for_object(object(Some(fixed_type())))
            .with_selection(object(Some(creatable_type())));
        assert!(CopyPolicy.allow(&copy, &context));
    }

    #[test]
    fn other_actions_are_allowed() {
        let context = ActionContext::for_object(object(None));
        assert!(CopyPolicy.allow(&ActionMetadata::new("remove"), &context));
        assert!(CopyPolicy.allow(&ActionMetadata::new("move"), &context));
    }
}
