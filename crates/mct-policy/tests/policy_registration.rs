// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Policies declared in a bundle reach a provider through the injector.

use std::sync::Arc;

use mct_core::DomainObject;
use mct_extension::{
    BundleSet, ExtensionRegistrar, ImplementationCatalog, Injector, parse_bundle_manifest,
};
use mct_policy::{ACTION_CATEGORY, ActionContext, ActionMetadata, PolicyProvider};
use mct_test_utils::MockObject;
use mct_test_utils::fixtures::{creatable_type, fixed_type};
use serde_json::json;

const ENTANGLEMENT: &str = r#"
[bundle]
name = "platform/entanglement"
version = "1.0.0"

[[extensions.policies]]
category = "action"
implementation = "CopyPolicy"

[[extensions.policies]]
category = "view"
implementation = "CopyPolicy"
"#;

fn action_policies() -> PolicyProvider<ActionMetadata, ActionContext> {
    let mut catalog = ImplementationCatalog::new();
    mct_policy::register_implementations(&mut catalog);

    let mut bundles = BundleSet::new();
    bundles.add(parse_bundle_manifest(ENTANGLEMENT).unwrap());

    let mut registrar = ExtensionRegistrar::new(Injector::new());
    let injector = registrar.register_extensions(&bundles.extension_group(&catalog));
    let policies = injector.resolve("policies[]").unwrap();
    PolicyProvider::from_instances(ACTION_CATEGORY, policies.as_list().unwrap())
}

#[test]
fn copy_policy_is_collected_for_its_category_only() {
    let provider = action_policies();
    assert_eq!(provider.category(), "action");
    assert_eq!(provider.len(), 1);
}

#[test]
fn registered_copy_policy_gates_copy() {
    let provider = action_policies();
    let folder: Arc<dyn DomainObject> =
        Arc::new(MockObject::new("folder", json!({})).with_type(creatable_type()));
    let root: Arc<dyn DomainObject> =
        Arc::new(MockObject::new("root", json!({})).with_type(fixed_type()));

    let copy = ActionMetadata::new("copy");
    assert!(provider.allow(&copy, &ActionContext::for_object(folder.clone())));
    assert!(!provider.allow(&copy, &ActionContext::for_object(root.clone())));
    assert!(provider.allow(&ActionMetadata::new("remove"), &ActionContext::for_object(root)));
}
