// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registers categorized extensions into a [`Container`].
//!
//! Every extension gets its own provider, named `category[key-index]` (or
//! `category[index]` when it has no key), and every category gets an
//! aggregate provider named `category[]` that resolves to all of its
//! extensions in order. A category is registered at most once per registrar;
//! later groups naming the same category are dropped with a warning.

use std::collections::{BTreeSet, HashMap};

use crate::constructor::PartialConstructor;
use crate::container::{Container, Provider};
use crate::extension::{Extension, ExtensionGroup, ExtensionKind};
use crate::instance::Instance;

/// Suffix naming a category's aggregate provider.
pub const EXTENSION_SUFFIX: &str = "[]";

/// Per-category replacement for the default registration, called once per extension.
pub type CustomRegistrar<C> = Box<dyn FnMut(&mut C, &Extension)>;

/// Registration name of the extension at `index` within `category`.
pub fn extension_name(category: &str, extension: &Extension, index: usize) -> String {
    match &extension.key {
        Some(key) => format!("{category}[{key}-{index}]"),
        None => format!("{category}[{index}]"),
    }
}

/// Registration name of a category's aggregate provider.
pub fn aggregate_name(category: &str) -> String {
    format!("{category}{EXTENSION_SUFFIX}")
}

/// Translates extension groups into container registrations.
pub struct ExtensionRegistrar<C: Container> {
    container: C,
    registered: HashMap<String, bool>,
    custom: HashMap<String, CustomRegistrar<C>>,
    fill_empty_dependencies: bool,
}

impl<C: Container> ExtensionRegistrar<C> {
    pub fn new(container: C) -> Self {
        Self {
            container,
            registered: HashMap::new(),
            custom: HashMap::new(),
            fill_empty_dependencies: true,
        }
    }

    /// Routes every extension of `category` through `registrar` instead of
    /// the default provider synthesis.
    pub fn with_custom_registrar<F>(mut self, category: impl Into<String>, registrar: F) -> Self
    where
        F: FnMut(&mut C, &Extension) + 'static,
    {
        self.custom.insert(category.into(), Box::new(registrar));
        self
    }

    /// Controls whether `category[]` dependencies with no extensions are
    /// registered as empty lists.
    pub fn register_empty_dependencies(mut self, enabled: bool) -> Self {
        self.fill_empty_dependencies = enabled;
        self
    }

    pub fn is_registered(&self, category: &str) -> bool {
        self.registered.get(category).copied().unwrap_or(false)
    }

    /// Categories registered so far, sorted.
    pub fn registered_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .registered
            .iter()
            .filter(|(_, done)| **done)
            .map(|(category, _)| category.as_str())
            .collect();
        categories.sort_unstable();
        categories
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }

    /// Registers every category in `group`, returning the container for chaining.
    pub fn register_extensions(&mut self, group: &ExtensionGroup) -> &mut C {
        let accepted: Vec<&[Extension]> = group
            .iter()
            .filter(|(category, extensions)| self.register_category(category, extensions))
            .map(|(_, extensions)| extensions.as_slice())
            .collect();
        if self.fill_empty_dependencies {
            self.register_empty_dependencies_for(&accepted);
        }
        &mut self.container
    }

    /// Returns `false` when the category was already registered and the set was dropped.
    fn register_category(&mut self, category: &str, extensions: &[Extension]) -> bool {
        if self.is_registered(category) {
            tracing::warn!(
                category,
                ignored = extensions.len(),
                "tried to register extensions for category {category} more than once; ignoring all but the first set"
            );
            return false;
        }

        if let Some(custom) = self.custom.get_mut(category) {
            for extension in extensions {
                custom(&mut self.container, extension);
            }
            tracing::debug!(category, count = extensions.len(), "custom registrar applied");
        } else {
            let names: Vec<String> = extensions
                .iter()
                .enumerate()
                .map(|(index, extension)| {
                    let name = extension_name(category, extension, index);
                    self.container.factory(&name, extension_provider(&name, extension));
                    name
                })
                .collect();

            let aggregate = aggregate_name(category);
            tracing::debug!(category, count = names.len(), "registered {aggregate}");
            self.container.factory(&aggregate, aggregate_provider(names));
        }

        self.registered.insert(category.to_string(), true);
        true
    }

    /// Registers `category[]` as an empty list for every aggregate some
    /// accepted extension depends on but that nothing has provided.
    fn register_empty_dependencies_for(&mut self, accepted: &[&[Extension]]) {
        let needed: BTreeSet<String> = accepted
            .iter()
            .flat_map(|extensions| extensions.iter())
            .flat_map(|extension| extension.depends.iter())
            .filter(|dep| {
                dep.strip_suffix(EXTENSION_SUFFIX)
                    .is_some_and(|category| !self.is_registered(category))
            })
            .cloned()
            .collect();

        for name in needed {
            tracing::info!("registering empty extension category {name}");
            self.container
                .factory(&name, Provider::value(Instance::new(Vec::<Instance>::new())));
        }
    }
}

fn extension_provider(name: &str, extension: &Extension) -> Provider {
    let depends = extension.depends.clone();
    match &extension.kind {
        ExtensionKind::Constructed(constructor) => {
            let partial =
                PartialConstructor::new(name, extension.definition.clone(), constructor.clone());
            Provider::new(depends, move |dependencies| {
                Ok(Instance::new(partial.with_dependencies(dependencies)))
            })
        }
        ExtensionKind::Static(value) => {
            let value = value.clone();
            Provider::new(depends, move |_| Ok(value.clone()))
        }
    }
}

/// Concatenates the members in order; a member that is itself a list is spliced in.
fn aggregate_provider(names: Vec<String>) -> Provider {
    Provider::new(names, |members| {
        let mut all = Vec::with_capacity(members.len());
        for member in members {
            match member.as_list() {
                Some(list) => all.extend(list.iter().cloned()),
                None => all.push(member),
            }
        }
        Ok(Instance::new(all))
    })
}

/// Custom registrar for the `constants` category: registers each extension's
/// `value` (or, lacking one, its whole definition) under its key.
pub fn constant_registrar<C: Container>() -> impl FnMut(&mut C, &Extension) {
    |container: &mut C, extension: &Extension| {
        let Some(key) = extension.key.as_deref() else {
            tracing::warn!("constant extension without a key ignored");
            return;
        };
        let value = extension
            .definition
            .get("value")
            .cloned()
            .unwrap_or_else(|| extension.definition.to_value());
        container.factory(key, Provider::value(Instance::new(value)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Injector;
    use crate::extension::Definition;
    use indexmap::IndexMap;
    use mct_core::MctError;
    use serde_json::json;
    use tracing_test::traced_test;

    /// Records every `factory` call without resolving anything.
    #[derive(Default)]
    struct RecordingContainer {
        calls: Vec<(String, Vec<String>)>,
    }

    impl Container for RecordingContainer {
        fn factory(&mut self, name: &str, provider: Provider) {
            self.calls.push((name.to_string(), provider.depends().to_vec()));
        }
    }

    impl RecordingContainer {
        fn names(&self) -> Vec<&str> {
            self.calls.iter().map(|(n, _)| n.as_str()).collect()
        }
    }

    fn group(entries: Vec<(&str, Vec<Extension>)>) -> ExtensionGroup {
        entries
            .into_iter()
            .map(|(category, extensions)| (category.to_string(), extensions))
            .collect::<IndexMap<_, _>>()
    }

    #[test]
    fn extension_names_include_key_and_index() {
        let keyed = Extension::keyed("k").depending_on(["a", "b"]);
        assert_eq!(extension_name("types", &keyed, 2), "types[k-2]");

        let anonymous = Extension::from_definition(Definition::new());
        assert_eq!(extension_name("types", &anonymous, 0), "types[0]");
        assert_eq!(aggregate_name("types"), "types[]");
    }

    #[test]
    fn registers_each_extension_then_the_aggregate() {
        let mut registrar = ExtensionRegistrar::new(RecordingContainer::default());
        registrar.register_extensions(&group(vec![(
            "actions",
            vec![Extension::keyed("copy"), Extension::keyed("delete")],
        )]));

        let container = registrar.container();
        assert_eq!(
            container.names(),
            vec!["actions[copy-0]", "actions[delete-1]", "actions[]"]
        );
        assert_eq!(
            container.calls[2].1,
            vec!["actions[copy-0]", "actions[delete-1]"]
        );
        assert!(registrar.is_registered("actions"));
    }

    #[test]
    fn extension_providers_carry_declared_dependencies() {
        let mut registrar = ExtensionRegistrar::new(RecordingContainer::default());
        registrar.register_extensions(&group(vec![(
            "types",
            vec![
                Extension::keyed("a"),
                Extension::keyed("b"),
                Extension::keyed("k").depending_on(["x", "y"]),
            ],
        )]));

        let (name, deps) = &registrar.container().calls[2];
        assert_eq!(name, "types[k-2]");
        assert_eq!(deps, &vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    #[traced_test]
    fn duplicate_category_is_dropped_with_one_warning() {
        let mut registrar = ExtensionRegistrar::new(RecordingContainer::default());
        registrar.register_extensions(&group(vec![(
            "actions",
            vec![Extension::keyed("copy"), Extension::keyed("delete")],
        )]));
        let before = registrar.container().calls.len();

        registrar.register_extensions(&group(vec![("actions", vec![Extension::keyed("view")])]));

        assert_eq!(registrar.container().calls.len(), before);
        assert!(logs_contain("more than once"));
        logs_assert(|lines: &[&str]| {
            match lines.iter().filter(|line| line.contains("WARN")).count() {
                1 => Ok(()),
                n => Err(format!("expected exactly one warning, saw {n}")),
            }
        });
    }

    #[test]
    fn dropped_duplicate_does_not_fill_its_dependencies() {
        let mut registrar = ExtensionRegistrar::new(RecordingContainer::default());
        registrar.register_extensions(&group(vec![(
            "actions",
            vec![Extension::keyed("copy"), Extension::keyed("delete")],
        )]));
        let before: Vec<String> = registrar
            .container()
            .names()
            .into_iter()
            .map(String::from)
            .collect();

        registrar.register_extensions(&group(vec![(
            "actions",
            vec![Extension::keyed("view").depending_on(["menus[]"])],
        )]));

        assert_eq!(registrar.container().names(), before);
        assert!(!registrar.is_registered("menus"));
    }

    #[test]
    fn static_values_resolve_unchanged() {
        let mut registrar = ExtensionRegistrar::new(Injector::new());
        registrar.register_extensions(&group(vec![
            (
                "limits",
                vec![Extension::with_value(Definition::new().with("key", "max"), 99_u32)],
            ),
            (
                "types",
                vec![Extension::with_value(
                    Definition::new().with("key", "v"),
                    "payload".to_string(),
                )
                .depending_on(["limits[]"])],
            ),
        ]));

        let injector = registrar.container_mut();
        let value = injector.resolve_as::<String>("types[v-0]").unwrap();
        assert_eq!(value.as_str(), "payload");
    }

    #[test]
    fn constructed_extensions_resolve_to_bound_constructors() {
        let mut injector = Injector::new();
        injector.factory("prefix", Provider::value(Instance::new(">".to_string())));

        let mut registrar = ExtensionRegistrar::new(injector);
        let action = Extension::constructed(
            Definition::new().with("key", "echo").with("depends", json!(["prefix"])),
            |_: &Definition, args: Vec<Instance>| -> Result<Instance, MctError> {
                let text: String = args
                    .iter()
                    .filter_map(|a| a.downcast_ref::<String>().cloned())
                    .collect();
                Ok(Instance::new(text))
            },
        );
        registrar.register_extensions(&group(vec![("actions", vec![action])]));

        let injector = registrar.container_mut();
        let bound = injector
            .resolve_as::<crate::BoundConstructor>("actions[echo-0]")
            .unwrap();
        assert_eq!(bound.definition().key(), Some("echo"));
        let built = bound
            .with_instance_args(vec![Instance::new("hi".to_string())])
            .unwrap();
        assert_eq!(built.downcast_ref::<String>().unwrap(), ">hi");
    }

    #[test]
    fn aggregate_preserves_order_and_splices_lists() {
        let mut registrar = ExtensionRegistrar::new(Injector::new());
        registrar.register_extensions(&group(vec![(
            "numbers",
            vec![
                Extension::with_value(Definition::new(), 1_i32),
                Extension::with_value(
                    Definition::new(),
                    vec![Instance::new(2_i32), Instance::new(3_i32)],
                ),
                Extension::with_value(Definition::new(), 4_i32),
            ],
        )]));

        let all = registrar.container_mut().resolve("numbers[]").unwrap();
        let values: Vec<i32> = all
            .as_list()
            .unwrap()
            .iter()
            .map(|i| *i.downcast_ref::<i32>().unwrap())
            .collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn custom_registrar_replaces_default_registration() {
        let mut registrar = ExtensionRegistrar::new(Injector::new())
            .with_custom_registrar("constants", constant_registrar());
        registrar.register_extensions(&group(vec![(
            "constants",
            vec![
                Extension::from_definition(
                    Definition::new().with("key", "DATE_FORMAT").with("value", "%Y"),
                ),
                Extension::from_definition(Definition::new().with("key", "NO_VALUE")),
            ],
        )]));

        assert!(registrar.is_registered("constants"));
        let injector = registrar.container_mut();
        assert!(!injector.contains("constants[]"));
        let value = injector.resolve("DATE_FORMAT").unwrap();
        assert_eq!(value.as_json(), Some(&json!("%Y")));
        let whole = injector.resolve("NO_VALUE").unwrap();
        assert_eq!(whole.as_json(), Some(&json!({"key": "NO_VALUE"})));
    }

    #[test]
    fn custom_category_is_also_registered_once() {
        let counter = std::rc::Rc::new(std::cell::Cell::new(0));
        let hits = std::rc::Rc::clone(&counter);
        let mut registrar = ExtensionRegistrar::new(RecordingContainer::default())
            .with_custom_registrar("runs", move |_: &mut RecordingContainer, _: &Extension| {
                hits.set(hits.get() + 1);
            });

        for _ in 0..2 {
            registrar.register_extensions(&group(vec![(
                "runs",
                vec![Extension::keyed("a"), Extension::keyed("b")],
            )]));
        }

        assert_eq!(counter.get(), 2);
        assert!(registrar.container().calls.is_empty());
    }

    #[test]
    fn missing_dependency_categories_become_empty_lists() {
        let mut registrar = ExtensionRegistrar::new(Injector::new());
        registrar.register_extensions(&group(vec![(
            "services",
            vec![Extension::keyed("actionService").depending_on(["actions[]", "views[]", "plain"])],
        )]));

        let injector = registrar.container_mut();
        assert!(injector.contains("actions[]"));
        assert!(injector.contains("views[]"));
        assert!(!injector.contains("plain"));
        assert!(injector.resolve("actions[]").unwrap().as_list().unwrap().is_empty());
        assert!(!registrar.is_registered("actions"));
    }

    #[test]
    fn empty_fill_skips_previously_registered_categories() {
        let mut registrar = ExtensionRegistrar::new(RecordingContainer::default());
        registrar.register_extensions(&group(vec![("actions", vec![Extension::keyed("copy")])]));
        registrar.register_extensions(&group(vec![(
            "services",
            vec![Extension::keyed("s").depending_on(["actions[]"])],
        )]));

        let aggregate_calls = registrar
            .container()
            .names()
            .into_iter()
            .filter(|n| *n == "actions[]")
            .count();
        assert_eq!(aggregate_calls, 1);
    }

    #[test]
    fn empty_fill_can_be_disabled() {
        let mut registrar =
            ExtensionRegistrar::new(RecordingContainer::default()).register_empty_dependencies(false);
        registrar.register_extensions(&group(vec![(
            "services",
            vec![Extension::keyed("s").depending_on(["actions[]"])],
        )]));
        assert_eq!(registrar.container().names(), vec!["services[s-0]", "services[]"]);
    }

    #[test]
    fn registered_categories_are_sorted() {
        let mut registrar = ExtensionRegistrar::new(RecordingContainer::default());
        registrar.register_extensions(&group(vec![
            ("views", vec![]),
            ("actions", vec![]),
        ]));
        assert_eq!(registrar.registered_categories(), vec!["actions", "views"]);
        assert_eq!(registrar.into_container().names(), vec!["views[]", "actions[]"]);
    }
}
