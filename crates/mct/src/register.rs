// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mct register` command implementation.

use std::path::{Path, PathBuf};

use mct_config::MctConfig;
use mct_core::MctError;
use mct_extension::{
    BoundConstructor, BundleSet, ExtensionRegistrar, ImplementationCatalog, Injector, Instance,
    constant_registrar,
};

/// Implementations every bundle may name.
pub fn builtin_catalog() -> ImplementationCatalog {
    let mut catalog = ImplementationCatalog::new();
    mct_policy::register_implementations(&mut catalog);
    catalog
}

/// Loads `paths` and registers their extensions into a fresh injector.
pub fn register_bundles<P: AsRef<Path>>(
    config: &MctConfig,
    paths: &[P],
) -> Result<(BundleSet, Injector), MctError> {
    let bundles = BundleSet::load(paths)?;
    let group = bundles.extension_group(&builtin_catalog());

    let mut registrar = ExtensionRegistrar::new(Injector::new())
        .with_custom_registrar("constants", constant_registrar())
        .register_empty_dependencies(config.registrar.register_empty_dependencies);
    registrar.register_extensions(&group);

    tracing::info!(
        bundles = bundles.len(),
        categories = registrar.registered_categories().len(),
        "extensions registered"
    );
    Ok((bundles, registrar.into_container()))
}

/// Run the `mct register` command.
///
/// Bundles given on the command line replace `bundles.paths` from config.
pub fn run_register(
    config: &MctConfig,
    bundles: &[PathBuf],
    resolve: Option<&str>,
) -> Result<(), MctError> {
    let paths: Vec<PathBuf> = if bundles.is_empty() {
        config.bundles.paths.iter().map(PathBuf::from).collect()
    } else {
        bundles.to_vec()
    };
    if paths.is_empty() {
        return Err(MctError::Config(
            "no bundles given and bundles.paths is empty".to_string(),
        ));
    }

    let (set, mut injector) = register_bundles(config, &paths)?;

    for bundle in set.bundles() {
        println!("bundle {} {}", bundle.name, bundle.version);
    }
    for name in injector.names() {
        let depends = injector.dependencies_of(name).unwrap_or_default();
        if depends.is_empty() {
            println!("  {name}");
        } else {
            println!("  {name} <- {}", depends.join(", "));
        }
    }

    if let Some(name) = resolve {
        let instance = injector.resolve(name)?;
        println!("{name} = {}", describe(&instance));
    }
    Ok(())
}

/// One-line rendering of a resolved instance.
pub fn describe(instance: &Instance) -> String {
    if let Some(list) = instance.as_list() {
        let members: Vec<String> = list.iter().map(describe).collect();
        return format!("[{}]", members.join(", "));
    }
    if let Some(value) = instance.as_json() {
        return value.to_string();
    }
    if let Some(bound) = instance.downcast_ref::<BoundConstructor>() {
        return format!("<constructor {}>", bound.name());
    }
    format!("<{}>", instance.type_name())
}
