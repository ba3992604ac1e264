// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension registration for MCT.
//!
//! Plugins declare extensions by category (types, views, actions, policies).
//! The [`ExtensionRegistrar`] turns a category-to-extensions mapping into
//! named [`Provider`]s on a [`Container`]; the [`Injector`] resolves those
//! providers on demand. Bundle manifests and the implementation catalog
//! produce the extension groups the registrar consumes.

pub mod bundle;
pub mod catalog;
pub mod constructor;
pub mod container;
pub mod extension;
pub mod instance;
pub mod registrar;
pub mod sorter;

pub use bundle::{Bundle, BundleSet, load_bundle, parse_bundle_manifest};
pub use catalog::ImplementationCatalog;
pub use constructor::{BoundConstructor, PartialConstructor};
pub use container::{Container, Injector, Provider};
pub use extension::{Constructor, Definition, Extension, ExtensionGroup, ExtensionKind};
pub use instance::Instance;
pub use registrar::{
    EXTENSION_SUFFIX, ExtensionRegistrar, aggregate_name, constant_registrar, extension_name,
};
pub use sorter::{PriorityLevel, sort_extensions, sort_group};
