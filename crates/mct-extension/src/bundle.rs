// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bundle manifest parsing from `bundle.toml` files.
//!
//! A bundle groups the extensions one plugin contributes, by category:
//!
//! ```toml
//! [bundle]
//! name = "platform/entanglement"
//! version = "1.0.0"
//!
//! [[extensions.policies]]
//! category = "action"
//! implementation = "CopyPolicy"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use mct_core::MctError;
use serde::Deserialize;
use serde_json::json;

use crate::catalog::ImplementationCatalog;
use crate::extension::{Definition, ExtensionGroup};
use crate::sorter::sort_group;

/// Parsed bundle manifest.
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Unique bundle name (e.g., "platform/features/table").
    pub name: String,
    pub version: semver::Version,
    /// Path the bundle's resources are served from. Defaults to the name.
    pub path: String,
    /// Resource directory below `path`.
    pub resources: String,
    /// Extension definitions by category, in manifest order.
    pub extensions: IndexMap<String, Vec<Definition>>,
}

/// Intermediate TOML deserialization struct for `bundle.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BundleManifestFile {
    bundle: BundleSection,
    #[serde(default)]
    extensions: IndexMap<String, Vec<Definition>>,
}

/// The `[bundle]` section of a `bundle.toml` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BundleSection {
    name: String,
    version: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default = "default_resources")]
    resources: String,
}

fn default_resources() -> String {
    "res".to_string()
}

/// Parse a bundle manifest from TOML content.
///
/// Every definition is tagged with a `bundle` table (`name`, `path`,
/// `resources`) so views can locate their templates.
pub fn parse_bundle_manifest(toml_content: &str) -> Result<Bundle, MctError> {
    let file: BundleManifestFile = toml::from_str(toml_content)
        .map_err(|e| MctError::Config(format!("invalid bundle manifest: {e}")))?;

    let section = file.bundle;

    if section.name.trim().is_empty() {
        return Err(MctError::Config(
            "bundle manifest: name must not be empty".to_string(),
        ));
    }

    let version = semver::Version::parse(&section.version).map_err(|e| {
        MctError::Config(format!(
            "bundle manifest: invalid version '{}': {e}",
            section.version
        ))
    })?;

    let path = section.path.unwrap_or_else(|| section.name.clone());
    let origin = json!({
        "name": section.name,
        "path": path,
        "resources": section.resources,
    });

    let extensions = file
        .extensions
        .into_iter()
        .map(|(category, definitions)| {
            let tagged = definitions
                .into_iter()
                .map(|mut definition| {
                    definition.insert("bundle", origin.clone());
                    definition
                })
                .collect();
            (category, tagged)
        })
        .collect();

    Ok(Bundle {
        name: section.name,
        version,
        path,
        resources: section.resources,
        extensions,
    })
}

/// Read and parse a bundle manifest from disk.
pub fn load_bundle(path: &Path) -> Result<Bundle, MctError> {
    let content = std::fs::read_to_string(path)?;
    let bundle = parse_bundle_manifest(&content)
        .map_err(|e| MctError::Config(format!("{}: {e}", path.display())))?;
    tracing::debug!(
        bundle = %bundle.name,
        version = %bundle.version,
        categories = bundle.extensions.len(),
        "bundle loaded"
    );
    Ok(bundle)
}

/// An ordered set of bundles, merged into one extension group for registration.
#[derive(Debug, Default)]
pub struct BundleSet {
    bundles: Vec<Bundle>,
}

impl BundleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every manifest in `paths`, in order.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, MctError> {
        let mut set = Self::new();
        for path in paths {
            set.add(load_bundle(path.as_ref())?);
        }
        Ok(set)
    }

    /// Adds a bundle. A second bundle with an already-present name is ignored.
    pub fn add(&mut self, bundle: Bundle) {
        if self.bundles.iter().any(|b| b.name == bundle.name) {
            tracing::warn!(bundle = %bundle.name, "bundle already loaded; ignoring duplicate");
            return;
        }
        self.bundles.push(bundle);
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Merges every bundle's categories (bundle order, then manifest order),
    /// resolves implementations through `catalog`, and sorts by priority.
    ///
    /// The result holds each category once, so a single registration pass
    /// sees all of a category's extensions.
    pub fn extension_group(&self, catalog: &ImplementationCatalog) -> ExtensionGroup {
        let mut group = ExtensionGroup::new();
        for bundle in &self.bundles {
            for (category, definitions) in &bundle.extensions {
                let entry = group.entry(category.clone()).or_default();
                entry.extend(
                    definitions
                        .iter()
                        .map(|definition| catalog.resolve(category, definition.clone())),
                );
            }
        }
        sort_group(group)
    }
}
