// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed view of `representations` and `views` extension definitions.

use mct_core::{DomainObject, MctError};
use mct_extension::Definition;
use serde::Deserialize;

/// Where a bundle serves its resources from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BundleOrigin {
    #[serde(default)]
    pub name: String,
    pub path: String,
    pub resources: String,
}

/// The template a representation renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// Resource path: `bundle.path/bundle.resources/templateUrl`.
    Path(String),
    /// Template markup declared inline in the definition.
    Inline(String),
}

/// A representation or view extension.
///
/// Fields other than the ones below (priority, implementation, ...) are
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentationDefinition {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub template_url: Option<String>,
    /// Inline template markup; used when no `templateUrl` is given.
    #[serde(default)]
    pub template: Option<String>,
    /// Capabilities resolved into the representation's scope.
    #[serde(default)]
    pub uses: Vec<String>,
    /// Gesture keys attached while the representation is live.
    #[serde(default)]
    pub gestures: Vec<String>,
    /// Restricts the representation to objects of this type (or subtypes).
    #[serde(default, rename = "type")]
    pub object_type: Option<String>,
    #[serde(default)]
    pub bundle: Option<BundleOrigin>,
}

impl RepresentationDefinition {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            template_url: None,
            template: None,
            uses: Vec::new(),
            gestures: Vec::new(),
            object_type: None,
            bundle: None,
        }
    }

    /// Reads a definition as declared in a bundle manifest.
    pub fn from_definition(definition: &Definition) -> Result<Self, MctError> {
        serde_json::from_value(definition.to_value()).map_err(|e| {
            MctError::Config(format!(
                "invalid representation `{}`: {e}",
                definition.key().unwrap_or("<unkeyed>")
            ))
        })
    }

    /// Resolved template, if the definition declares one.
    ///
    /// A `templateUrl` without bundle information is used as-is.
    pub fn template(&self) -> Option<Template> {
        match (&self.template_url, &self.bundle) {
            (Some(url), Some(bundle)) => Some(Template::Path(format!(
                "{}/{}/{}",
                bundle.path, bundle.resources, url
            ))),
            (Some(url), None) => Some(Template::Path(url.clone())),
            (None, _) => self.template.clone().map(Template::Inline),
        }
    }

    /// True when this representation may show `object`.
    ///
    /// Untyped representations apply to everything, including no object.
    pub fn applies_to(&self, object: Option<&dyn DomainObject>) -> bool {
        let Some(required) = self.object_type.as_deref() else {
            return true;
        };
        object
            .and_then(|o| o.object_type())
            .is_some_and(|ty| ty.instance_of(required))
    }
}
